use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MaxComments(NonZeroUsize);

impl MaxComments {
  pub(crate) fn get(self) -> usize {
    self.0.get()
  }

  pub(crate) fn parse(raw: &str) -> Result<Self, Error> {
    let invalid = |reason: String| Error::Parse {
      input: raw.to_string(),
      reason,
    };

    let count = raw
      .trim()
      .parse::<usize>()
      .map_err(|error| invalid(error.to_string()))?;

    NonZeroUsize::new(count)
      .map(Self)
      .ok_or_else(|| invalid("must be at least 1".to_string()))
  }
}

impl Display for MaxComments {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
