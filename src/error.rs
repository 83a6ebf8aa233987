use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("could not retrieve the post")]
  Fetch {
    #[source]
    source: BoxError,
  },
  #[error(
    "post `{post}` has no comment data, the comments could not be retrieved"
  )]
  IncompleteData { post: String },
  #[error("could not write `{}`", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("max comments `{input}` is not a positive integer ({reason})")]
  Parse { input: String, reason: String },
  #[error(
    "invalid post id `{post_id}`, expected something like `%2FgroupName%2Fposts%2Fpfbid...&`"
  )]
  Validation { post_id: String },
}

impl Error {
  pub(crate) fn category(&self) -> &'static str {
    match self {
      Self::Fetch { .. } => "fetch",
      Self::IncompleteData { .. } => "incomplete data",
      Self::Io { .. } => "io",
      Self::Parse { .. } => "parse",
      Self::Validation { .. } => "validation",
    }
  }
}
