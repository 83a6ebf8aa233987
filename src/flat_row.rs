use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FlatRow {
  Comment(String),
  Reply(String),
}

impl FlatRow {
  pub(crate) const HEADER: [&'static str; 2] = ["Comment", "Reply"];

  pub(crate) fn fields(&self) -> [&str; 2] {
    match self {
      Self::Comment(text) => [text.as_str(), ""],
      Self::Reply(text) => ["", text.as_str()],
    }
  }
}

impl From<Reply> for FlatRow {
  fn from(reply: Reply) -> Self {
    Self::Reply(reply.text)
  }
}
