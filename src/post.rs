use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Post {
  #[serde(default, rename = "comments_full")]
  pub(crate) comments: Option<Vec<Comment>>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) post_id: Option<String>,
}

impl Post {
  pub(crate) fn into_comments(self) -> Result<Vec<Comment>, Error> {
    match self.comments {
      Some(comments) => Ok(comments),
      None => Err(Error::IncompleteData {
        post: self.post_id.unwrap_or_else(|| "unknown".to_string()),
      }),
    }
  }

  /// Keeps the first `max_comments` top-level comments. Replies stay with
  /// their comment and do not count against the limit.
  pub(crate) fn truncate_comments(mut self, max_comments: MaxComments) -> Self {
    if let Some(comments) = &mut self.comments {
      comments.truncate(max_comments.get());
    }

    self
  }
}
