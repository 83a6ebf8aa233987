use super::*;

pub(crate) enum Source {
  Archive(Archive),
  Client(Client),
}

impl Fetch for Source {
  fn posts<'a>(
    &'a self,
    post_id: &'a PostId,
    max_comments: MaxComments,
  ) -> BoxStream<'a, Result<Post, BoxError>> {
    match self {
      Self::Archive(archive) => archive.posts(post_id, max_comments),
      Self::Client(client) => client.posts(post_id, max_comments),
    }
  }
}
