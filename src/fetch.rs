use super::*;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// `posts` is lazy: nothing is read or requested until the stream is
/// polled, and callers may drop it after the first item.
pub(crate) trait Fetch {
  fn posts<'a>(
    &'a self,
    post_id: &'a PostId,
    max_comments: MaxComments,
  ) -> BoxStream<'a, Result<Post, BoxError>>;
}
