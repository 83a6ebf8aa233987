use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Request {
  pub(crate) max_comments: MaxComments,
  pub(crate) output: PathBuf,
  pub(crate) post_id: PostId,
}

impl Request {
  pub(crate) fn new(
    post_id: &str,
    max_comments: &str,
    output: &str,
  ) -> Result<Self, Error> {
    let post_id = PostId::parse(post_id)?;

    let max_comments = MaxComments::parse(max_comments)?;

    Ok(Self {
      max_comments,
      output: csv_path(output),
      post_id,
    })
  }
}
