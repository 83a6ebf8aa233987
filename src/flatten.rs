use super::*;

pub(crate) fn flatten(comments: Vec<Comment>) -> Vec<FlatRow> {
  let len = comments
    .iter()
    .map(|comment| 1 + comment.replies.len())
    .sum();

  let mut rows = Vec::with_capacity(len);

  for Comment { replies, text } in comments {
    rows.push(FlatRow::Comment(text));
    rows.extend(replies.into_iter().map(FlatRow::from));
  }

  rows
}
