use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Comment {
  #[serde(default, deserialize_with = "deserialize_list")]
  pub(crate) replies: Vec<Reply>,
  #[serde(
    default,
    rename = "comment_text",
    deserialize_with = "deserialize_text"
  )]
  pub(crate) text: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_scraper_shape() {
    let comment: Comment = serde_json::from_str(
      r#"{
        "comment_id": "1",
        "comment_text": "Hi",
        "commenter_name": "someone",
        "replies": [{ "comment_text": "Hello" }, { "comment_text": null }]
      }"#,
    )
    .unwrap();

    assert_eq!(
      comment,
      Comment {
        replies: vec![
          Reply {
            text: "Hello".to_string()
          },
          Reply::default(),
        ],
        text: "Hi".to_string(),
      }
    );
  }

  #[test]
  fn missing_replies_are_empty() {
    let comment: Comment =
      serde_json::from_str(r#"{ "comment_text": "Bye" }"#).unwrap();

    assert!(comment.replies.is_empty());
  }
}
