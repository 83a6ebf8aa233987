use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Reply {
  #[serde(
    default,
    rename = "comment_text",
    deserialize_with = "deserialize_text"
  )]
  pub(crate) text: String,
}
