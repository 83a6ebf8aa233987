use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Page {
  #[serde(default)]
  pub(crate) next: Option<String>,
  #[serde(default, deserialize_with = "deserialize_list")]
  pub(crate) posts: Vec<Post>,
}
