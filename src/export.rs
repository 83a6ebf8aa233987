use super::*;

#[derive(Debug, PartialEq)]
pub(crate) struct Export {
  pub(crate) path: PathBuf,
  pub(crate) rows: usize,
}
