use super::*;

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^%2F[^\s\x1C-\x1F]+%2Fposts%2F(?i:pfbid)[0-9A-Za-z]+&$")
    .expect("post id pattern should compile")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PostId(String);

impl PostId {
  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }

  pub(crate) fn is_valid(raw: &str) -> bool {
    PATTERN.is_match(raw)
  }

  pub(crate) fn parse(raw: &str) -> Result<Self, Error> {
    if Self::is_valid(raw) {
      Ok(Self(raw.to_string()))
    } else {
      Err(Error::Validation {
        post_id: raw.to_string(),
      })
    }
  }
}

impl Display for PostId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_group_post() {
    assert!(PostId::is_valid("%2Fgroups%2Fabc%2Fposts%2Fpfbid123abc&"));
  }

  #[test]
  fn accepts_any_case_marker() {
    for marker in ["PFBID", "PfBiD", "pfbID"] {
      assert!(
        PostId::is_valid(&format!("%2Fpage%2Fposts%2F{marker}0Zz9&")),
        "{marker} should be accepted"
      );
    }
  }

  #[test]
  fn accepts_nested_group_segment() {
    assert!(PostId::is_valid("%2Fgroups%2Fabc%2Fposts%2Fpfbid1&"));
    assert!(PostId::is_valid("%2Fa%2Fb%2Fc%2Fposts%2Fpfbid1&"));
  }

  #[test]
  fn accepts_non_ascii_group_segment() {
    assert!(PostId::is_valid("%2Fcafé%2Fposts%2Fpfbid1&"));
  }

  #[test]
  fn rejects_missing_marker_letter() {
    assert!(!PostId::is_valid("%2Fgroups%2Fabc%2Fposts%2Ffbid123&"));
  }

  #[test]
  fn rejects_missing_prefix() {
    assert!(!PostId::is_valid("groups%2Fabc%2Fposts%2Fpfbid123&"));
    assert!(!PostId::is_valid("%2Fposts%2Fpfbid123&"));
  }

  #[test]
  fn rejects_missing_ampersand() {
    assert!(!PostId::is_valid("%2Fgroups%2Fabc%2Fposts%2Fpfbid123"));
  }

  #[test]
  fn rejects_trailing_characters() {
    assert!(!PostId::is_valid("%2Fgroups%2Fabc%2Fposts%2Fpfbid123&x"));
    assert!(!PostId::is_valid("%2Fgroups%2Fabc%2Fposts%2Fpfbid123&\n"));
    assert!(!PostId::is_valid(" %2Fgroups%2Fabc%2Fposts%2Fpfbid123&"));
  }

  #[test]
  fn rejects_altered_case_outside_marker() {
    assert!(!PostId::is_valid("%2Fgroups%2Fabc%2FPosts%2Fpfbid123&"));
    assert!(!PostId::is_valid("%2fgroups%2Fabc%2Fposts%2Fpfbid123&"));
    assert!(!PostId::is_valid("%2Fgroups%2Fabc%2Fposts%2fpfbid123&"));
  }

  #[test]
  fn rejects_whitespace() {
    assert!(!PostId::is_valid("%2Fgroups abc%2Fposts%2Fpfbid123&"));
    assert!(!PostId::is_valid("%2Fgroups%2Fabc%2Fposts%2Fpfbid12 3&"));
    assert!(!PostId::is_valid("%2Fgroups\t%2Fposts%2Fpfbid123&"));
  }

  #[test]
  fn rejects_separator_control_characters() {
    for ch in ['\x1c', '\x1d', '\x1e', '\x1f'] {
      assert!(
        !PostId::is_valid(&format!("%2Fa{ch}b%2Fposts%2Fpfbid1&")),
        "{ch:?} should be rejected"
      );
    }
  }

  #[test]
  fn rejects_missing_posts_segment() {
    assert!(!PostId::is_valid("%2Fgroups%2Fabc%2Fpfbid123&"));
  }

  #[test]
  fn rejects_empty_segments() {
    assert!(!PostId::is_valid("%2F%2Fposts%2Fpfbid123&"));
    assert!(!PostId::is_valid("%2Fgroups%2Fposts%2Fpfbid&"));
  }

  #[test]
  fn rejects_non_alphanumeric_payload() {
    assert!(!PostId::is_valid("%2Fgroups%2Fposts%2Fpfbid12-3&"));
  }

  #[test]
  fn parse_reports_validation_error() {
    let error = PostId::parse("nope").unwrap_err();

    assert!(matches!(error, Error::Validation { .. }));
    assert_eq!(error.category(), "validation");
  }

  #[test]
  fn parse_keeps_raw_text() {
    let raw = "%2Fgroups%2Fabc%2Fposts%2Fpfbid123abc&";

    assert_eq!(PostId::parse(raw).unwrap().as_str(), raw);
  }
}
