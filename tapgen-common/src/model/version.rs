use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, TapError};

lazy_static! {
    // Suffixes after the patch component (pre-release tags etc.) are allowed.
    static ref TAG_RE: Regex = Regex::new(r"^v\d+\.\d+\.\d+").unwrap();
}

/// A validated release tag such as `v1.4.45`.
///
/// Validation happens at construction, before any file or network access,
/// so a malformed version can never trigger an API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    pub fn parse(tag: &str) -> Result<Self> {
        if TAG_RE.is_match(tag) {
            Ok(Self(tag.to_string()))
        } else {
            Err(TapError::InvalidVersion(tag.to_string()))
        }
    }

    /// The full tag as it appears on the release, e.g. `v1.4.45`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The version with the leading `v` stripped, e.g. `1.4.45`.
    /// This is the form stored in the metadata document and the formula.
    pub fn bare_version(&self) -> &str {
        self.0.strip_prefix('v').unwrap_or(&self.0)
    }
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_semver_tag() {
        let tag = ReleaseTag::parse("v1.4.45").unwrap();
        assert_eq!(tag.as_str(), "v1.4.45");
        assert_eq!(tag.bare_version(), "1.4.45");
    }

    #[test]
    fn accepts_suffixed_tag() {
        let tag = ReleaseTag::parse("v2.0.0-rc.1").unwrap();
        assert_eq!(tag.bare_version(), "2.0.0-rc.1");
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(matches!(
            ReleaseTag::parse("1.4.45"),
            Err(TapError::InvalidVersion(_))
        ));
    }

    #[test]
    fn rejects_partial_version() {
        assert!(matches!(
            ReleaseTag::parse("v1.4"),
            Err(TapError::InvalidVersion(_))
        ));
        assert!(matches!(
            ReleaseTag::parse("vX.Y.Z"),
            Err(TapError::InvalidVersion(_))
        ));
        assert!(matches!(
            ReleaseTag::parse(""),
            Err(TapError::InvalidVersion(_))
        ));
    }
}
