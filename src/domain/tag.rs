use crate::domain::package::ShortName;
use crate::domain::version::VERSION_PATTERN;
use crate::error::{ReleaseTagError, Result};
use regex::Regex;
use std::fmt;

/// Separator between the short name and the version in sub-package tags
pub const TAG_SEPARATOR: &str = "==";

/// A release tag name, e.g. `checkpointsqlite==1.0.0` or `0.2.1rc1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
}

impl ReleaseTag {
    pub fn new(name: impl Into<String>) -> Self {
        ReleaseTag { name: name.into() }
    }

    /// Build the tag for a short name and version
    pub fn format(short_name: &ShortName, version: &str) -> Self {
        if short_name.is_empty() {
            ReleaseTag::new(version)
        } else {
            ReleaseTag::new(format!("{}{}{}", short_name, TAG_SEPARATOR, version))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Matcher for the tags that belong to one package
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Pattern for the given short name.
    ///
    /// The short name is escaped, so characters like `.` or `+` only match
    /// themselves.
    pub fn for_short_name(short_name: &ShortName) -> Result<Self> {
        let pattern = if short_name.is_empty() {
            format!("^{}$", VERSION_PATTERN)
        } else {
            format!(
                "^{}{}{}$",
                regex::escape(short_name.as_str()),
                regex::escape(TAG_SEPARATOR),
                VERSION_PATTERN
            )
        };

        let regex = Regex::new(&pattern).map_err(|e| {
            ReleaseTagError::tag(format!("Invalid tag pattern '{}': {}", pattern, e))
        })?;
        Ok(TagPattern { regex })
    }

    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_format_root_package() {
        let tag = ReleaseTag::format(&ShortName::default(), "0.2.1rc1");
        assert_eq!(tag.name, "0.2.1rc1");
    }

    #[test]
    fn test_tag_format_sub_package() {
        let tag = ReleaseTag::format(&ShortName::new("checkpointsqlite"), "1.0.0");
        assert_eq!(tag.name, "checkpointsqlite==1.0.0");
    }

    #[test]
    fn test_pattern_root_matches_bare_versions_only() {
        let pattern = TagPattern::for_short_name(&ShortName::default()).unwrap();
        assert!(pattern.matches("0.2.1"));
        assert!(pattern.matches("0.2.1rc1"));
        assert!(!pattern.matches("sdk==0.2.1"));
        assert!(!pattern.matches("v0.2.1"));
    }

    #[test]
    fn test_pattern_sub_package() {
        let pattern = TagPattern::for_short_name(&ShortName::new("checkpoint")).unwrap();
        assert!(pattern.matches("checkpoint==1.0.0"));
        assert!(pattern.matches("checkpoint==1.0.0b3"));
        assert!(!pattern.matches("checkpointsqlite==1.0.0"));
        assert!(!pattern.matches("xcheckpoint==1.0.0"));
        assert!(!pattern.matches("1.0.0"));
    }

    #[test]
    fn test_pattern_rejects_non_ascii_digits() {
        let root = TagPattern::for_short_name(&ShortName::default()).unwrap();
        assert!(!root.matches("١.٢.٣"));

        let sdk = TagPattern::for_short_name(&ShortName::new("sdk")).unwrap();
        assert!(!sdk.matches("sdk==١.٠.٠"));
        assert!(sdk.matches("sdk==1.0.0"));
    }

    #[test]
    fn test_pattern_escapes_short_name() {
        let pattern = TagPattern::for_short_name(&ShortName::new("a.b")).unwrap();
        assert!(pattern.matches("a.b==1.0.0"));
        assert!(!pattern.matches("axb==1.0.0"));

        let pattern = TagPattern::for_short_name(&ShortName::new("c++")).unwrap();
        assert!(pattern.matches("c++==1.0.0"));
        assert!(!pattern.matches("cc==1.0.0"));
    }
}
