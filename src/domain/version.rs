use crate::domain::prerelease::{PreRelease, PreReleaseType};
use crate::error::{ReleaseTagError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Unanchored version grammar: `major.minor.patch` with an optional
/// `a`, `b` or `rc` suffix followed by digits. Digits are ASCII only.
pub const VERSION_PATTERN: &str = r"[0-9]+\.[0-9]+\.[0-9]+((a|b|rc)[0-9]+)?";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(?:(a|b|rc)([0-9]+))?$")
            .expect("version regex is valid")
    })
}

/// Returns true if the whole string is a release version.
///
/// Only the grammar is checked; numeric components are not range limited.
pub fn is_valid_version(version: &str) -> bool {
    version_regex().is_match(version)
}

/// Release version with an optional pre-release suffix (e.g. `0.2.1rc1`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<PreRelease>,
}

impl Version {
    /// Create a final (non pre-release) version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Parse a version string such as `1.0.0`, `0.3.0a2` or `0.2.1rc1`
    pub fn parse(version: &str) -> Result<Self> {
        let captures = version_regex().captures(version).ok_or_else(|| {
            ReleaseTagError::invalid_descriptor(format!(
                "Invalid version format: '{}' - expected X.Y.Z with optional a/b/rc suffix",
                version
            ))
        })?;

        let component = |index: usize, label: &str| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                ReleaseTagError::invalid_descriptor(format!(
                    "Invalid {} version: {}",
                    label, &captures[index]
                ))
            })
        };

        let major = component(1, "major")?;
        let minor = component(2, "minor")?;
        let patch = component(3, "patch")?;

        let pre = match (captures.get(4), captures.get(5)) {
            (Some(kind), Some(number)) => {
                let kind = PreReleaseType::parse(kind.as_str())?;
                let number = number.as_str().parse::<u64>().map_err(|_| {
                    ReleaseTagError::invalid_descriptor(format!(
                        "Invalid pre-release number: {}",
                        number.as_str()
                    ))
                })?;
                Some(PreRelease::new(kind, number))
            }
            _ => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "{}", pre)?;
        }
        Ok(())
    }
}
