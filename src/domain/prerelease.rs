//! Pre-release suffix handling
//!
//! Package versions carry an optional `a`, `b` or `rc` marker directly
//! followed by a number, with no separator: `1.0.0a1`, `0.2.1rc1`.

use crate::error::{ReleaseTagError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreReleaseType {
    /// Alpha pre-release (`a`)
    Alpha,
    /// Beta pre-release (`b`)
    Beta,
    /// Release candidate (`rc`)
    ReleaseCandidate,
}

impl PreReleaseType {
    /// Parse a pre-release marker; only the short forms are accepted
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// The marker as it appears inside a version string
    pub fn marker(&self) -> &'static str {
        match self {
            PreReleaseType::Alpha => "a",
            PreReleaseType::Beta => "b",
            PreReleaseType::ReleaseCandidate => "rc",
        }
    }

    /// Human readable label used in terminal output
    pub fn label(&self) -> &'static str {
        match self {
            PreReleaseType::Alpha => "alpha",
            PreReleaseType::Beta => "beta",
            PreReleaseType::ReleaseCandidate => "release candidate",
        }
    }
}

impl FromStr for PreReleaseType {
    type Err = ReleaseTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a" => Ok(PreReleaseType::Alpha),
            "b" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            other => Err(ReleaseTagError::invalid_descriptor(format!(
                "Invalid pre-release marker: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Pre-release suffix: a marker and its number
///
/// # Examples
/// - "a1" -> PreRelease { identifier: Alpha, number: 1 }
/// - "rc3" -> PreRelease { identifier: ReleaseCandidate, number: 3 }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub identifier: PreReleaseType,
    pub number: u64,
}

impl PreRelease {
    pub fn new(identifier: PreReleaseType, number: u64) -> Self {
        PreRelease { identifier, number }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.identifier, self.number)
    }
}
