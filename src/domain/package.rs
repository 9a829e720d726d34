use crate::domain::version::is_valid_version;
use crate::error::{ReleaseTagError, Result};
use std::fmt;

/// Product family prefix stripped from package names by default
pub const DEFAULT_FAMILY: &str = "langgraph";

/// Name and version of a package as read from its manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
}

impl PackageDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        PackageDescriptor {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Checks that name and version are present and the version is well formed
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ReleaseTagError::invalid_descriptor(
                "package name is empty",
            ));
        }
        if self.version.is_empty() {
            return Err(ReleaseTagError::invalid_descriptor(format!(
                "package '{}' has an empty version",
                self.name
            )));
        }
        if !is_valid_version(&self.version) {
            return Err(ReleaseTagError::invalid_descriptor(format!(
                "package '{}' has version '{}', expected X.Y.Z with optional a/b/rc suffix",
                self.name, self.version
            )));
        }
        Ok(())
    }

    /// Short name of this package within the given product family
    pub fn short_name(&self, family: &str) -> ShortName {
        ShortName::derive(&self.name, family)
    }
}

/// Package name with the product family removed and hyphens stripped.
///
/// Empty for the family's root package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShortName(String);

impl ShortName {
    /// Removes every occurrence of `family`, then every hyphen.
    ///
    /// An empty family only strips hyphens.
    pub fn derive(name: &str, family: &str) -> Self {
        let without_family = if family.is_empty() {
            name.to_string()
        } else {
            name.replace(family, "")
        };
        ShortName(without_family.replace('-', ""))
    }

    pub fn new(short_name: impl Into<String>) -> Self {
        ShortName(short_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
