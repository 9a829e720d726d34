use crate::domain::changelog::{DEFAULT_BULLET, INITIAL_RELEASE};
use crate::domain::package::DEFAULT_FAMILY;
use crate::error::{ReleaseTagError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for in the current directory
pub const CONFIG_FILE_NAME: &str = "releasetag.toml";

/// Represents the complete configuration for release-tag.
///
/// Contains the product family stripped from package names and the changelog rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_family")]
    pub family: String,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Returns the default product family.
fn default_family() -> String {
    DEFAULT_FAMILY.to_string()
}

fn default_initial_message() -> String {
    INITIAL_RELEASE.to_string()
}

fn default_bullet() -> String {
    DEFAULT_BULLET.to_string()
}

/// Configuration for release notes rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_initial_message")]
    pub initial_message: String,

    #[serde(default = "default_bullet")]
    pub bullet: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            initial_message: default_initial_message(),
            bullet: default_bullet(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            family: default_family(),
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| ReleaseTagError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasetag.toml` in current directory
/// 3. `.releasetag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or the custom path is missing
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => discover_config(),
    };

    let path = match path {
        Some(path) => path,
        None => return Ok(Config::default()),
    };

    let contents = fs::read_to_string(&path).map_err(|e| {
        ReleaseTagError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    tracing::debug!(path = %path.display(), "loaded configuration file");
    parse_config(&contents)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.family, "langgraph");
        assert_eq!(config.changelog.initial_message, "Initial release");
        assert_eq!(config.changelog.bullet, "* ");
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_changelog_section() {
        let config = parse_config("family = \"acme\"\n[changelog]\nbullet = \"- \"\n").unwrap();
        assert_eq!(config.family, "acme");
        assert_eq!(config.changelog.bullet, "- ");
        assert_eq!(config.changelog.initial_message, "Initial release");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("family = ").unwrap_err();
        assert!(matches!(err, ReleaseTagError::Config(_)));
    }
}
