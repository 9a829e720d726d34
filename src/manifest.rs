//! Package manifest reading
//!
//! Reads the package name and version from a `pyproject.toml`. The PEP 621
//! `[project]` table is preferred, falling back to `[tool.poetry]`.

use crate::domain::PackageDescriptor;
use crate::error::{ReleaseTagError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default manifest file name
pub const MANIFEST_FILE_NAME: &str = "pyproject.toml";

#[derive(Debug, Deserialize, Default)]
struct Manifest {
    #[serde(default)]
    project: Option<PackageTable>,

    #[serde(default)]
    tool: Option<ToolTable>,
}

#[derive(Debug, Deserialize, Default)]
struct ToolTable {
    #[serde(default)]
    poetry: Option<PackageTable>,
}

#[derive(Debug, Deserialize, Default, Clone)]
struct PackageTable {
    name: Option<String>,
    version: Option<String>,
}

/// Parses a descriptor from manifest text.
///
/// Empty values are returned as-is; validation is left to the resolver.
pub fn parse_manifest(contents: &str) -> Result<PackageDescriptor> {
    let manifest: Manifest =
        toml::from_str(contents).map_err(|e| ReleaseTagError::manifest(e.to_string()))?;

    let candidates = [
        manifest.project,
        manifest.tool.and_then(|tool| tool.poetry),
    ];

    for table in candidates.into_iter().flatten() {
        if let (Some(name), Some(version)) = (table.name, table.version) {
            return Ok(PackageDescriptor::new(name, version));
        }
    }

    Err(ReleaseTagError::manifest(
        "no [project] or [tool.poetry] table with both name and version",
    ))
}

/// Reads the descriptor from a manifest file
pub fn read_manifest(path: &Path) -> Result<PackageDescriptor> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ReleaseTagError::manifest(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    let descriptor = parse_manifest(&contents).map_err(|e| match e {
        ReleaseTagError::Manifest(msg) => {
            ReleaseTagError::manifest(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        name = %descriptor.name,
        version = %descriptor.version,
        "read package manifest"
    );
    Ok(descriptor)
}
