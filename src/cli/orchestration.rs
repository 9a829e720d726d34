//! Release resolution workflow
//!
//! Reads the manifest, lists the tag history and runs the resolver. Kept
//! apart from main.rs so it can run against any [Repository] without
//! depending on clap.

use std::path::PathBuf;

use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::error::Result;
use crate::git::Repository;
use crate::manifest;
use crate::resolver::{ReleaseOutcome, ReleaseTagResolver};

/// Arguments for the resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveArgs {
    /// Path to the package manifest
    pub manifest_path: PathBuf,

    /// Restrict the changelog to commits touching this path
    pub path: Option<String>,
}

/// Result of the resolve workflow together with the warnings raised on the way
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub outcome: ReleaseOutcome,
    pub warnings: Vec<BoundaryWarning>,
}

/// Main resolve workflow
///
/// 1. Read the package descriptor from the manifest
/// 2. List tags newest first
/// 3. Compute the tag, find the previous one and decide
/// 4. Read commit subjects since the previous tag for the changelog
pub fn run_resolve<R: Repository>(
    args: &ResolveArgs,
    config: &Config,
    repo: &R,
) -> Result<WorkflowResult> {
    let descriptor = manifest::read_manifest(&args.manifest_path)?;
    let resolver = ReleaseTagResolver::from_config(config);
    let tag_history = repo.tags_by_creation_date()?;

    let outcome = resolver.plan(&descriptor, &tag_history, |previous| {
        repo.commit_subjects_since(previous.as_str(), args.path.as_deref())
    })?;

    let mut warnings = Vec::new();
    match &outcome {
        ReleaseOutcome::New(plan) => {
            info!(package = %descriptor.name, tag = %plan.tag, "new release");
            if let Some(previous) = &plan.previous_tag {
                if plan.changelog.is_empty() {
                    warnings.push(BoundaryWarning::NoCommitsSinceTag {
                        previous_tag: previous.to_string(),
                        path: args.path.clone(),
                    });
                }
            }
        }
        ReleaseOutcome::NoNewVersion { tag } => {
            info!(package = %descriptor.name, tag = %tag, "no new version");
            warnings.push(BoundaryWarning::NoNewVersion {
                tag: tag.to_string(),
            });
        }
    }

    Ok(WorkflowResult { outcome, warnings })
}
