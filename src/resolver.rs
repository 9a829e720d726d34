//! Release tag resolution
//!
//! Derives the tag for a package, finds the newest earlier tag of the same
//! package and builds the release notes. Everything here works on data that
//! the caller has already read; no git or filesystem access happens in this
//! module.

use crate::config::{ChangelogConfig, Config};
use crate::domain::{Changelog, PackageDescriptor, ReleaseTag, ShortName, TagPattern, Version};
use crate::error::Result;
use tracing::debug;

/// Everything needed to publish a new release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub descriptor: PackageDescriptor,
    pub short_name: ShortName,
    pub tag: ReleaseTag,
    pub previous_tag: Option<ReleaseTag>,
    /// Parsed version, absent only when a component overflows `u64`
    pub version: Option<Version>,
    pub changelog: Changelog,
    /// Rendered release notes
    pub release_body: String,
}

impl ReleasePlan {
    pub fn is_prerelease(&self) -> bool {
        self.version.as_ref().is_some_and(Version::is_prerelease)
    }
}

/// Result of resolving a release
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// The tag does not exist yet; the release should go ahead
    New(ReleasePlan),
    /// The newest matching tag already equals the computed tag
    NoNewVersion { tag: ReleaseTag },
}

/// Returns false only when the previous tag is the current tag
pub fn is_new_release(current_tag: &ReleaseTag, previous_tag: Option<&ReleaseTag>) -> bool {
    previous_tag != Some(current_tag)
}

/// Resolves release tags for packages of one product family
#[derive(Debug, Clone)]
pub struct ReleaseTagResolver {
    family: String,
    changelog: ChangelogConfig,
}

impl ReleaseTagResolver {
    /// Create a resolver for the given product family with default changelog rendering
    pub fn new(family: impl Into<String>) -> Self {
        ReleaseTagResolver {
            family: family.into(),
            changelog: ChangelogConfig::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        ReleaseTagResolver {
            family: config.family.clone(),
            changelog: config.changelog.clone(),
        }
    }

    pub fn short_name(&self, descriptor: &PackageDescriptor) -> ShortName {
        descriptor.short_name(&self.family)
    }

    /// Compute the release tag for a package.
    ///
    /// # Returns
    /// * `Ok(ReleaseTag)` - `version` for the family root, `short==version` otherwise
    /// * `Err(InvalidDescriptor)` - If name or version is empty or the version is malformed
    pub fn compute_tag(&self, descriptor: &PackageDescriptor) -> Result<ReleaseTag> {
        descriptor.validate()?;
        let short_name = self.short_name(descriptor);
        Ok(ReleaseTag::format(&short_name, &descriptor.version))
    }

    /// Find the newest tag in `tag_history` that belongs to `short_name`.
    ///
    /// `tag_history` must be ordered newest first; the first match wins.
    pub fn find_previous_tag(
        &self,
        short_name: &ShortName,
        tag_history: &[String],
    ) -> Result<Option<ReleaseTag>> {
        let pattern = TagPattern::for_short_name(short_name)?;
        debug!(pattern = pattern.as_str(), tags = tag_history.len(), "searching tag history");

        Ok(tag_history
            .iter()
            .find(|tag| pattern.matches(tag))
            .map(ReleaseTag::new))
    }

    /// Build release notes from commit subjects in the order supplied
    pub fn build_changelog(
        &self,
        previous_tag: Option<&ReleaseTag>,
        commit_subjects: &[String],
    ) -> String {
        let entries = match previous_tag {
            Some(_) => commit_subjects.to_vec(),
            None => Vec::new(),
        };
        Changelog::new(previous_tag.cloned(), entries)
            .render_with(&self.changelog.initial_message, &self.changelog.bullet)
    }

    /// Run the whole resolution for one package.
    ///
    /// `commit_log` is called only when a previous tag exists and the
    /// computed tag is new; it receives the previous tag.
    pub fn plan<F>(
        &self,
        descriptor: &PackageDescriptor,
        tag_history: &[String],
        commit_log: F,
    ) -> Result<ReleaseOutcome>
    where
        F: FnOnce(&ReleaseTag) -> Result<Vec<String>>,
    {
        let tag = self.compute_tag(descriptor)?;
        let short_name = self.short_name(descriptor);
        let previous_tag = self.find_previous_tag(&short_name, tag_history)?;
        debug!(tag = %tag, previous = ?previous_tag, "resolved tags");

        if !is_new_release(&tag, previous_tag.as_ref()) {
            return Ok(ReleaseOutcome::NoNewVersion { tag });
        }

        let entries = match &previous_tag {
            Some(previous) => commit_log(previous)?,
            None => Vec::new(),
        };
        let changelog = Changelog::new(previous_tag.clone(), entries);
        let release_body =
            changelog.render_with(&self.changelog.initial_message, &self.changelog.bullet);

        Ok(ReleaseOutcome::New(ReleasePlan {
            descriptor: descriptor.clone(),
            short_name,
            tag,
            previous_tag,
            version: Version::parse(&descriptor.version).ok(),
            changelog,
            release_body,
        }))
    }
}

impl Default for ReleaseTagResolver {
    fn default() -> Self {
        ReleaseTagResolver::from_config(&Config::default())
    }
}
