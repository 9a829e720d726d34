//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two git reads
//! release-tag needs: the tag history and the commit subjects since a tag.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! Code that consumes git data should depend on the [Repository] trait rather
//! than a concrete implementation.
//!
//! ```rust
//! # use release_tag::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> release_tag::Result<()> {
//! let tags = repo.tags_by_creation_date()?;
//! if let Some(latest) = tags.first() {
//!     let subjects = repo.commit_subjects_since(latest, None)?;
//!     println!("{} commits since {}", subjects.len(), latest);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only git operations used to resolve a release
///
/// ## Error Handling
///
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::ReleaseTagError] variants.
pub trait Repository {
    /// Get all tag names, newest first by creation date
    ///
    /// The creation date of an annotated tag is its tagger date; for a
    /// lightweight tag it is the committer date of the tagged commit. Tags
    /// created at the same second are ordered by name.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, newest first
    /// * `Err` - If there's a Git error
    fn tags_by_creation_date(&self) -> Result<Vec<String>>;

    /// Get the subject lines of commits made since a tag
    ///
    /// Covers commits reachable from HEAD but not from `tag`, newest first.
    /// With `path` set, only commits that change something under that path
    /// (relative to the repository root) are included.
    ///
    /// # Arguments
    /// * `tag` - Name of the tag marking the previous release
    /// * `path` - Optional path filter
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Commit subjects, newest first
    /// * `Err` - If the tag doesn't exist or there's a Git error
    fn commit_subjects_since(&self, tag: &str, path: Option<&str>) -> Result<Vec<String>>;
}
