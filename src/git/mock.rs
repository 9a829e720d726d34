use crate::error::{ReleaseTagError, Result};
use crate::git::Repository;

/// A commit recorded in the mock history
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit subject line
    pub subject: String,
    /// Paths changed by the commit
    pub paths: Vec<String>,
}

impl CommitInfo {
    pub fn new(subject: impl Into<String>, paths: &[&str]) -> Self {
        CommitInfo {
            subject: subject.into(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn touches(&self, path: &str) -> bool {
        let prefix = path.trim_end_matches('/');
        self.paths.iter().any(|changed| {
            changed == prefix
                || changed
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// Mock repository with a linear history, for testing without real git
///
/// Commits and tags are recorded in the order they happen; a tag points at
/// the most recently added commit.
pub struct MockRepository {
    commits: Vec<CommitInfo>,
    // (tag name, number of commits reachable from the tag)
    tags: Vec<(String, usize)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add a commit on top of the history
    pub fn add_commit(&mut self, info: CommitInfo) {
        self.commits.push(info);
    }

    /// Tag the current top of the history; later tags are newer
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push((name.into(), self.commits.len()));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn tags_by_creation_date(&self) -> Result<Vec<String>> {
        Ok(self.tags.iter().rev().map(|(name, _)| name.clone()).collect())
    }

    fn commit_subjects_since(&self, tag: &str, path: Option<&str>) -> Result<Vec<String>> {
        let reachable = self
            .tags
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, count)| *count)
            .ok_or_else(|| ReleaseTagError::tag(format!("Cannot find tag '{}'", tag)))?;

        Ok(self.commits[reachable..]
            .iter()
            .rev()
            .filter(|commit| path.map_or(true, |p| commit.touches(p)))
            .map(|commit| commit.subject.clone())
            .collect())
    }
}
