use crate::error::{ReleaseTagError, Result};
use git2::{Commit, DiffOptions, ObjectType, Oid, Repository as Git2Repo, Sort};
use std::path::{Component, Path};
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Turn a filesystem path into a pathspec relative to the working tree.
    ///
    /// Relative paths are taken from the current directory, the way `git log
    /// -- <path>` reads them. The working tree root yields `None`, meaning no
    /// filter.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - `/`-separated path below the working tree root
    /// * `Ok(None)` - The path is the working tree root
    /// * `Err(Path)` - The path does not exist, lies outside the working tree,
    ///   or the repository is bare
    pub fn pathspec_for(&self, path: &Path) -> Result<Option<String>> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| ReleaseTagError::path("Repository has no working tree"))?;
        let workdir = workdir.canonicalize().map_err(|e| {
            ReleaseTagError::path(format!("Cannot resolve '{}': {}", workdir.display(), e))
        })?;
        let full = path.canonicalize().map_err(|e| {
            ReleaseTagError::path(format!("Cannot resolve '{}': {}", path.display(), e))
        })?;

        let relative = full.strip_prefix(&workdir).map_err(|_| {
            ReleaseTagError::path(format!(
                "'{}' is outside the repository at '{}'",
                full.display(),
                workdir.display()
            ))
        })?;

        let parts: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        debug!(path = %path.display(), pathspec = %parts.join("/"), "resolved path filter");
        if parts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(parts.join("/")))
        }
    }

    /// Creation time of a tag in seconds since the epoch.
    ///
    /// Returns None for tags that point at something without a date (e.g. a blob).
    fn tag_creation_time(&self, tag_name: &str) -> Result<Option<i64>> {
        let reference = self.repo.find_reference(&format!("refs/tags/{}", tag_name))?;
        let target = match reference.target() {
            Some(oid) => oid,
            None => return Ok(None),
        };
        let object = self.repo.find_object(target, None)?;

        if let Some(tag) = object.as_tag() {
            if let Some(tagger) = tag.tagger() {
                return Ok(Some(tagger.when().seconds()));
            }
        }

        Ok(object
            .peel(ObjectType::Commit)
            .ok()
            .and_then(|peeled| peeled.as_commit().map(|c| c.committer().when().seconds())))
    }

    fn tag_commit_oid(&self, tag_name: &str) -> Result<Oid> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))
            .map_err(|e| ReleaseTagError::tag(format!("Cannot find tag '{}': {}", tag_name, e)))?;

        let commit = reference.peel_to_commit().map_err(|e| {
            ReleaseTagError::tag(format!("Tag '{}' does not point at a commit: {}", tag_name, e))
        })?;
        Ok(commit.id())
    }

    /// Whether the commit changes anything under `path` relative to its first parent
    fn touches_path(&self, commit: &Commit<'_>, path: &str) -> Result<bool> {
        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(_) => None,
        };

        let mut options = DiffOptions::new();
        options.pathspec(path);
        let diff =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut options))?;
        Ok(diff.deltas().len() > 0)
    }
}

/// Subject line of a raw commit message, as `git log --format=%s` prints it.
///
/// The first paragraph with its lines joined by spaces. Invalid UTF-8 is
/// replaced rather than dropped.
fn subject_from_bytes(raw: &[u8]) -> String {
    let message = String::from_utf8_lossy(raw);
    let message = message.trim_start_matches(['\n', '\r']);
    let paragraph = message.split("\n\n").next().unwrap_or_default();
    paragraph
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

impl super::Repository for Git2Repository {
    fn tags_by_creation_date(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;

        let mut dated = Vec::new();
        for name in names.iter().flatten() {
            let created = self.tag_creation_time(name)?.unwrap_or(i64::MIN);
            dated.push((created, name.to_string()));
        }

        dated.sort_by(|(a_time, a_name), (b_time, b_name)| {
            b_time.cmp(a_time).then_with(|| a_name.cmp(b_name))
        });

        debug!(count = dated.len(), "listed tags by creation date");
        Ok(dated.into_iter().map(|(_, name)| name).collect())
    }

    fn commit_subjects_since(&self, tag: &str, path: Option<&str>) -> Result<Vec<String>> {
        let since = self.tag_commit_oid(tag)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(since)?;

        let mut subjects = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;

            if let Some(path) = path {
                if !self.touches_path(&commit, path)? {
                    continue;
                }
            }

            let subject = match commit.summary() {
                Some(summary) => summary.to_string(),
                None => subject_from_bytes(commit.message_bytes()),
            };
            subjects.push(subject);
        }

        debug!(tag, path = ?path, count = subjects.len(), "collected commit subjects");
        Ok(subjects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use git2::{Signature, Time};
    use std::fs;
    use tempfile::TempDir;

    fn commit_file(repo: &Git2Repo, file: &str, subject: &str, seconds: i64) -> Oid {
        let workdir = repo.workdir().unwrap().to_path_buf();
        let full = workdir.join(file);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(&full, subject).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(file)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let sig = Signature::new("Tester", "tester@example.com", &Time::new(seconds, 0)).unwrap();
        let parents: Vec<Commit<'_>> = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, subject, &tree, &parent_refs)
            .unwrap()
    }

    #[test]
    fn test_subjects_since_lightweight_tag() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();

        let first = commit_file(&raw, "a.txt", "first", 1_000);
        raw.tag_lightweight("0.1.0", &raw.find_object(first, None).unwrap(), false)
            .unwrap();
        commit_file(&raw, "b.txt", "second", 2_000);
        commit_file(&raw, "c.txt", "third\n\nbody text", 3_000);

        let repo = Git2Repository::from_git2(raw);
        assert_eq!(
            repo.commit_subjects_since("0.1.0", None).unwrap(),
            vec!["third", "second"]
        );
    }

    #[test]
    fn test_subject_from_bytes_replaces_invalid_utf8() {
        assert_eq!(subject_from_bytes(b"caf\xe9 fix\n\nbody"), "caf\u{FFFD} fix");
        assert_eq!(subject_from_bytes(b"wrapped\nsubject\n\nbody"), "wrapped subject");
        assert_eq!(subject_from_bytes(b"\n\nleading blank\n"), "leading blank");
        assert_eq!(subject_from_bytes(b""), "");
    }

    #[test]
    fn test_subjects_since_keeps_non_utf8_subject() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();

        let first = commit_file(&raw, "a.txt", "first", 1_000);
        raw.tag_lightweight("0.1.0", &raw.find_object(first, None).unwrap(), false)
            .unwrap();
        let second = commit_file(&raw, "b.txt", "second", 2_000);
        let tree = raw.find_commit(second).unwrap().tree_id();

        // git2 only writes UTF-8 messages, so build the commit object by hand
        let mut object = format!(
            "tree {}\nparent {}\nauthor Tester <tester@example.com> 3000 +0000\n\
             committer Tester <tester@example.com> 3000 +0000\nencoding ISO-8859-1\n\n",
            tree, second
        )
        .into_bytes();
        object.extend_from_slice(b"caf\xe9 fix\n");
        let oid = raw.odb().unwrap().write(ObjectType::Commit, &object).unwrap();
        raw.reference("refs/heads/latin1", oid, true, "non-utf8 commit")
            .unwrap();
        raw.set_head("refs/heads/latin1").unwrap();

        let repo = Git2Repository::from_git2(raw);
        assert_eq!(
            repo.commit_subjects_since("0.1.0", None).unwrap(),
            vec!["caf\u{FFFD} fix", "second"]
        );
    }

    #[test]
    fn test_subjects_since_unknown_tag() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();
        commit_file(&raw, "a.txt", "first", 1_000);

        let repo = Git2Repository::from_git2(raw);
        assert!(matches!(
            repo.commit_subjects_since("missing", None),
            Err(ReleaseTagError::Tag(_))
        ));
    }
}
