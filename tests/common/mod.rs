// Shared helpers for building throwaway git repositories.
#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repository");
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(seconds: i64) -> Signature<'static> {
        Signature::new("Release Bot", "bot@example.com", &Time::new(seconds, 0))
            .expect("valid signature")
    }

    /// Write `file` and commit it on top of HEAD at the given time
    pub fn commit(&self, file: &str, subject: &str, seconds: i64) -> Oid {
        let full = self.path().join(file);
        fs::create_dir_all(full.parent().expect("file has a parent")).expect("create dirs");
        fs::write(&full, format!("{}\n", subject)).expect("write file");

        let mut index = self.repo.index().expect("open index");
        index.add_path(Path::new(file)).expect("stage file");
        index.write().expect("write index");
        let tree = self
            .repo
            .find_tree(index.write_tree().expect("write tree"))
            .expect("find tree");

        let sig = Self::signature(seconds);
        let parents: Vec<Commit<'_>> = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, subject, &tree, &parent_refs)
            .expect("create commit")
    }

    pub fn lightweight_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).expect("find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("create lightweight tag");
    }

    pub fn annotated_tag(&self, name: &str, target: Oid, seconds: i64) {
        let object = self.repo.find_object(target, None).expect("find object");
        self.repo
            .tag(name, &object, &Self::signature(seconds), name, false)
            .expect("create annotated tag");
    }

    pub fn write_manifest(&self, relative: &str, name: &str, version: &str) {
        let full = self.path().join(relative);
        fs::create_dir_all(full.parent().expect("manifest has a parent")).expect("create dirs");
        fs::write(
            full,
            format!(
                "[tool.poetry]\nname = \"{}\"\nversion = \"{}\"\n",
                name, version
            ),
        )
        .expect("write manifest");
    }
}
