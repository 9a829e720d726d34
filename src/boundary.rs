use std::fmt;

/// Non-fatal conditions reported to the user while resolving a release.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The computed tag already is the newest tag of this package
    NoNewVersion { tag: String },
    /// A new version exists but no commits were found since the previous tag
    NoCommitsSinceTag {
        previous_tag: String,
        path: Option<String>,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewVersion { tag } => {
                write!(f, "No new version to release: tag '{}' already exists", tag)
            }
            BoundaryWarning::NoCommitsSinceTag { previous_tag, path } => match path {
                Some(path) => write!(
                    f,
                    "No commits under '{}' since tag '{}'",
                    path, previous_tag
                ),
                None => write!(f, "No commits since tag '{}'", previous_tag),
            },
        }
    }
}
