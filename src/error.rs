use thiserror::Error;

/// Unified error type for release-tag operations
#[derive(Error, Debug)]
pub enum ReleaseTagError {
    #[error("Invalid package descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-tag
pub type Result<T> = std::result::Result<T, ReleaseTagError>;

impl ReleaseTagError {
    /// Create an invalid descriptor error with context
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        ReleaseTagError::InvalidDescriptor(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseTagError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseTagError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseTagError::Tag(msg.into())
    }

    /// Create a path error with context
    pub fn path(msg: impl Into<String>) -> Self {
        ReleaseTagError::Path(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseTagError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseTagError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("reference not found");
        let err: ReleaseTagError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
        assert!(err.to_string().contains("reference not found"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (
                ReleaseTagError::invalid_descriptor("x"),
                "Invalid package descriptor",
            ),
            (ReleaseTagError::manifest("x"), "Manifest error"),
            (ReleaseTagError::config("x"), "Configuration error"),
            (ReleaseTagError::tag("x"), "Tag error"),
            (ReleaseTagError::path("x"), "Path error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            ReleaseTagError::invalid_descriptor(""),
            ReleaseTagError::manifest(""),
            ReleaseTagError::tag(""),
        ];

        for err in errors {
            // The error type prefix survives an empty message
            assert!(!err.to_string().is_empty());
        }
    }
}
