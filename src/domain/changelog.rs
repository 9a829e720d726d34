use crate::domain::tag::ReleaseTag;

/// Body used when no previous release exists
pub const INITIAL_RELEASE: &str = "Initial release";

/// Marker placed before each commit subject
pub const DEFAULT_BULLET: &str = "* ";

/// Release notes built from commit subjects since the previous tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    pub previous_tag: Option<ReleaseTag>,
    pub entries: Vec<String>,
}

impl Changelog {
    pub fn new(previous_tag: Option<ReleaseTag>, entries: Vec<String>) -> Self {
        Changelog {
            previous_tag,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render with the given initial-release text and bullet marker.
    ///
    /// Entries keep the order they were supplied in. No trailing newline.
    pub fn render_with(&self, initial_message: &str, bullet: &str) -> String {
        let previous = match &self.previous_tag {
            Some(tag) => tag,
            None => return initial_message.to_string(),
        };

        let mut body = format!("Changes since {}", previous);
        if !self.entries.is_empty() {
            body.push_str("\n\n");
            let lines: Vec<String> = self
                .entries
                .iter()
                .map(|subject| format!("{}{}", bullet, subject))
                .collect();
            body.push_str(&lines.join("\n"));
        }
        body
    }
}
