//! User interface module - terminal display and machine-readable output.
//!
//! Separates concerns:
//! - `formatter` - Styled output for people
//! - This module - `key=value` output read by pipeline steps

use crate::resolver::ReleasePlan;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_boundary_warning, display_error, display_plan, format_plan_summary};

/// Formats a release plan as GitHub step output.
///
/// Single-line values are written as `key=value`; the release body uses the
/// `key<<DELIMITER` multi-line form. The delimiter starts as `EOF` and grows
/// until no line of the body equals it.
///
/// # Example
/// ```text
/// pkg-name=langgraph-sdk
/// short-pkg-name=sdk
/// version=0.1.6
/// tag=sdk==0.1.6
/// prev-tag=sdk==0.1.5
/// prerelease=false
/// release-body<<EOF
/// Changes since sdk==0.1.5
///
/// * fix retries
/// EOF
/// ```
pub fn format_env_output(plan: &ReleasePlan) -> String {
    let previous = plan
        .previous_tag
        .as_ref()
        .map(|tag| tag.to_string())
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!("pkg-name={}\n", plan.descriptor.name));
    out.push_str(&format!("short-pkg-name={}\n", plan.short_name));
    out.push_str(&format!("version={}\n", plan.descriptor.version));
    out.push_str(&format!("tag={}\n", plan.tag));
    out.push_str(&format!("prev-tag={}\n", previous));
    out.push_str(&format!("prerelease={}\n", plan.is_prerelease()));

    let delimiter = heredoc_delimiter(&plan.release_body);
    out.push_str(&format!("release-body<<{}\n", delimiter));
    out.push_str(&plan.release_body);
    out.push_str(&format!("\n{}\n", delimiter));
    out
}

fn heredoc_delimiter(body: &str) -> String {
    let mut delimiter = String::from("EOF");
    while body.lines().any(|line| line == delimiter) {
        delimiter.push('_');
    }
    delimiter
}
