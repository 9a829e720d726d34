//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are testable; `display_*`
//! functions print them.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::resolver::ReleasePlan;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Build the human readable summary of a release plan.
///
/// Shows either:
/// - If a previous tag exists: "From: previous -> To: tag"
/// - If initial: "Initial Tag: tag"
///
/// followed by the release notes, indented.
pub fn format_plan_summary(plan: &ReleasePlan) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} {}\n",
        style("Package:").bold(),
        plan.descriptor.name,
        plan.descriptor.version
    ));
    if let Some(pre) = plan.version.as_ref().and_then(|v| v.pre.as_ref()) {
        out.push_str(&format!(
            "  Pre-release: {} {}\n",
            pre.identifier.label(),
            pre.number
        ));
    }

    match &plan.previous_tag {
        Some(previous) => {
            out.push_str(&format!("\n{}\n", style("Proposed Tag Change:").bold()));
            out.push_str(&format!("  From: {}\n", style(previous).red()));
            out.push_str(&format!("  To:   {}\n", style(&plan.tag).green()));
        }
        None => {
            out.push_str(&format!("\n{}\n", style("Initial Tag:").bold()));
            out.push_str(&format!("  New tag: {}\n", style(&plan.tag).green()));
        }
    }

    out.push_str(&format!("\n{}\n", style("Release notes:").underlined()));
    for line in plan.release_body.lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out
}

/// Print the summary of a release plan to stdout.
pub fn display_plan(plan: &ReleasePlan) {
    print!("{}", format_plan_summary(plan));
}
