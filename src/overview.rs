//! Stack overview rendering

use crate::types::PullRequest;

/// Heading of the overview block
pub const OVERVIEW_HEADING: &str = "### PR Stack Overview";

/// Marker appended to the entry for the PR being updated
pub const YOU_ARE_HERE: &str = "<-- You are here";

/// Render the overview block for the PR at `current_index`.
///
/// Entries are numbered from 1 in stack order; only the entry at
/// `current_index` carries the marker.
pub fn render_overview(stack: &[PullRequest], current_index: usize) -> String {
    let mut lines = vec![OVERVIEW_HEADING.to_string(), String::new()];
    lines.extend(stack.iter().enumerate().map(|(i, pr)| {
        if i == current_index {
            format!("{}. {} {YOU_ARE_HERE}", i + 1, pr.html_url)
        } else {
            format!("{}. {}", i + 1, pr.html_url)
        }
    }));
    lines.join("\n")
}

/// Append `overview` to an existing description
pub fn compose_body(existing: Option<&str>, overview: &str) -> String {
    match existing {
        Some(body) if !body.is_empty() => format!("{body}\n{overview}"),
        _ => overview.to_string(),
    }
}
