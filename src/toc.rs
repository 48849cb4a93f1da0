//! Table-of-contents generation.
//!
//! Scans rendered Markdown for ATX headings and emits a nested bullet
//! list of GitHub-style anchor links.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static SLUG_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-_]").expect("valid regex"));

/// Heading emitted at the top of the generated listing.
const TOC_HEADING: &str = "## Contents";

/// Build a table of contents for a Markdown body.
///
/// Returns `None` when the body contains no headings. The returned
/// block ends with a horizontal rule so it can be prepended to the body
/// directly.
#[must_use]
pub fn generate(markdown: &str) -> Option<String> {
    let headings: Vec<(usize, &str)> = markdown
        .lines()
        .filter_map(parse_heading_line)
        .collect();

    if headings.is_empty() {
        return None;
    }

    let mut lines = vec![TOC_HEADING.to_string(), String::new()];
    for (level, title) in headings {
        let indent = "  ".repeat(level - 1);
        lines.push(format!("{indent}- [{title}](#{})", slugify(title)));
    }
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    Some(lines.join("\n"))
}

/// Parse an ATX heading line into `(level, title)`.
fn parse_heading_line(line: &str) -> Option<(usize, &str)> {
    if !line.starts_with('#') {
        return None;
    }
    let level = line.chars().take_while(|c| *c == '#').count();
    let title = line[level..].trim();
    if level > 6 || title.is_empty() {
        return None;
    }
    Some((level, title))
}

/// GitHub-style anchor slug: lowercase, spaces to hyphens, parentheses
/// removed, remaining punctuation stripped.
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title
        .to_lowercase()
        .replace(' ', "-")
        .replace(['(', ')'], "");
    SLUG_STRIP_RE.replace_all(&lowered, "").to_string()
}
