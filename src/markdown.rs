//! Markdown rendering of a combined document.
//!
//! Joins per-page bodies with horizontal-rule separators, prefixes each
//! page with a level-1 title heading, optionally prepends a table of
//! contents, and normalizes blank-line runs in the final output.

use std::sync::LazyLock;

use regex::Regex;

use crate::assemble::CombinedDocument;
use crate::toc;

#[allow(clippy::expect_used)]
static EXCESS_NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").expect("valid regex"));

/// Separator placed between pages.
pub const FILE_SEPARATOR: &str = "\n\n---\n\n";

/// Render a combined document to its final Markdown string.
///
/// Each page contributes a `# {title}` heading (skipped for untitled
/// pages) followed by its fragments; pages are joined with
/// [`FILE_SEPARATOR`]. When the document has its table of contents
/// enabled and the body contains headings, the listing precedes
/// everything.
#[must_use]
pub fn render(document: &CombinedDocument) -> String {
    let mut parts = Vec::new();

    for (index, content) in document.contents.iter().enumerate() {
        if index > 0 {
            parts.push(FILE_SEPARATOR.to_string());
        }

        if content.title != "Untitled" {
            parts.push(format!("# {}\n\n", content.title));
        }

        let body = content
            .fragments
            .iter()
            .map(|f| f.formatted_content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        parts.push(body);
    }

    let mut output = parts.concat();

    if document.toc_enabled {
        if let Some(listing) = toc::generate(&output) {
            output = format!("{listing}\n{output}");
        }
    }

    cleanup(&output)
}

/// Collapse runs of three or more newlines to two and trim the ends.
fn cleanup(markdown: &str) -> String {
    let mut output = markdown.to_string();
    while EXCESS_NEWLINES_RE.is_match(&output) {
        output = EXCESS_NEWLINES_RE.replace_all(&output, "\n\n").to_string();
    }
    output.trim().to_string()
}
