//! Document assembly.
//!
//! Merges per-page extraction results into one [`CombinedDocument`]:
//! shifts heading levels so per-page outlines do not collide, derives a
//! combined title, and aggregates statistics and warnings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::ExtractedContent;
use crate::options::{BuildOptions, HeadingOffset};

/// Title used when no page contributed a usable one.
pub const DEFAULT_TITLE: &str = "Combined Document";

/// Aggregate counters for a finished build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatistics {
    /// Pages that survived extraction.
    pub total_files: usize,
    /// Sum of cleaned text lengths across all pages.
    pub total_text_length: usize,
}

/// All pages merged into one document, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedDocument {
    /// Combined title derived from the per-page titles.
    pub title: String,
    /// Per-page contents in resolved order, heading levels adjusted.
    pub contents: Vec<ExtractedContent>,
    /// Whether rendering should emit a table of contents.
    pub toc_enabled: bool,
    /// Deduplicated warnings from all pages, first occurrence kept.
    pub warnings: Vec<String>,
    /// Aggregate counters.
    pub statistics: DocumentStatistics,
}

/// Merge extracted pages into a combined document.
///
/// When `options.adjust_headings` is set, each page's headings are
/// shifted by the offset policy and clamped at level 6. The per-page
/// title headings emitted at render time sit at level 1, so shifted
/// body headings nest below them.
#[must_use]
pub fn assemble(mut contents: Vec<ExtractedContent>, options: &BuildOptions) -> CombinedDocument {
    if options.adjust_headings {
        for (index, content) in contents.iter_mut().enumerate() {
            let offset = match options.heading_offset {
                HeadingOffset::FileIndex => index,
                HeadingOffset::Fixed(n) => usize::from(n),
            };
            adjust_heading_levels(content, offset);
        }
    }

    let title = combined_title(&contents);
    let warnings = dedup_warnings(&contents);
    let statistics = DocumentStatistics {
        total_files: contents.len(),
        total_text_length: contents.iter().map(|c| c.text_length).sum(),
    };

    debug!(
        files = statistics.total_files,
        text_length = statistics.total_text_length,
        warnings = warnings.len(),
        "assembled combined document"
    );

    CombinedDocument {
        title,
        contents,
        toc_enabled: options.include_toc,
        warnings,
        statistics,
    }
}

/// Shift every heading fragment in a page by `offset`, clamped at 6.
fn adjust_heading_levels(content: &mut ExtractedContent, offset: usize) {
    if offset == 0 {
        return;
    }
    for fragment in &mut content.fragments {
        let Some(level) = fragment.heading_level else {
            continue;
        };
        let new_level = (usize::from(level) + offset).min(6);
        let text = fragment
            .formatted_content
            .trim_start_matches('#')
            .trim_start();
        fragment.formatted_content = format!("{} {text}", "#".repeat(new_level));
        fragment.heading_level = Some(u8::try_from(new_level).unwrap_or(6));
    }
}

/// Join the usable per-page titles with `" - "`.
fn combined_title(contents: &[ExtractedContent]) -> String {
    let titles: Vec<&str> = contents
        .iter()
        .map(|c| c.title.as_str())
        .filter(|t| *t != "Untitled")
        .collect();

    if titles.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        titles.join(" - ")
    }
}

/// Collect warnings from all pages, dropping duplicates while keeping
/// first-occurrence order.
fn dedup_warnings(contents: &[ExtractedContent]) -> Vec<String> {
    let mut seen = Vec::new();
    for content in contents {
        for warning in &content.warnings {
            if !seen.contains(warning) {
                seen.push(warning.clone());
            }
        }
    }
    seen
}
