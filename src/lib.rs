//! # site2doc
//!
//! Compiles a locally cached website into a single ordered Markdown
//! document.
//!
//! Given a directory of cached HTML pages, the pipeline detects the
//! main-content region of each page with CSS-selector heuristics,
//! resolves a reading order from the site's navigation (falling back to
//! alphabetical order), extracts and converts each page's content, and
//! assembles everything into one document with adjusted heading levels
//! and an optional table of contents.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use site2doc::{build, BuildOptions};
//!
//! let result = build("site-cache".as_ref(), &BuildOptions::default())?;
//! println!("{}", result.content);
//! # Ok::<(), site2doc::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Content Detection**: Scores candidate regions with a semantic
//!   selector table and text-density analysis, filtering out page chrome
//! - **Order Resolution**: Derives page order from navigation links,
//!   with an alphabetical fallback
//! - **Document Assembly**: Merges pages with per-file title headings,
//!   shifted heading levels, separators, and a table of contents

mod error;

/// Configuration options for detection and assembly.
mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Main-content detection (semantic selectors, content features,
/// exclusion filtering, confidence aggregation).
pub mod detect;

/// Detection confidence scale shared across the pipeline.
pub mod confidence;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Navigation structure detection.
pub mod navigation;

/// Document order resolution.
pub mod order;

/// Per-page content extraction.
pub mod extract;

/// Merging extracted pages into one document.
pub mod assemble;

/// Table-of-contents generation.
pub mod toc;

/// Markdown rendering of the combined document.
pub mod markdown;

/// End-to-end build pipeline.
pub mod pipeline;

// Public API - re-exports
pub use confidence::DetectionConfidence;
pub use error::{Error, Result};
pub use options::{BuildOptions, DetectorOptions, HeadingOffset};
pub use pipeline::BuildResult;

use std::path::Path;

/// Build a combined Markdown document from a cache directory.
///
/// # Example
///
/// ```rust,no_run
/// use site2doc::{build, BuildOptions, HeadingOffset};
///
/// let options = BuildOptions {
///     include_toc: false,
///     heading_offset: HeadingOffset::Fixed(1),
///     ..BuildOptions::default()
/// };
/// let result = build("site-cache".as_ref(), &options)?;
/// # Ok::<(), site2doc::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn build(cache_dir: &Path, options: &BuildOptions) -> Result<BuildResult> {
    pipeline::build_from_cache(cache_dir, options)
}

/// Build and write the document to `output_path`, creating parent
/// directories as needed.
#[allow(clippy::missing_errors_doc)]
pub fn build_to_file(
    cache_dir: &Path,
    output_path: &Path,
    options: &BuildOptions,
) -> Result<BuildResult> {
    pipeline::build_to_file(cache_dir, output_path, options)
}
