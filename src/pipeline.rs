//! End-to-end build pipeline.
//!
//! Compiles a directory of locally cached HTML pages into one Markdown
//! document: navigation detection on a representative page, order
//! resolution, per-page content detection and extraction, assembly and
//! rendering. Pages that fail extraction are skipped with a warning;
//! the build fails only when no page at all could be extracted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assemble::{self, DocumentStatistics};
use crate::confidence::DetectionConfidence;
use crate::detect::Strategy;
use crate::dom;
use crate::encoding;
use crate::extract::{self, ExtractedContent};
use crate::markdown;
use crate::navigation::{self, NavigationStructure};
use crate::options::BuildOptions;
use crate::order::{self, OrderMethod};
use crate::{Error, Result};

/// Outcome of a completed build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResult {
    /// Rendered Markdown document.
    pub content: String,
    /// Combined document title.
    pub title: String,
    /// Pages that contributed content.
    pub page_count: usize,
    /// How the page order was determined.
    pub order_method: OrderMethod,
    /// Confidence in the resolved order.
    pub order_confidence: DetectionConfidence,
    /// Deduplicated warnings from the whole run.
    pub warnings: Vec<String>,
    /// Aggregate counters.
    pub statistics: DocumentStatistics,
}

/// Build a combined Markdown document from a cache directory.
///
/// # Errors
///
/// Returns [`Error::Build`] when the directory does not exist or no page
/// could be extracted, and [`Error::Io`] when the cache cannot be read.
pub fn build_from_cache(cache_dir: &Path, options: &BuildOptions) -> Result<BuildResult> {
    if !cache_dir.is_dir() {
        return Err(Error::Build(format!(
            "cache directory not found: {}",
            cache_dir.display()
        )));
    }
    info!(cache_dir = %cache_dir.display(), "starting build");

    let nav = detect_site_navigation(cache_dir)?;
    let mut order = order::resolve_order(cache_dir, &nav)?;
    order.reorder();
    info!(
        files = order.files.len(),
        method = ?order.method,
        confidence = order.confidence.value(),
        "document order resolved"
    );

    let strategy = Strategy::Heuristic(options.detector.clone());
    let mut extracted: Vec<ExtractedContent> = Vec::new();
    let mut skip_warnings: Vec<String> = Vec::new();

    for file in &order.files {
        match extract_page(&file.path, &strategy) {
            Ok(content) => extracted.push(content),
            Err(err) => {
                warn!(path = %file.path.display(), error = %err, "skipping page");
                skip_warnings.push(format!(
                    "failed to extract {}: {err}",
                    file.path.display()
                ));
            }
        }
    }

    if extracted.is_empty() {
        return Err(Error::Build(
            "no content could be extracted from any file".to_string(),
        ));
    }
    info!(extracted = extracted.len(), "content extraction completed");

    let mut document = assemble::assemble(extracted, options);
    for warning in skip_warnings {
        if !document.warnings.contains(&warning) {
            document.warnings.push(warning);
        }
    }

    let content = markdown::render(&document);
    info!(bytes = content.len(), "build completed");

    Ok(BuildResult {
        content,
        title: document.title,
        page_count: document.statistics.total_files,
        order_method: order.method,
        order_confidence: order.confidence,
        warnings: document.warnings,
        statistics: document.statistics,
    })
}

/// Build and write the rendered document to `output_path`, creating
/// parent directories as needed.
///
/// # Errors
///
/// Build errors propagate unchanged; write failures surface as
/// [`Error::Io`].
pub fn build_to_file(
    cache_dir: &Path,
    output_path: &Path,
    options: &BuildOptions,
) -> Result<BuildResult> {
    let result = build_from_cache(cache_dir, options)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(output_path, &result.content).map_err(|source| Error::Io {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!(output = %output_path.display(), "document written");

    Ok(result)
}

/// Detect site navigation on the representative page of the cache.
///
/// Prefers `index.html`/`index.htm` at the cache root, then the
/// alphabetically first top-level HTML file. Returns an empty structure
/// when the cache has no usable top-level page, so order resolution
/// degrades to the alphabetical fallback.
fn detect_site_navigation(cache_dir: &Path) -> Result<NavigationStructure> {
    let Some(page) = representative_page(cache_dir)? else {
        debug!("no top-level page found for navigation detection");
        return Ok(NavigationStructure::default());
    };

    let bytes = fs::read(&page).map_err(|source| Error::Io {
        path: page.clone(),
        source,
    })?;
    let html = encoding::transcode_to_utf8(&bytes);
    let doc = dom::parse(&html);

    let nav = navigation::detect_navigation(&doc);
    debug!(
        page = %page.display(),
        links = nav.links.len(),
        "navigation detection completed"
    );
    Ok(nav)
}

fn representative_page(cache_dir: &Path) -> Result<Option<PathBuf>> {
    for name in ["index.html", "index.htm"] {
        let candidate = cache_dir.join(name);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }

    let entries = fs::read_dir(cache_dir).map_err(|source| Error::Io {
        path: cache_dir.to_path_buf(),
        source,
    })?;
    let mut pages: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: cache_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_html = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|ext| ext == "html" || ext == "htm");
        if path.is_file() && is_html {
            pages.push(path);
        }
    }
    pages.sort();

    Ok(pages.into_iter().next())
}

/// Detect and extract one page.
fn extract_page(path: &Path, strategy: &Strategy) -> Result<ExtractedContent> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let html = encoding::transcode_to_utf8(&bytes);
    let doc = dom::parse(&html);

    let detection = strategy.detect(&doc)?;
    debug!(
        path = %path.display(),
        selector = %detection.primary_selector,
        confidence = detection.confidence.value(),
        "page detection completed"
    );

    extract::extract_document(&doc, &detection.primary_selector, path)
}
