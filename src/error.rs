//! Error types for the site compilation pipeline.
//!
//! Single-page failures are absorbed into warnings by their callers; only
//! total failures surface through these variants.

use std::path::PathBuf;

/// Error type for detection, extraction and build operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selector produced zero elements on a specific page.
    #[error("content not found with selector '{selector}' in {}", path.display())]
    ContentNotFound {
        /// Selector that failed to match.
        selector: String,
        /// Page the selector was applied to.
        path: PathBuf,
    },

    /// The scoring/aggregation step itself failed for a page.
    #[error("heuristic detection failed: {0}")]
    Detection(String),

    /// No navigation region was found on the representative page.
    ///
    /// Recoverable: the order resolver degrades to the alphabetical
    /// fallback instead of propagating this.
    #[error("no navigation structure found")]
    NavigationNotFound,

    /// Reading a cached page or writing output failed.
    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Aggregate build failure: zero files could be extracted, or the
    /// request itself was invalid.
    #[error("build failed: {0}")]
    Build(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
