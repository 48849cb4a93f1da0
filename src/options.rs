//! Configuration options for detection and document assembly.
//!
//! Two option structs control the pipeline: `DetectorOptions` tunes the
//! main-content scorer, `BuildOptions` tunes the document assembler.
//! Use `Default::default()` for standard settings.

/// Configuration options for main-content detection.
///
/// # Example
///
/// ```rust
/// use site2doc::DetectorOptions;
///
/// let options = DetectorOptions {
///     min_paragraph_count: 3,
///     ..DetectorOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DetectorOptions {
    /// Run the semantic-selector pass (priority table of well-known
    /// content selectors such as `main` and `article`).
    ///
    /// Default: `true`
    pub enable_semantic_selectors: bool,

    /// Run the content-feature pass (score `div` containers by text
    /// density and paragraph count).
    ///
    /// Default: `true`
    pub enable_content_analysis: bool,

    /// Drop candidates whose backing element is page chrome
    /// (navigation, ads, footers, sidebars).
    ///
    /// Default: `true`
    pub enable_exclusion_filter: bool,

    /// Minimum text density (visible text length / serialized markup
    /// length) a container must reach in the content-feature pass.
    ///
    /// Default: `0.05`
    pub min_text_density: f64,

    /// Minimum number of `<p>` descendants a container must have in the
    /// content-feature pass.
    ///
    /// Default: `2`
    pub min_paragraph_count: usize,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            enable_semantic_selectors: true,
            enable_content_analysis: true,
            enable_exclusion_filter: true,
            min_text_density: 0.05,
            min_paragraph_count: 2,
        }
    }
}

/// Policy for shifting heading levels when pages are merged.
///
/// The historically observed behavior shifts each page's headings by its
/// zero-based position in the final order, so late pages end up deeply
/// nested (clamped at level 6). `Fixed` applies one uniform shift
/// instead, which keeps outlines flat below the per-page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingOffset {
    /// Shift each file's headings by its zero-based position in the
    /// merged order (file 0 gets +0, file 1 gets +1, ...).
    FileIndex,
    /// Shift every file's headings by the same fixed amount.
    Fixed(u8),
}

/// Configuration options for document assembly.
///
/// # Example
///
/// ```rust
/// use site2doc::{BuildOptions, HeadingOffset};
///
/// let options = BuildOptions {
///     include_toc: false,
///     heading_offset: HeadingOffset::Fixed(1),
///     ..BuildOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Emit a table of contents before the document body.
    ///
    /// Default: `true`
    pub include_toc: bool,

    /// Shift heading levels so per-page outlines do not collide after
    /// concatenation.
    ///
    /// Default: `true`
    pub adjust_headings: bool,

    /// Heading shift policy applied when `adjust_headings` is set.
    ///
    /// Default: `HeadingOffset::FileIndex`
    pub heading_offset: HeadingOffset,

    /// Detector configuration used for per-page detection runs.
    pub detector: DetectorOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_toc: true,
            adjust_headings: true,
            heading_offset: HeadingOffset::FileIndex,
            detector: DetectorOptions::default(),
        }
    }
}
