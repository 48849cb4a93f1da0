//! Main-content detection.
//!
//! Proposes candidate content regions for a parsed page, filters out page
//! chrome, and ranks the survivors into a primary selector plus an
//! overall detection confidence.
//!
//! Two passes produce candidates: the semantic pass walks a fixed
//! priority table of well-known content selectors (`semantic`), and the
//! content-feature pass scores `div` containers by text density and
//! paragraph count (`features`). The exclusion filter (`exclusion`) then
//! drops candidates backed by navigation, ads, footers and similar
//! boilerplate before aggregation.

pub mod exclusion;
pub mod features;
pub mod semantic;

use dom_query::{Document, Selection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::confidence::DetectionConfidence;
use crate::dom;
use crate::options::DetectorOptions;
use crate::{Error, Result};

/// Selector used when detection finds nothing at all.
pub const FALLBACK_SELECTOR: &str = "body";

/// Number of top-ranked candidates kept after aggregation.
const MAX_CANDIDATES: usize = 3;

/// A proposed main-content region with its heuristic score.
///
/// Produced fresh per detection run and never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorCandidate {
    /// CSS selector addressing the region.
    pub selector: String,
    /// Heuristic score in `[0, 1]`.
    pub score: f64,
    /// Human-readable explanation of the score.
    pub reasoning: String,
    /// How many elements the selector matched on the page.
    pub element_count: usize,
}

/// Candidate with its backing element, used internally until the
/// exclusion filter and aggregation have run.
pub(crate) struct ScoredRegion<'a> {
    pub(crate) candidate: SelectorCandidate,
    pub(crate) element: Selection<'a>,
}

/// Outcome of a main-content detection run for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Top candidates, best first (at most three).
    pub candidates: Vec<SelectorCandidate>,
    /// Candidate selectors in rank order; always non-empty because the
    /// fallback selector is appended when detection finds nothing.
    pub selectors: Vec<String>,
    /// Overall detection confidence.
    pub confidence: DetectionConfidence,
    /// Best selector, or the fallback when no candidate survived.
    pub primary_selector: String,
}

/// Detection strategy, chosen once at pipeline construction.
///
/// A closed set of variants instead of a runtime registry: callers pick
/// the strategy where they build the pipeline.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Selector-table and content-feature scoring.
    Heuristic(DetectorOptions),
}

impl Strategy {
    /// Run this strategy against a parsed page.
    pub fn detect(&self, doc: &Document) -> Result<DetectionResult> {
        match self {
            Self::Heuristic(options) => detect_main_content(doc, options),
        }
    }
}

/// Detect the main-content region of a parsed page.
///
/// Returns the ranked candidates, the overall confidence, and a primary
/// selector that is always usable for downstream extraction (falling
/// back to `body` when nothing was detected).
pub fn detect_main_content(
    doc: &Document,
    options: &DetectorOptions,
) -> Result<DetectionResult> {
    let body = doc.select("html");
    if !body.exists() {
        return Err(Error::Detection("page has no document element".to_string()));
    }

    let mut regions: Vec<ScoredRegion> = Vec::new();

    if options.enable_semantic_selectors {
        regions.extend(semantic::semantic_pass(doc));
    }
    if options.enable_content_analysis {
        features::content_feature_pass(doc, options, &mut regions);
    }
    if options.enable_exclusion_filter {
        regions.retain(|region| !exclusion::is_excluded(&region.element));
    }

    // Stable sort keeps encounter order on ties (semantic before features)
    regions.sort_by(|a, b| b.candidate.score.total_cmp(&a.candidate.score));
    regions.truncate(MAX_CANDIDATES);

    let candidates: Vec<SelectorCandidate> =
        regions.into_iter().map(|region| region.candidate).collect();

    let confidence = aggregate_confidence(&candidates);

    let mut selectors: Vec<String> =
        candidates.iter().map(|c| c.selector.clone()).collect();
    let primary_selector = selectors
        .first()
        .cloned()
        .unwrap_or_else(|| FALLBACK_SELECTOR.to_string());
    if selectors.is_empty() {
        // Downstream extraction always has something to select against
        selectors.push(FALLBACK_SELECTOR.to_string());
    }

    debug!(
        candidates = candidates.len(),
        confidence = confidence.value(),
        primary = %primary_selector,
        "main content detection completed"
    );

    Ok(DetectionResult {
        candidates,
        selectors,
        confidence,
        primary_selector,
    })
}

/// Derive overall confidence from the ranked candidate list.
///
/// Multiple surviving candidates corroborate each other, so confidence is
/// boosted relative to a lone candidate.
fn aggregate_confidence(candidates: &[SelectorCandidate]) -> DetectionConfidence {
    let Some(top) = candidates.first() else {
        return DetectionConfidence::none();
    };

    let value = if candidates.len() > 1 {
        top.score * 0.9 + 0.1
    } else {
        top.score * 0.8
    };

    DetectionConfidence::new(value)
}

/// Ratio of visible text length to serialized markup length.
///
/// Returns 0.0 when the serialized markup is empty.
pub(crate) fn text_density(element: &Selection) -> f64 {
    let text = dom::text_content(element);
    let text_len = text.trim().chars().count();
    let html_len = dom::outer_html(element).chars().count();

    if html_len == 0 {
        return 0.0;
    }
    text_len as f64 / html_len as f64
}

/// Number of `<p>` descendants.
pub(crate) fn paragraph_count(element: &Selection) -> usize {
    element.select("p").length()
}

/// Number of `<h1>`..`<h6>` descendants.
pub(crate) fn heading_count(element: &Selection) -> usize {
    element.select("h1, h2, h3, h4, h5, h6").length()
}
