//! Content-feature scoring pass.
//!
//! Scores `div` containers that carry an id or class by how much visible
//! text they hold relative to their markup, plus a paragraph-count bonus.
//! Catches pages whose main content lives in a generically named wrapper
//! that the semantic table misses.

use dom_query::{Document, Selection};

use super::{paragraph_count, text_density, ScoredRegion, SelectorCandidate};
use crate::dom;
use crate::options::DetectorOptions;

/// Score container elements by their content features, appending new
/// candidates to `regions`.
///
/// A container whose derived selector duplicates an existing candidate is
/// skipped, so the semantic pass keeps priority for shared selectors.
pub(crate) fn content_feature_pass<'a>(
    doc: &'a Document,
    options: &DetectorOptions,
    regions: &mut Vec<ScoredRegion<'a>>,
) {
    for node in doc.select("div").nodes() {
        let element = Selection::from(*node);

        let id = dom::id(&element);
        let class = dom::class_name(&element);
        if id.is_none() && class.is_none() {
            continue;
        }

        let selector = derive_selector(&element);
        if selector.is_empty()
            || regions.iter().any(|r| r.candidate.selector == selector)
        {
            continue;
        }

        let density = text_density(&element);
        if density < options.min_text_density {
            continue;
        }

        let paragraphs = paragraph_count(&element);
        if paragraphs < options.min_paragraph_count {
            continue;
        }

        let score = density * 0.5 + (paragraphs as f64 / 10.0).min(0.3);
        let reasoning = format!(
            "content features (text density: {density:.2}, paragraphs: {paragraphs})"
        );

        regions.push(ScoredRegion {
            candidate: SelectorCandidate {
                selector,
                score,
                reasoning,
                element_count: 1,
            },
            element,
        });
    }
}

/// Derive a selector for an element: `#id`, else `.first-class`, else the
/// bare tag name.
pub(crate) fn derive_selector(element: &Selection) -> String {
    if let Some(id) = dom::id(element) {
        if !id.is_empty() {
            return format!("#{id}");
        }
    }

    if let Some(class) = dom::class_name(element) {
        if let Some(first) = class.split_whitespace().next() {
            return format!(".{first}");
        }
    }

    dom::tag_name(element).unwrap_or_default()
}
