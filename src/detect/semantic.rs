//! Semantic-selector scoring pass.
//!
//! A fixed priority table of selectors that conventionally mark the main
//! content of a page. The table is ordered data, not code branches, so a
//! different weighting can be swapped in without touching the pass
//! itself.

use dom_query::{Document, Selection};

use super::{heading_count, paragraph_count, text_density, ScoredRegion, SelectorCandidate};

/// Priority table of semantic content selectors, highest weight first.
///
/// Weights are on a 0-100 scale and normalized into `[0, 1]` during
/// scoring. Table order decides ties downstream (stable sort).
pub static SEMANTIC_SELECTORS: &[(&str, u32)] = &[
    ("main", 100),
    ("[role='main']", 95),
    ("main article", 95),
    ("article", 90),
    ("div[role='main']", 90),
    ("#main-content", 85),
    ("#main", 80),
    ("#content", 80),
    (".main-content", 75),
    ("#article", 75),
    (".main", 70),
    (".content", 70),
    ("#post", 70),
    ("#entry", 70),
    (".article", 65),
    (".post", 60),
    (".entry", 60),
];

/// Score every semantic selector that matches on the page.
///
/// For each selector the first matched element is evaluated; the match
/// count is kept on the candidate for reporting only.
pub(crate) fn semantic_pass(doc: &Document) -> Vec<ScoredRegion<'_>> {
    let mut regions = Vec::new();

    for &(selector, weight) in SEMANTIC_SELECTORS {
        let matches = doc.select(selector);
        let Some(first) = matches.nodes().first() else {
            continue;
        };
        let element = Selection::from(*first);
        let element_count = matches.length();

        let density = text_density(&element);
        let paragraphs = paragraph_count(&element);
        let headings = heading_count(&element);

        let mut score = f64::from(weight) / 100.0;
        if density > 0.1 {
            score += 0.1;
        }
        if paragraphs > 3 {
            score += 0.1;
        }
        if headings > 0 {
            score += 0.05;
        }
        score = score.min(1.0);

        let reasoning = format!(
            "semantic selector '{selector}' (text density: {density:.2}, \
             paragraphs: {paragraphs}, headings: {headings})"
        );

        regions.push(ScoredRegion {
            candidate: SelectorCandidate {
                selector: selector.to_string(),
                score,
                reasoning,
                element_count,
            },
            element,
        });
    }

    regions
}
