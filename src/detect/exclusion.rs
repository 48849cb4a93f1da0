//! Exclusion filter for page chrome.
//!
//! A fixed denylist of tags, class tokens and ids that mark structural
//! chrome (navigation, headers, footers, ads, comments, social widgets).
//! The filter is a pure predicate over a candidate's backing element; it
//! never rescales scores.

use dom_query::Selection;

use crate::dom;

/// Denylisted selectors, kept in CSS-like syntax as data.
///
/// A bare name matches a tag, a `.name` matches a class token, a `#name`
/// matches an id.
pub static EXCLUSION_SELECTORS: &[&str] = &[
    "nav",
    "header",
    "footer",
    "aside",
    "sidebar",
    ".nav",
    ".header",
    ".footer",
    ".aside",
    ".sidebar",
    "#nav",
    "#header",
    "#footer",
    "#aside",
    "#sidebar",
    ".advertisement",
    ".ads",
    ".ad",
    ".banner",
    ".comments",
    ".comment",
    ".social",
    ".share",
    ".related",
    ".recommendation",
    ".sidebar-content",
];

/// Whether a candidate's backing element is page chrome.
///
/// True when the element's tag exactly equals a denylisted tag, its class
/// attribute contains a denylisted class token, or its id exactly equals
/// a denylisted id.
#[must_use]
pub fn is_excluded(element: &Selection) -> bool {
    let tag = dom::tag_name(element).unwrap_or_default();
    let classes = dom::class_name(element).unwrap_or_default();
    let id = dom::id(element).unwrap_or_default();

    for selector in EXCLUSION_SELECTORS {
        if let Some(class_token) = selector.strip_prefix('.') {
            if !classes.is_empty() && classes.contains(class_token) {
                return true;
            }
        } else if let Some(id_name) = selector.strip_prefix('#') {
            if id == id_name {
                return true;
            }
        } else if tag == *selector {
            return true;
        }
    }

    false
}
