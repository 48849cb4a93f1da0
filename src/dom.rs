//! DOM operations adapter.
//!
//! Thin wrapper over the `dom_query` crate. The rest of the pipeline
//! talks to this module instead of `dom_query` directly, which keeps the
//! selector-matching and text-extraction surface in one place.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril: reference-counted, so passing text around is O(1)
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get the element's id attribute.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get the element's class attribute.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get the tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of the node and its descendants.
///
/// Returns `StrTendril`; call `.to_string()` only when owned storage is
/// needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content (the element itself plus its subtree).
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Querying ===

/// Query the first element matching a CSS selector.
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// Get direct element children.
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

// === Tree Manipulation ===

/// Remove elements matching the given tag names anywhere under the
/// selection, discarding their content.
pub fn remove_elements(sel: &Selection, tags: &[&str]) {
    for tag in tags {
        sel.select(tag).remove();
    }
}

/// Clone an element with its subtree into a standalone document.
///
/// The returned document owns the copy; mutating it leaves the source
/// page untouched.
#[must_use]
pub fn detach_element(sel: &Selection) -> Document {
    Document::from(outer_html(sel))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container".to_string()));
    }

    #[test]
    fn test_missing_attributes_return_none() {
        let doc = parse("<div>no attributes</div>");
        let div = doc.select("div");

        assert_eq!(id(&div), None);
        assert_eq!(class_name(&div), None);
        assert_eq!(get_attribute(&div, "data-test"), None);
    }

    #[test]
    fn test_tag_name() {
        let doc = parse("<article><section>content</section></article>");

        assert_eq!(tag_name(&doc.select("article")), Some("article".to_string()));
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
    }

    #[test]
    fn test_text_and_html_content() {
        let doc = parse("<div>text <span>nested</span> more</div>");
        let div = doc.select("div");

        assert_eq!(text_content(&div), "text nested more".into());
        assert!(inner_html(&div).contains("<span>"));
        assert!(outer_html(&div).contains("<div>"));
    }

    #[test]
    fn test_querying() {
        let doc = parse(
            r#"
            <div id="container">
                <p class="text">First</p>
                <p class="text">Second</p>
                <span>Third</span>
            </div>
        "#,
        );
        let container = doc.select("#container");

        let first_p = query_selector(&container, "p");
        assert_eq!(text_content(&first_p), "First".into());

        let kids = children(&container);
        assert_eq!(kids.length(), 3);
    }

    #[test]
    fn test_remove_elements_strips_subtrees() {
        let doc = parse(
            r#"<div><script>var x;</script><style>p{}</style><p>keep</p></div>"#,
        );
        let div = doc.select("div");

        remove_elements(&div, &["script", "style", "noscript"]);

        assert!(doc.select("script").is_empty());
        assert!(doc.select("style").is_empty());
        assert_eq!(text_content(&doc.select("div")).trim(), "keep");
    }

    #[test]
    fn test_detach_element_is_independent() {
        let doc = parse(r#"<main><p>body</p></main>"#);
        let detached = detach_element(&doc.select("main"));

        detached.select("p").remove();

        assert!(detached.select("p").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn test_operations_on_empty_selection() {
        let doc = parse("<div>content</div>");
        let empty = doc.select("span");

        remove_elements(&empty, &["script"]);
        assert_eq!(text_content(&empty), "".into());
        assert!(inner_html(&empty).is_empty());
    }
}
