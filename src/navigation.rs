//! Navigation extraction.
//!
//! Finds a page's navigation region and the ordered links within it. The
//! resulting structure drives the document order resolver; when no
//! navigation is found the resolver falls back to alphabetical ordering.

use dom_query::{Document, Selection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::confidence::DetectionConfidence;
use crate::dom;

/// Navigation region selectors, tried in order; the first that matches
/// wins.
pub static NAV_SELECTORS: &[&str] = &[
    "nav",
    "ul.nav",
    ".navigation",
    "#navigation",
    ".nav",
    "#nav",
    ".menu",
    "#menu",
    ".toc",
    "#toc",
    ".sidebar",
];

/// A single link found inside a navigation region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible link text (never empty).
    pub text: String,
    /// Raw href value.
    pub href: String,
    /// Hierarchy level within the navigation (0 = top).
    pub level: usize,
    /// Whether the target lives on another site.
    pub is_external: bool,
}

impl NavLink {
    /// Whether the link points inside the cached site.
    #[must_use]
    pub fn is_internal_link(&self) -> bool {
        !self.is_external && !has_absolute_scheme(&self.href)
    }

    /// Resolve the link to a candidate file path under the cache base
    /// directory.
    ///
    /// Strips any `#fragment` or `?query` suffix. Returns `None` for
    /// external links and for hrefs that are empty after stripping
    /// (pure anchors like `#section`).
    #[must_use]
    pub fn file_path(&self, base: &Path) -> Option<PathBuf> {
        if self.is_external {
            return None;
        }

        let clean = self
            .href
            .split('#')
            .next()
            .and_then(|h| h.split('?').next())
            .unwrap_or_default();
        if clean.is_empty() {
            return None;
        }

        Some(base.join(clean))
    }
}

/// The ordered link structure of a page's navigation region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationStructure {
    /// Selector that matched the navigation region (empty when absent).
    pub root_selector: String,
    /// Links in document order.
    pub links: Vec<NavLink>,
    /// Maximum hierarchy level over all links.
    pub max_depth: usize,
    /// Confidence in the detection.
    pub confidence: DetectionConfidence,
}

impl NavigationStructure {
    /// Whether any navigation region was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Whether an href starts with an absolute URI scheme.
fn has_absolute_scheme(href: &str) -> bool {
    url::Url::parse(href).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Detect the navigation region of a page and collect its links.
///
/// Tries each selector in [`NAV_SELECTORS`] and stops at the first one
/// that matches at least one element. Every `<a href>` with non-empty
/// visible text inside that element becomes a [`NavLink`] at level 0.
///
/// Returns an empty structure with confidence `none` when no selector
/// matches; a match is reported at fixed `high` confidence regardless of
/// how many links were found.
#[must_use]
pub fn detect_navigation(doc: &Document) -> NavigationStructure {
    for selector in NAV_SELECTORS {
        let matches = doc.select(selector);
        let Some(first) = matches.nodes().first() else {
            continue;
        };
        let region = Selection::from(*first);

        let links = collect_links(&region);
        debug!(selector, links = links.len(), "navigation region found");

        return NavigationStructure {
            root_selector: (*selector).to_string(),
            max_depth: links.iter().map(|l| l.level).max().unwrap_or(0),
            links,
            confidence: DetectionConfidence::high(),
        };
    }

    debug!("no navigation region found");
    NavigationStructure::default()
}

fn collect_links(region: &Selection) -> Vec<NavLink> {
    let mut links = Vec::new();

    for node in region.select("a[href]").nodes() {
        let anchor = Selection::from(*node);
        let Some(href) = dom::get_attribute(&anchor, "href") else {
            continue;
        };
        let text = dom::text_content(&anchor).trim().to_string();
        if text.is_empty() || href.is_empty() {
            continue;
        }

        links.push(NavLink {
            is_external: has_absolute_scheme(&href),
            text,
            href,
            level: 0,
        });
    }

    links
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_nav_element_detected_first() {
        let doc = dom::parse(
            r#"<html><body>
                <nav>
                    <a href="index.html">Home</a>
                    <a href="about.html">About</a>
                </nav>
                <ul class="nav"><li><a href="x.html">X</a></li></ul>
            </body></html>"#,
        );

        let nav = detect_navigation(&doc);
        assert_eq!(nav.root_selector, "nav");
        assert_eq!(nav.links.len(), 2);
        assert_eq!(nav.links[0].text, "Home");
        assert_eq!(nav.links[1].href, "about.html");
        assert_eq!(nav.confidence.value(), 0.8);
    }

    #[test]
    fn test_fallback_selectors_in_order() {
        let doc = dom::parse(
            r#"<html><body>
                <div class="navigation"><a href="a.html">A</a></div>
            </body></html>"#,
        );

        let nav = detect_navigation(&doc);
        assert_eq!(nav.root_selector, ".navigation");
        assert_eq!(nav.links.len(), 1);
    }

    #[test]
    fn test_no_navigation_returns_empty_with_none_confidence() {
        let doc = dom::parse("<html><body><p>just content</p></body></html>");

        let nav = detect_navigation(&doc);
        assert!(nav.is_empty());
        assert_eq!(nav.root_selector, "");
        assert_eq!(nav.confidence.value(), 0.0);
    }

    #[test]
    fn test_links_without_text_are_skipped() {
        let doc = dom::parse(
            r#"<html><body><nav>
                <a href="a.html"></a>
                <a href="b.html">  </a>
                <a href="c.html">C</a>
            </nav></body></html>"#,
        );

        let nav = detect_navigation(&doc);
        assert_eq!(nav.links.len(), 1);
        assert_eq!(nav.links[0].text, "C");
    }

    #[test]
    fn test_external_links_flagged() {
        let doc = dom::parse(
            r#"<html><body><nav>
                <a href="https://example.com/">Elsewhere</a>
                <a href="guide.html">Guide</a>
            </nav></body></html>"#,
        );

        let nav = detect_navigation(&doc);
        assert!(nav.links[0].is_external);
        assert!(!nav.links[0].is_internal_link());
        assert!(!nav.links[1].is_external);
        assert!(nav.links[1].is_internal_link());
    }

    #[test]
    fn test_file_path_strips_fragment_and_query() {
        let link = NavLink {
            text: "Guide".to_string(),
            href: "docs/guide.html#intro?x=1".to_string(),
            level: 0,
            is_external: false,
        };

        let path = link.file_path(Path::new("/cache"));
        assert_eq!(path, Some(PathBuf::from("/cache/docs/guide.html")));
    }

    #[test]
    fn test_file_path_none_for_anchor_and_external() {
        let anchor = NavLink {
            text: "Top".to_string(),
            href: "#top".to_string(),
            level: 0,
            is_external: false,
        };
        assert_eq!(anchor.file_path(Path::new("/cache")), None);

        let external = NavLink {
            text: "Out".to_string(),
            href: "https://example.com/".to_string(),
            level: 0,
            is_external: true,
        };
        assert_eq!(external.file_path(Path::new("/cache")), None);
    }
}
