//! Document order resolution.
//!
//! Turns navigation links into a total order over the cached page set,
//! falling back to a case-insensitive alphabetical order over the cache
//! directory when navigation resolves nothing. Each method carries a
//! confidence tag so callers can tell how the order was derived.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::confidence::DetectionConfidence;
use crate::navigation::NavigationStructure;
use crate::{Error, Result};

/// How a document order was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderMethod {
    /// Derived from the site's navigation links.
    Navigation,
    /// Case-insensitive filename sort fallback.
    Alphabetical,
    /// Numeric filename prefixes (reserved; not currently produced).
    Numeric,
    /// Order could not be determined.
    Unknown,
}

/// One file in a resolved document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedFile {
    /// Local path of the cached page.
    pub path: PathBuf,
    /// Display title (never empty).
    pub title: String,
    /// Position in the order.
    pub order: usize,
    /// Hierarchy level (0 = top).
    pub level: usize,
    /// Parent page in the hierarchy, when known.
    pub parent_path: Option<PathBuf>,
}

/// A total order over the cached page set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOrder {
    /// Files sorted ascending by `order`.
    pub files: Vec<OrderedFile>,
    /// How the order was derived.
    pub method: OrderMethod,
    /// Confidence in the ordering.
    pub confidence: DetectionConfidence,
}

impl DocumentOrder {
    /// Whether no `order` value appears twice.
    #[must_use]
    pub fn validate_order(&self) -> bool {
        let mut seen: Vec<usize> = self.files.iter().map(|f| f.order).collect();
        seen.sort_unstable();
        seen.windows(2).all(|w| w[0] != w[1])
    }

    /// Renumber files to contiguous `0..n-1`, preserving relative order.
    ///
    /// Used after files are removed from the set (for example when
    /// content extraction failed for a page).
    pub fn reorder(&mut self) {
        self.files.sort_by_key(|f| f.order);
        for (i, file) in self.files.iter_mut().enumerate() {
            file.order = i;
        }
    }
}

/// Resolve a document order for the cache directory.
///
/// Navigation-derived ordering is tried first; when it resolves zero
/// files (or navigation is absent), the alphabetical fallback is used.
pub fn resolve_order(
    cache_dir: &Path,
    navigation: &NavigationStructure,
) -> Result<DocumentOrder> {
    match resolve_from_navigation(cache_dir, navigation) {
        Ok(order) => Ok(order),
        Err(Error::NavigationNotFound) => {
            debug!("falling back to alphabetical order");
            resolve_alphabetical(cache_dir)
        }
        Err(err) => Err(err),
    }
}

/// Derive an order from navigation links.
///
/// Links are taken in encounter order; each href that resolves to an
/// existing, not-yet-used file under the cache base becomes an entry.
/// Returns [`Error::NavigationNotFound`] when nothing resolves, so the
/// caller can degrade to the fallback.
pub fn resolve_from_navigation(
    cache_dir: &Path,
    navigation: &NavigationStructure,
) -> Result<DocumentOrder> {
    let mut files: Vec<OrderedFile> = Vec::new();

    for link in &navigation.links {
        let Some(path) = link.file_path(cache_dir) else {
            continue;
        };
        if !path.is_file() {
            warn!(href = %link.href, "navigation link target missing from cache");
            continue;
        }
        if files.iter().any(|f| f.path == path) {
            continue;
        }

        files.push(OrderedFile {
            path,
            title: link.text.clone(),
            order: files.len(),
            level: link.level,
            parent_path: None,
        });
    }

    if files.is_empty() {
        return Err(Error::NavigationNotFound);
    }

    debug!(files = files.len(), "order resolved from navigation");
    Ok(DocumentOrder {
        files,
        method: OrderMethod::Navigation,
        confidence: DetectionConfidence::high(),
    })
}

/// Alphabetical fallback order over every HTML file under the cache
/// directory.
///
/// Filenames are compared case-insensitively; titles are derived from the
/// file stem with `_`/`-` replaced by spaces and each word title-cased.
pub fn resolve_alphabetical(cache_dir: &Path) -> Result<DocumentOrder> {
    let mut paths = collect_html_files(cache_dir)?;
    paths.sort_by_key(|p| {
        p.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    let files = paths
        .into_iter()
        .enumerate()
        .map(|(i, path)| OrderedFile {
            title: title_from_stem(&path),
            path,
            order: i,
            level: 0,
            parent_path: None,
        })
        .collect();

    Ok(DocumentOrder {
        files,
        method: OrderMethod::Alphabetical,
        confidence: DetectionConfidence::medium(),
    })
}

fn collect_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current).map_err(|source| Error::Io {
            path: current.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| Error::Io {
                path: current.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_html(&path) {
                found.push(path);
            }
        }
    }

    Ok(found)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| ext == "html" || ext == "htm")
}

/// Derive a display title from a filename stem.
pub(crate) fn title_from_stem(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let spaced = stem.replace(['_', '-'], " ");

    let title = spaced
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        "Untitled".to_string()
    } else {
        title
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::navigation::NavLink;
    use std::fs;

    fn write(dir: &Path, name: &str, html: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, html).unwrap();
        path
    }

    fn nav(hrefs: &[(&str, &str)]) -> NavigationStructure {
        NavigationStructure {
            root_selector: "nav".to_string(),
            links: hrefs
                .iter()
                .map(|(text, href)| NavLink {
                    text: (*text).to_string(),
                    href: (*href).to_string(),
                    level: 0,
                    is_external: false,
                })
                .collect(),
            max_depth: 0,
            confidence: DetectionConfidence::high(),
        }
    }

    #[test]
    fn test_navigation_order_follows_link_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.html", "<html></html>");
        write(dir.path(), "about.html", "<html></html>");
        write(dir.path(), "docs/guide.html", "<html></html>");

        let navigation = nav(&[
            ("Home", "index.html"),
            ("About", "about.html"),
            ("Guide", "docs/guide.html"),
        ]);

        let order = resolve_order(dir.path(), &navigation).unwrap();
        assert_eq!(order.method, OrderMethod::Navigation);
        assert_eq!(order.confidence.value(), 0.8);
        let titles: Vec<&str> = order.files.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "About", "Guide"]);
        let orders: Vec<usize> = order.files.iter().map(|f| f.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.html", "<html></html>");

        let navigation = nav(&[("Home", "index.html"), ("Gone", "missing.html")]);

        let order = resolve_order(dir.path(), &navigation).unwrap();
        assert_eq!(order.files.len(), 1);
        assert_eq!(order.files[0].title, "Home");
    }

    #[test]
    fn test_duplicate_targets_used_once() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.html", "<html></html>");

        let navigation = nav(&[
            ("Home", "index.html"),
            ("Also home", "index.html#section"),
        ]);

        let order = resolve_order(dir.path(), &navigation).unwrap();
        assert_eq!(order.files.len(), 1);
    }

    #[test]
    fn test_alphabetical_fallback_when_nothing_resolves() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.html", "<html></html>");
        write(dir.path(), "a.html", "<html></html>");
        write(dir.path(), "c.html", "<html></html>");

        let order =
            resolve_order(dir.path(), &NavigationStructure::default()).unwrap();

        assert_eq!(order.method, OrderMethod::Alphabetical);
        assert_eq!(order.confidence.value(), 0.6);
        let names: Vec<String> = order
            .files
            .iter()
            .map(|f| f.path.file_name().map(|n| n.to_string_lossy().to_string()))
            .map(Option::unwrap_or_default)
            .collect();
        assert_eq!(names, vec!["a.html", "b.html", "c.html"]);
        let orders: Vec<usize> = order.files.iter().map(|f| f.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_alphabetical_titles_from_stems() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "getting_started.html", "<html></html>");
        write(dir.path(), "api-reference.html", "<html></html>");

        let order = resolve_alphabetical(dir.path()).unwrap();

        let titles: Vec<&str> = order.files.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Api Reference", "Getting Started"]);
    }

    #[test]
    fn test_validate_order_rejects_duplicates() {
        let mut order = DocumentOrder {
            files: vec![
                OrderedFile {
                    path: PathBuf::from("a.html"),
                    title: "A".to_string(),
                    order: 0,
                    level: 0,
                    parent_path: None,
                },
                OrderedFile {
                    path: PathBuf::from("b.html"),
                    title: "B".to_string(),
                    order: 0,
                    level: 0,
                    parent_path: None,
                },
            ],
            method: OrderMethod::Unknown,
            confidence: DetectionConfidence::none(),
        };

        assert!(!order.validate_order());
        order.files[1].order = 1;
        assert!(order.validate_order());
    }

    #[test]
    fn test_reorder_renumbers_contiguously() {
        let mut order = DocumentOrder {
            files: vec![
                OrderedFile {
                    path: PathBuf::from("c.html"),
                    title: "C".to_string(),
                    order: 7,
                    level: 0,
                    parent_path: None,
                },
                OrderedFile {
                    path: PathBuf::from("a.html"),
                    title: "A".to_string(),
                    order: 2,
                    level: 0,
                    parent_path: None,
                },
            ],
            method: OrderMethod::Navigation,
            confidence: DetectionConfidence::high(),
        };

        order.reorder();

        assert_eq!(order.files[0].title, "A");
        assert_eq!(order.files[0].order, 0);
        assert_eq!(order.files[1].title, "C");
        assert_eq!(order.files[1].order, 1);
        assert!(order.validate_order());
    }

    #[test]
    fn test_html_extension_filter() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "page.html", "<html></html>");
        write(dir.path(), "legacy.HTM", "<html></html>");
        write(dir.path(), "style.css", "body {}");

        let order = resolve_alphabetical(dir.path()).unwrap();
        assert_eq!(order.files.len(), 2);
    }
}
