//! Per-page content extraction.
//!
//! Takes one ordered file plus the selector chosen by detection, pulls
//! the matched region out of the page, and decomposes it into typed
//! [`ContentFragment`]s ready for assembly. Extraction failures on a
//! single page are soft: the caller logs the error as a warning and
//! moves on to the next file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use dom_query::{Document, Selection};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom;
use crate::encoding;
use crate::order;
use crate::{Error, Result};

#[allow(clippy::expect_used)]
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Tags removed from a matched region before decomposition.
const STRIP_TAGS: &[&str] = &["script", "style", "noscript", "meta", "link"];

/// Block categories a page region decomposes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Heading,
    Paragraph,
    List,
    Code,
    Table,
    Image,
    Link,
    Quote,
}

/// One extracted block of content.
///
/// `raw_content` keeps the source HTML of the block; `formatted_content`
/// is the Markdown rendition emitted into the combined document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFragment {
    /// Block category.
    pub content_type: ContentType,
    /// Source HTML of the block.
    pub raw_content: String,
    /// Markdown rendition of the block.
    pub formatted_content: String,
    /// Heading level in `[1, 6]`; set only for [`ContentType::Heading`].
    pub heading_level: Option<u8>,
}

impl ContentFragment {
    /// Whether this fragment is a heading.
    #[inline]
    #[must_use]
    pub fn is_heading(&self) -> bool {
        self.content_type == ContentType::Heading
    }
}

/// Everything extracted from one cached page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Source page on disk.
    pub file_path: PathBuf,
    /// Resolved page title.
    pub title: String,
    /// Typed blocks in document order.
    pub fragments: Vec<ContentFragment>,
    /// Plain-text length of the matched region after cleaning.
    pub text_length: usize,
    /// Non-fatal problems hit while extracting this page.
    pub warnings: Vec<String>,
}

/// Read a cached page from disk and extract the region matched by
/// `selector`.
///
/// Transcodes the raw bytes to UTF-8 first, sniffing the charset from
/// the page's meta tags.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::ContentNotFound`] when the selector matches nothing.
pub fn extract_file(path: &Path, selector: &str) -> Result<ExtractedContent> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let html = encoding::transcode_to_utf8(&bytes);
    let doc = dom::parse(&html);

    extract_document(&doc, selector, path)
}

/// Extract the region matched by `selector` from an already-parsed page.
///
/// # Errors
///
/// Returns [`Error::ContentNotFound`] when the selector matches nothing
/// on the page.
pub fn extract_document(doc: &Document, selector: &str, path: &Path) -> Result<ExtractedContent> {
    let matched = doc.select(selector);
    if !matched.exists() {
        return Err(Error::ContentNotFound {
            selector: selector.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut warnings = Vec::new();
    let title = resolve_title(doc, &matched, path, &mut warnings);

    // Work on a detached copy so cleaning never mutates the source page.
    let detached = dom::detach_element(&matched);
    let root = detached.select("body");
    dom::remove_elements(&root, STRIP_TAGS);

    let mut fragments = Vec::new();
    decompose(&root, &mut fragments);

    let cleaned_text = collapse_whitespace(&dom::text_content(&root));
    if fragments.is_empty() && !cleaned_text.is_empty() {
        // No recognizable block structure: keep the whole region as one
        // paragraph rather than dropping the page.
        fragments.push(ContentFragment {
            content_type: ContentType::Paragraph,
            raw_content: dom::inner_html(&root).to_string(),
            formatted_content: cleaned_text.clone(),
            heading_level: None,
        });
    }

    let text_length = cleaned_text.len();
    if text_length == 0 {
        warnings.push(format!("no text content extracted from {}", path.display()));
    }

    debug!(
        path = %path.display(),
        fragments = fragments.len(),
        text_length,
        "extracted page content"
    );

    Ok(ExtractedContent {
        file_path: path.to_path_buf(),
        title,
        fragments,
        text_length,
        warnings,
    })
}

/// Resolve the page title: `<title>` tag, then the first `h1` inside the
/// matched region, then the filename stem.
fn resolve_title(
    doc: &Document,
    matched: &Selection,
    path: &Path,
    warnings: &mut Vec<String>,
) -> String {
    let title_tag = doc.select("title");
    if title_tag.exists() {
        let text = collapse_whitespace(&dom::text_content(&title_tag));
        if !text.is_empty() {
            return text;
        }
    }

    let h1 = dom::query_selector(matched, "h1");
    if h1.exists() {
        let text = collapse_whitespace(&dom::text_content(&h1));
        if !text.is_empty() {
            return text;
        }
    }

    warnings.push(format!("no title found in {}", path.display()));
    order::title_from_stem(path)
}

/// Walk direct element children and emit one fragment per recognized
/// block, recursing into container elements.
fn decompose(sel: &Selection, fragments: &mut Vec<ContentFragment>) {
    let children = dom::children(sel);
    for node in children.nodes() {
        let child = Selection::from(*node);
        let Some(tag) = dom::tag_name(&child) else {
            continue;
        };

        match tag.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                push_heading(&child, &tag, fragments);
            }
            "p" => push_block(&child, ContentType::Paragraph, fragments),
            "ul" | "ol" | "dl" => push_block(&child, ContentType::List, fragments),
            "pre" | "code" => push_block(&child, ContentType::Code, fragments),
            "table" => push_block(&child, ContentType::Table, fragments),
            "blockquote" => push_block(&child, ContentType::Quote, fragments),
            "img" | "figure" => push_image(&child, fragments),
            "a" => push_block(&child, ContentType::Link, fragments),
            "div" | "section" | "article" | "main" | "header" | "footer" | "span" => {
                decompose(&child, fragments);
            }
            _ => {}
        }
    }
}

fn push_heading(sel: &Selection, tag: &str, fragments: &mut Vec<ContentFragment>) {
    let text = collapse_whitespace(&dom::text_content(sel));
    if text.is_empty() {
        return;
    }
    let level: u8 = tag[1..].parse().unwrap_or(1);
    fragments.push(ContentFragment {
        content_type: ContentType::Heading,
        raw_content: dom::outer_html(sel).to_string(),
        formatted_content: format!("{} {text}", "#".repeat(usize::from(level))),
        heading_level: Some(level),
    });
}

fn push_block(sel: &Selection, content_type: ContentType, fragments: &mut Vec<ContentFragment>) {
    let raw = dom::outer_html(sel).to_string();
    let formatted = html2md::parse_html(&raw).trim().to_string();
    if formatted.is_empty() {
        return;
    }
    fragments.push(ContentFragment {
        content_type,
        raw_content: raw,
        formatted_content: formatted,
        heading_level: None,
    });
}

/// Images carry no text; keep them when they at least reference a source.
fn push_image(sel: &Selection, fragments: &mut Vec<ContentFragment>) {
    let target = if dom::tag_name(sel).as_deref() == Some("img") {
        sel.clone()
    } else {
        dom::query_selector(sel, "img")
    };
    if dom::get_attribute(&target, "src").is_none() {
        return;
    }

    let raw = dom::outer_html(sel).to_string();
    let formatted = html2md::parse_html(&raw).trim().to_string();
    if formatted.is_empty() {
        return;
    }
    fragments.push(ContentFragment {
        content_type: ContentType::Image,
        raw_content: raw,
        formatted_content: formatted,
        heading_level: None,
    });
}

/// Collapse runs of whitespace into single spaces and trim.
#[must_use]
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").to_string()
}
