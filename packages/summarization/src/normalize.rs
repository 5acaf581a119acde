//! HTML stripping and whitespace normalization.
//!
//! Input is parsed as an HTML fragment with `scraper` (html5ever under the
//! hood), which recovers from any malformed markup, so normalization never
//! fails.

use scraper::{Html, Node};

/// Elements whose text content is never visible.
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Strip markup from `raw` and collapse whitespace into single spaces.
///
/// Text fragments are joined with a space so adjacent block elements
/// (`<p>a</p><p>b</p>`) do not fuse into one word.
pub fn normalize(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);

    let mut pieces: Vec<&str> = Vec::new();
    for node in fragment.tree.root().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(el) => INVISIBLE_ELEMENTS.contains(&el.name()),
                _ => false,
            });
            if !hidden {
                pieces.push(&**text);
            }
        }
    }

    collapse_whitespace(&pieces.join(" "))
}

/// Collapse every whitespace run to one ASCII space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    let mut normalized = String::with_capacity(s.len());
    for segment in s.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Number of whitespace-delimited tokens.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}
