// src/core/html.rs
// Typed, read-only view over a parsed page. Queries are by tag name or class
// token and always come back in document order.

use scraper::{ElementRef, Html};

/// Elements whose text content never shows up on screen.
const NON_RENDERED: [&str; 3] = ["script", "style", "template"];

pub struct Document {
    html: Html,
}

impl Document {
    /// Best-effort parse; malformed markup still yields a tree.
    pub fn parse(bytes: &[u8]) -> Self {
        Self::parse_str(&String::from_utf8_lossy(bytes))
    }

    pub fn parse_str(text: &str) -> Self {
        let html = Html::parse_document(text);
        if !html.errors.is_empty() {
            tracing::debug!(recovered = html.errors.len(), "html parser recovered from errors");
        }
        Self { html }
    }

    pub fn root(&self) -> Element<'_> {
        Element(self.html.root_element())
    }

    /// Every element whose tag is in `tags`, in document order (not grouped by tag).
    pub fn elements_by_tag(&self, tags: &[&str]) -> Vec<Element<'_>> {
        self.root().all(tags)
    }

    /// Every element whose class list contains `class`, whatever its tag.
    pub fn elements_with_class(&self, class: &str) -> Vec<Element<'_>> {
        walk(self.html.root_element())
            .filter(|el| el.value().classes().any(|c| c == class))
            .map(Element)
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    pub fn tag(&self) -> &'a str {
        self.0.value().name()
    }

    /// Rendered text of the whole subtree, trimmed at both ends.
    /// Text under `script`/`style`/`template` is left out.
    pub fn text(&self) -> String {
        let mut raw = s!();
        for node in self.0.descendants() {
            let Some(text) = node.value().as_text() else { continue };
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| NON_RENDERED.contains(&el.value().name()));
            if !hidden {
                raw.push_str(text);
            }
        }
        s!(raw.trim())
    }

    /// First descendant with the given tag.
    pub fn first(&self, tag: &str) -> Option<Element<'a>> {
        walk(self.0).find(|el| el.value().name() == tag).map(Element)
    }

    /// All descendants whose tag is in `tags`, in document order.
    pub fn all(&self, tags: &[&str]) -> Vec<Element<'a>> {
        walk(self.0)
            .filter(|el| tags.contains(&el.value().name()))
            .map(Element)
            .collect()
    }
}

/// Pre-order walk over `el` and its element descendants.
fn walk(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.descendants().filter_map(ElementRef::wrap)
}
