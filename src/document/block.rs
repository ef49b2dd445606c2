//! Block-level content units

use super::patterns::{DATA_PAGE_UUID_RE, DATA_UUID_RE, PARAGRAPH_RE, TAG_RE};

/// The kind of block element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockKind {
    /// Text paragraph, possibly a fragment of a split one
    #[default]
    Paragraph,
    /// `<img ...>`
    Image,
    /// `<video ...></video>`
    Video,
}

impl BlockKind {
    /// Classify raw block markup by its opening tag
    pub fn of(html: &str) -> Self {
        if html.starts_with("<img") {
            BlockKind::Image
        } else if html.starts_with("<video") {
            BlockKind::Video
        } else {
            BlockKind::Paragraph
        }
    }

    /// Media blocks cost a fixed number of lines and are never split
    pub fn is_media(&self) -> bool {
        matches!(self, BlockKind::Image | BlockKind::Video)
    }
}

/// One extracted block of chapter markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub kind: BlockKind,
    /// Raw markup, identity attributes included
    pub html: String,
}

impl ContentBlock {
    pub fn new(html: impl Into<String>) -> Self {
        let html = html.into();
        Self {
            kind: BlockKind::of(&html),
            html,
        }
    }

    pub fn is_media(&self) -> bool {
        self.kind.is_media()
    }

    /// Source content id (`data-uuid`), if annotated
    pub fn content_id(&self) -> Option<&str> {
        content_id(&self.html)
    }

    /// Source chapter page id (`data-page-uuid`), if annotated
    pub fn source_page_id(&self) -> Option<&str> {
        source_page_id(&self.html)
    }
}

pub(crate) fn content_id(html: &str) -> Option<&str> {
    DATA_UUID_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub(crate) fn source_page_id(html: &str) -> Option<&str> {
    DATA_PAGE_UUID_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Markup reduced to its text, tags removed
pub fn plain_text(html: &str) -> std::borrow::Cow<'_, str> {
    TAG_RE.replace_all(html, "")
}

/// Split `<p attrs>inner</p>` into its trimmed attribute string and inner markup
pub fn paragraph_parts(html: &str) -> Option<(&str, &str)> {
    let caps = PARAGRAPH_RE.captures(html)?;
    let attrs = caps.get(1).map_or("", |m| m.as_str()).trim();
    let inner = caps.get(2).map_or("", |m| m.as_str());
    Some((attrs, inner))
}

/// Wrap inner markup in a paragraph carrying `attrs`
pub fn wrap_paragraph(attrs: &str, inner: &str) -> String {
    if attrs.is_empty() {
        format!("<p>{}</p>", inner)
    } else {
        format!("<p {}>{}</p>", attrs, inner)
    }
}

/// Wrap text in a bare paragraph unless it already is one
pub fn wrap_paragraph_if_needed(html: &str) -> String {
    if paragraph_parts(html).is_some() {
        html.to_string()
    } else {
        wrap_paragraph("", html)
    }
}
