//! Cached regex patterns for chapter markup.
//!
//! Chapter HTML is matched with patterns rather than parsed. Every pattern the
//! crate uses lives here so a real parser could replace them in one place.

use regex::Regex;
use std::sync::LazyLock;

/// One content block: a paragraph, a void image tag or a closed empty video tag
pub static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<p(?:\s[^>]*)?>(?P<inner>.*?)</p>|(?P<img><img[^>]+>)|(?P<video><video[^>]+></video>)"#,
    )
    .unwrap()
});

/// Any tag, for reducing markup to its text
pub static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A whole block that is exactly one paragraph: attributes, inner markup
pub static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<p([^>]*)>(.*)</p>$").unwrap());

/// `data-uuid="..."` on a block's opening tag
pub static DATA_UUID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-uuid="([^"]*)""#).unwrap());

/// `data-page-uuid="..."` on a block's opening tag
pub static DATA_PAGE_UUID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-page-uuid="([^"]*)""#).unwrap());

/// Both identity attributes with their leading space, for removal
pub static IDENTITY_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#" data-(?:uuid|page-uuid)="[^"]*""#).unwrap());

/// Inline highlight
pub static MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<mark>(.*?)</mark>").unwrap());
