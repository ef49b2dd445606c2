//! Block extraction from concatenated chapter HTML

use super::block::{BlockKind, ContentBlock};
use super::patterns::BLOCK_RE;

/// Scan chapter HTML for paragraphs, images and videos, in source order.
///
/// Anything else (stray text, headings, unclosed tags, multi-line paragraphs)
/// is dropped without notice. Paragraphs with no inner markup are skipped.
pub fn extract_blocks(html: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut skipped_empty = 0usize;

    for caps in BLOCK_RE.captures_iter(html) {
        let (kind, whole) = if let Some(m) = caps.name("img") {
            (BlockKind::Image, m.as_str())
        } else if let Some(m) = caps.name("video") {
            (BlockKind::Video, m.as_str())
        } else {
            if caps.name("inner").map_or(true, |m| m.as_str().is_empty()) {
                skipped_empty += 1;
                continue;
            }
            (BlockKind::Paragraph, &caps[0])
        };

        blocks.push(ContentBlock {
            kind,
            html: whole.to_string(),
        });
    }

    tracing::trace!(
        blocks = blocks.len(),
        skipped_empty,
        input_len = html.len(),
        "extracted chapter blocks"
    );

    blocks
}
