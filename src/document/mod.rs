//! Chapter content model: blocks and how they are found in markup

mod annotate;
mod block;
mod extract;
pub(crate) mod patterns;

pub use annotate::{chapter_html, SourceContent, SourcePage};
pub use block::{
    paragraph_parts, plain_text, wrap_paragraph, wrap_paragraph_if_needed, BlockKind,
    ContentBlock,
};
pub(crate) use block::{content_id, source_page_id};
pub use extract::extract_blocks;
