//! Page records: the render-ready form of packed pages

use serde::{Deserialize, Serialize};

use crate::document::patterns::IDENTITY_ATTR_RE;
use crate::document::{content_id, source_page_id};
use crate::layout::RawPage;

/// Width of the placeholder time window given to each page
pub const PAGE_TIME_WINDOW: u64 = 50;

/// One block on a page, with its identity lifted out of the markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Source `data-uuid`, or a fresh id when the block carried none.
    /// Both halves of a split paragraph share the same value.
    pub uuid: String,
    /// Source chapter page (`data-page-uuid`), not the page this item is on
    #[serde(rename = "pageUUID")]
    pub page_uuid: Option<String>,
    /// Block markup without the identity attributes
    pub content: String,
}

/// One paginated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Fresh for every pagination run
    pub uuid: String,
    /// 1-based position in the page list
    pub number: usize,
    pub start_time: u64,
    pub end_time: u64,
    pub content: Vec<ContentItem>,
    pub show_line: bool,
    /// Raw blocks of the page concatenated, identity attributes included
    pub full_content: String,
}

/// Supplies ids for pages and for blocks without a `data-uuid`
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

impl<F: FnMut() -> String> IdSource for F {
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Turn packed pages into records with random page ids
pub fn materialize(pages: Vec<RawPage>) -> Vec<PageRecord> {
    materialize_with(pages, &mut RandomIds)
}

/// Turn packed pages into records, drawing fresh ids from `ids`.
///
/// The page id is drawn before the ids of its blocks.
pub fn materialize_with(pages: Vec<RawPage>, ids: &mut impl IdSource) -> Vec<PageRecord> {
    pages
        .into_iter()
        .enumerate()
        .map(|(index, blocks)| {
            let uuid = ids.next_id();
            let full_content = blocks.concat();
            let content = blocks
                .iter()
                .map(|block| ContentItem {
                    uuid: content_id(block)
                        .map(str::to_string)
                        .unwrap_or_else(|| ids.next_id()),
                    page_uuid: source_page_id(block).map(str::to_string),
                    content: IDENTITY_ATTR_RE.replace_all(block, "").into_owned(),
                })
                .collect();

            PageRecord {
                uuid,
                number: index + 1,
                start_time: index as u64 * PAGE_TIME_WINDOW,
                end_time: (index as u64 + 1) * PAGE_TIME_WINDOW,
                content,
                show_line: true,
                full_content,
            }
        })
        .collect()
}
