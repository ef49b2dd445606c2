//! Render output: page records for the flip reader

mod record;

pub use record::{
    materialize, materialize_with, ContentItem, IdSource, PageRecord, RandomIds, PAGE_TIME_WINDOW,
};
