//! Line estimation, block splitting and page packing

pub mod font;
mod line_break;
mod pagination;
mod split;

pub use font::FontMetrics;
pub use line_break::LineBreaker;
pub use pagination::{PagePacker, RawPage};
pub use split::{TextSplit, TextSplitter};
