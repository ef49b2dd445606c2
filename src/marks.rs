//! Inline `<mark>` highlights inside content markup.
//!
//! Highlights are stored in the content string itself as `<mark>...</mark>`.
//! Ranges are byte offsets into that string.

use serde::{Deserialize, Serialize};

use crate::document::patterns::MARK_RE;
use crate::error::{PaginationError, Result};

/// Half-open byte range `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `other` lies entirely within this range
    pub fn contains(&self, other: &TextRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &TextRange) -> bool {
        !(other.end <= self.start || other.start >= self.end)
    }
}

/// One highlight found in content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark<'a> {
    /// Range of the whole `<mark>...</mark>` element
    pub outer: TextRange,
    /// Range of the highlighted text between the tags
    pub inner: TextRange,
    pub text: &'a str,
}

/// Every highlight in `content`, in order
pub fn marks(content: &str) -> Vec<Mark<'_>> {
    MARK_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(Mark {
                outer: TextRange::new(whole.start(), whole.end()),
                inner: TextRange::new(inner.start(), inner.end()),
                text: inner.as_str(),
            })
        })
        .collect()
}

/// Whether `range` is already covered by a single highlight
pub fn is_range_marked(content: &str, range: TextRange) -> bool {
    marks(content).iter().any(|m| m.inner.contains(&range))
}

/// Wrap `range` of `content` in a highlight
pub fn add_mark(content: &str, range: TextRange) -> Result<String> {
    check_range(content, range)?;

    let mut marked = String::with_capacity(content.len() + 13);
    marked.push_str(&content[..range.start]);
    marked.push_str("<mark>");
    marked.push_str(&content[range.start..range.end]);
    marked.push_str("</mark>");
    marked.push_str(&content[range.end..]);
    Ok(marked)
}

/// Unwrap every highlight whose element overlaps `range`, keeping its text
pub fn remove_marks(content: &str, range: TextRange) -> String {
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for mark in marks(content) {
        if !mark.outer.overlaps(&range) {
            continue;
        }
        out.push_str(&content[cursor..mark.outer.start]);
        out.push_str(mark.text);
        cursor = mark.outer.end;
    }
    out.push_str(&content[cursor..]);
    out
}

fn check_range(content: &str, range: TextRange) -> Result<()> {
    let valid = range.start <= range.end
        && range.end <= content.len()
        && content.is_char_boundary(range.start)
        && content.is_char_boundary(range.end);
    if valid {
        Ok(())
    } else {
        Err(PaginationError::InvalidRange {
            start: range.start,
            end: range.end,
            len: content.len(),
        })
    }
}
