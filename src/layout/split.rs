//! Splitting a text block at a line budget

use crate::document::{paragraph_parts, wrap_paragraph};
use crate::layout::line_break::LineBreaker;

/// Result of splitting a block: the part that fits and the rest.
///
/// An empty `head` means not even one word fit. An empty `tail` means the
/// whole block fit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSplit {
    pub head: String,
    pub tail: String,
}

impl TextSplit {
    pub fn is_complete(&self) -> bool {
        self.tail.is_empty()
    }
}

/// Splits paragraphs word by word against a remaining line budget
pub struct TextSplitter<'a> {
    breaker: &'a LineBreaker,
    width: f32,
}

impl<'a> TextSplitter<'a> {
    pub fn new(breaker: &'a LineBreaker, width: f32) -> Self {
        Self { breaker, width }
    }

    /// Longest word prefix of `block` that measures within `remaining_lines`.
    ///
    /// Paragraph halves are both re-wrapped in `<p>` with the source
    /// attributes, so a split paragraph yields two blocks with the same
    /// `data-uuid`.
    ///
    /// Words are the whitespace-separated tokens of the raw markup, so a split
    /// can fall inside an inline tag such as `<a href="...">`.
    pub fn split(&self, block: &str, remaining_lines: usize) -> TextSplit {
        let (attrs, inner, is_paragraph) = match paragraph_parts(block) {
            Some((attrs, inner)) => (attrs, inner, true),
            None => ("", block, false),
        };
        let words: Vec<&str> = inner.split_whitespace().collect();

        let mut fitted = 0;
        let mut candidate = String::with_capacity(inner.len());
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                candidate.push(' ');
            }
            candidate.push_str(word);

            if self.breaker.count_lines(&candidate, self.width) > remaining_lines {
                break;
            }
            fitted = i + 1;
        }

        tracing::trace!(words = words.len(), fitted, remaining_lines, "split text block");

        if fitted == words.len() {
            return TextSplit {
                head: block.to_string(),
                tail: String::new(),
            };
        }
        if fitted == 0 {
            return TextSplit {
                head: String::new(),
                tail: block.to_string(),
            };
        }
        split_at_word(attrs, &words, fitted, is_paragraph)
    }

    /// Take exactly the first word, whatever it measures.
    ///
    /// Used when a page is empty and still too short for the first word, so
    /// that every page makes progress through the block.
    pub fn split_first_word(&self, block: &str) -> TextSplit {
        let (attrs, inner, is_paragraph) = match paragraph_parts(block) {
            Some((attrs, inner)) => (attrs, inner, true),
            None => ("", block, false),
        };
        let words: Vec<&str> = inner.split_whitespace().collect();
        if words.is_empty() {
            return TextSplit {
                head: block.to_string(),
                tail: String::new(),
            };
        }
        split_at_word(attrs, &words, 1, is_paragraph)
    }
}

fn split_at_word(attrs: &str, words: &[&str], at: usize, is_paragraph: bool) -> TextSplit {
    let head = words[..at].join(" ");
    let tail = words[at..].join(" ");

    let wrap = |text: String| {
        if text.is_empty() || !is_paragraph {
            text
        } else {
            wrap_paragraph(attrs, &text)
        }
    };

    TextSplit {
        head: wrap(head),
        tail: wrap(tail),
    }
}
