//! Line estimation for text blocks

use crate::document::plain_text;
use crate::layout::font::FontMetrics;
use unicode_segmentation::UnicodeSegmentation;

/// Estimates how many lines a block wraps to at a given width.
///
/// Words are filled greedily into lines of `chars_per_line` characters. Glyph
/// widths, inline markup and hyphenation are not modelled.
#[derive(Debug, Clone, Default)]
pub struct LineBreaker {
    metrics: FontMetrics,
}

impl LineBreaker {
    pub fn new(metrics: FontMetrics) -> Self {
        Self { metrics }
    }

    /// Count the rendered lines of `html` in a container `width` pixels wide
    pub fn count_lines(&self, html: &str, width: f32) -> usize {
        let text = plain_text(html);
        let text = text.trim();
        if text.is_empty() {
            return 0;
        }

        let chars_per_line = self.metrics.chars_per_line(width);
        let mut lines = 0usize;
        let mut line_chars: i64 = 0;

        for word in text.split_whitespace() {
            let word_len = word.graphemes(true).count() as i64;
            // +1 for the separating space
            if line_chars + word_len + 1 <= chars_per_line {
                line_chars += word_len + 1;
            } else {
                lines += 1;
                line_chars = word_len;
            }
        }

        if line_chars > 0 {
            lines += 1;
        }

        lines
    }
}
