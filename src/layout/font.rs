//! Font metrics for line estimation

use serde::{Deserialize, Serialize};

/// Body text size in logical pixels
pub const FONT_SIZE: f32 = 14.0;

/// Average glyph advance as a fraction of the font size
pub const CHAR_WIDTH_RATIO: f32 = 0.425555555;

/// Characters withheld from every line for padding and kerning
pub const CHAR_SAFETY_MARGIN: i64 = 8;

/// Fixed-width approximation of the reader's body font.
///
/// No shaping is done: every grapheme is assumed to advance by
/// `font_size * char_width_ratio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontMetrics {
    pub font_size: f32,
    pub char_width_ratio: f32,
    pub char_safety_margin: i64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE,
            char_width_ratio: CHAR_WIDTH_RATIO,
            char_safety_margin: CHAR_SAFETY_MARGIN,
        }
    }
}

impl FontMetrics {
    pub fn new(font_size: f32, char_width_ratio: f32, char_safety_margin: i64) -> Self {
        Self {
            font_size,
            char_width_ratio,
            char_safety_margin,
        }
    }

    /// Average width of one character in pixels
    pub fn char_width(&self) -> f32 {
        self.font_size * self.char_width_ratio
    }

    /// Characters that fit on one line of the given width.
    ///
    /// Can be zero or negative for narrow containers; the line breaker then
    /// puts every word on a line of its own.
    pub fn chars_per_line(&self, width: f32) -> i64 {
        (width / self.char_width()).floor() as i64 - self.char_safety_margin
    }
}
