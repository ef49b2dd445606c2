//! Pagination constants, overridable from JSON

use serde::{Deserialize, Serialize};

use crate::error::{PaginationError, Result};
use crate::layout::FontMetrics;

/// Height of one rendered text line in pixels
pub const LINE_HEIGHT: f32 = 24.0;

/// Height reserved for an image or video block (165 frame + 16 caption + 10 gap)
pub const MEDIA_HEIGHT: f32 = 191.0;

/// Spacing lines charged after a text block
pub const AFTER_TEXT_LINES: usize = 2;

/// Spacing lines charged after a media block
pub const AFTER_MEDIA_LINES: usize = 1;

/// Tunables for the line-budget model.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationConfig {
    pub line_height: f32,
    pub media_height: f32,
    #[serde(flatten)]
    pub font: FontMetrics,
    pub after_text_lines: usize,
    pub after_media_lines: usize,
    /// Optional hard cap on iterations while placing one oversized block.
    /// The packer already bounds the loop by the block's word count.
    pub max_split_iterations: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            line_height: LINE_HEIGHT,
            media_height: MEDIA_HEIGHT,
            font: FontMetrics::default(),
            after_text_lines: AFTER_TEXT_LINES,
            after_media_lines: AFTER_MEDIA_LINES,
            max_split_iterations: None,
        }
    }
}

impl PaginationConfig {
    /// Parse a config from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the line model meaningless
    pub fn validate(&self) -> Result<()> {
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(PaginationError::InvalidConfig(format!(
                "lineHeight must be positive, got {}",
                self.line_height
            )));
        }
        if !(self.media_height.is_finite() && self.media_height >= 0.0) {
            return Err(PaginationError::InvalidConfig(format!(
                "mediaHeight must not be negative, got {}",
                self.media_height
            )));
        }
        if self.font.char_width() <= 0.0 || !self.font.char_width().is_finite() {
            return Err(PaginationError::InvalidConfig(format!(
                "fontSize * charWidthRatio must be positive, got {} * {}",
                self.font.font_size, self.font.char_width_ratio
            )));
        }
        if self.max_split_iterations == Some(0) {
            return Err(PaginationError::InvalidConfig(
                "maxSplitIterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Lines available on a page of the given height
    pub fn max_lines(&self, height: f32) -> usize {
        (height / self.line_height).floor().max(0.0) as usize
    }

    /// Fixed line cost of an image or video
    pub fn media_lines(&self) -> usize {
        (self.media_height / self.line_height).floor() as usize
    }
}
