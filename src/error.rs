//! Error types for pagination

use thiserror::Error;

/// Faults the pipeline refuses to degrade around.
///
/// Malformed markup and missing identity attributes are not errors: the
/// extractor drops what it cannot match and the materializer synthesizes ids.
#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("invalid container dimensions {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("oversized block still unplaced after {limit} split iterations")]
    SplitLimitExceeded { limit: usize },

    #[error("invalid pagination config: {0}")]
    InvalidConfig(String),

    #[error("text range {start}..{end} is not valid for content of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaginationError>;
