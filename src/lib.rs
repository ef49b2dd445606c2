//! flip-pager: pagination of rich-text book chapters for page-flip readers
//!
//! The pipeline is pure and synchronous:
//! - Extraction of paragraph, image and video blocks from chapter HTML
//! - Line estimation with a fixed-width character model
//! - Greedy page packing, splitting paragraphs that overflow a page
//! - Materialization into page records with stable content identities

pub mod config;
pub mod document;
pub mod error;
pub mod layout;
pub mod marks;
pub mod navigation;
pub mod render;
pub mod wasm;

use serde::{Deserialize, Serialize};

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use config::PaginationConfig;
pub use document::{chapter_html, extract_blocks, BlockKind, ContentBlock, SourceContent, SourcePage};
pub use error::{PaginationError, Result};
pub use layout::{FontMetrics, LineBreaker, PagePacker, RawPage, TextSplit, TextSplitter};
pub use marks::{Mark, TextRange};
pub use navigation::PageIndex;
pub use render::{materialize, materialize_with, ContentItem, IdSource, PageRecord, RandomIds};

/// Size of the page container in device-independent pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Negative or non-finite sizes are rejected; zero is allowed
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(PaginationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Chapter paginator bound to one config.
///
/// Holds no per-run state, so one instance can serve any number of
/// containers and threads.
#[derive(Debug, Clone)]
pub struct Paginator {
    config: PaginationConfig,
    breaker: LineBreaker,
}

impl Default for Paginator {
    fn default() -> Self {
        let config = PaginationConfig::default();
        let breaker = LineBreaker::new(config.font.clone());
        Self { config, breaker }
    }
}

impl Paginator {
    /// Create a paginator, validating the config
    pub fn new(config: PaginationConfig) -> Result<Self> {
        config.validate()?;
        let breaker = LineBreaker::new(config.font.clone());
        Ok(Self { config, breaker })
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Lines a page of this container can hold
    pub fn max_lines(&self, dimensions: Dimensions) -> usize {
        self.config.max_lines(dimensions.height)
    }

    /// Estimated line count of one block
    pub fn count_lines(&self, block: &str, width: f32) -> usize {
        self.breaker.count_lines(block, width)
    }

    /// Pack chapter HTML into raw pages of block markup
    pub fn break_into_pages(&self, html: &str, dimensions: Dimensions) -> Result<Vec<RawPage>> {
        dimensions.validate()?;

        let blocks = extract_blocks(html);
        let block_count = blocks.len();
        let pages = PagePacker::new(&self.config, &self.breaker, dimensions.width, dimensions.height)
            .pack(blocks)?;

        tracing::debug!(
            blocks = block_count,
            pages = pages.len(),
            width = dimensions.width,
            height = dimensions.height,
            "paginated chapter"
        );
        Ok(pages)
    }

    /// Paginate chapter HTML into page records
    pub fn paginate(&self, html: &str, dimensions: Dimensions) -> Result<Vec<PageRecord>> {
        let pages = self.break_into_pages(html, dimensions)?;
        Ok(materialize(pages))
    }

    /// Paginate with caller-supplied ids, for reproducible output
    pub fn paginate_with(
        &self,
        html: &str,
        dimensions: Dimensions,
        ids: &mut impl IdSource,
    ) -> Result<Vec<PageRecord>> {
        let pages = self.break_into_pages(html, dimensions)?;
        Ok(materialize_with(pages, ids))
    }
}

/// Paginate chapter HTML with the default config
pub fn paginate(html: &str, dimensions: Dimensions) -> Result<Vec<PageRecord>> {
    Paginator::default().paginate(html, dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{paragraph_parts, plain_text};

    fn lorem(n: usize) -> String {
        (0..n).map(|i| format!("lorem{}", i % 10)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_single_short_paragraph() {
        let html = r#"<p data-uuid="a1" data-page-uuid="p1">short text</p>"#;
        let records = paginate(html, Dimensions::new(300.0, 48.0)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, 1);
        assert_eq!(records[0].content.len(), 1);
        assert_eq!(records[0].content[0].uuid, "a1");
        assert_eq!(records[0].content[0].page_uuid.as_deref(), Some("p1"));
        assert_eq!(records[0].content[0].content, "<p>short text</p>");
    }

    #[test]
    fn test_long_paragraph_is_split_across_pages() {
        let html = format!(r#"<p data-uuid="long" data-page-uuid="p1">{}</p>"#, lorem(200));
        let records = paginate(&html, Dimensions::new(100.0, 48.0)).unwrap();

        assert!(records.len() >= 2);
        let mut rejoined = Vec::new();
        for record in &records {
            assert_eq!(record.content.len(), 1);
            let item = &record.content[0];
            assert_eq!(item.uuid, "long");
            let (_, inner) = paragraph_parts(&item.content).expect("fragment wrapped in <p>");
            rejoined.push(inner.to_string());
        }
        assert_eq!(rejoined.join(" "), lorem(200));
    }

    #[test]
    fn test_image_then_paragraph() {
        let paginator = Paginator::default();
        let html = r#"<img src="cover.png"><p data-uuid="t" data-page-uuid="p">caption text</p>"#;

        // 9 lines: image costs 7 + 1, the paragraph's single line still fits
        let roomy = paginator.paginate(html, Dimensions::new(300.0, 216.0)).unwrap();
        assert_eq!(roomy.len(), 1);
        assert_eq!(roomy[0].content.len(), 2);

        // 8 lines: nothing is left after the image
        let tight = paginator.paginate(html, Dimensions::new(300.0, 192.0)).unwrap();
        assert_eq!(tight.len(), 2);
        assert_eq!(tight[0].content.len(), 1);
        assert!(tight[0].content[0].content.starts_with("<img"));
        assert_eq!(tight[1].content[0].uuid, "t");
    }

    #[test]
    fn test_empty_input() {
        let records = paginate("", Dimensions::new(300.0, 600.0)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_paragraphs_are_ignored() {
        let html = r#"<p data-uuid="a" data-page-uuid="p">one</p><p></p><p data-uuid="b" data-page-uuid="p">two</p><p></p>"#;
        let records = paginate(html, Dimensions::new(300.0, 600.0)).unwrap();
        assert_eq!(records.len(), 1);
        let ids: Vec<_> = records[0].content.iter().map(|c| c.uuid.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_negative_dimensions_are_rejected() {
        let err = paginate("<p>x</p>", Dimensions::new(-1.0, 100.0)).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidDimensions { .. }));
        assert!(paginate("<p>x</p>", Dimensions::new(100.0, f32::NAN)).is_err());
    }

    #[test]
    fn test_zero_height_gives_no_pages() {
        let records = paginate("<p>x</p>", Dimensions::new(300.0, 0.0)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_pages_are_never_empty_and_numbered_in_order() {
        let paginator = Paginator::default();
        let mut html = String::new();
        for i in 0..30 {
            html.push_str(&format!(
                r#"<p data-uuid="c{i}" data-page-uuid="s{}">{}</p>"#,
                i / 5,
                lorem(i * 7 % 60 + 1)
            ));
            if i % 4 == 0 {
                html.push_str(r#"<img src="fig.png">"#);
            }
        }

        for height in [24.0, 48.0, 100.0, 240.0, 600.0] {
            let records = paginator.paginate(&html, Dimensions::new(280.0, height)).unwrap();
            for (i, record) in records.iter().enumerate() {
                assert!(!record.content.is_empty());
                assert_eq!(record.number, i + 1);
            }
        }
    }

    #[test]
    fn test_every_word_survives_pagination() {
        let paginator = Paginator::default();
        let html: String = (0..12)
            .map(|i| format!(r#"<p data-uuid="c{i}" data-page-uuid="s">{}</p>"#, lorem(i * 9 + 3)))
            .collect();
        let expected: Vec<String> = extract_blocks(&html)
            .iter()
            .flat_map(|b| {
                plain_text(&b.html)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();

        let records = paginator.paginate(&html, Dimensions::new(200.0, 120.0)).unwrap();
        let actual: Vec<String> = records
            .iter()
            .flat_map(|r| r.content.iter())
            .flat_map(|item| {
                plain_text(&item.content)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_pages_respect_line_budget() {
        let paginator = Paginator::default();
        let config = paginator.config();
        let dims = Dimensions::new(300.0, 240.0);
        let max_lines = paginator.max_lines(dims);
        // unique words, so a split fragment never equals a source block
        let html: String = (0..20)
            .map(|i| {
                let words: Vec<String> = (0..i % 6 * 5 + 1).map(|j| format!("p{}w{}", i, j)).collect();
                format!("<p>{}</p>", words.join(" "))
            })
            .collect();
        let sources: Vec<String> = extract_blocks(&html).into_iter().map(|b| b.html).collect();

        let pages = paginator.break_into_pages(&html, dims).unwrap();
        assert!(pages.len() > 1);
        for page in &pages {
            let lines: usize = page.iter().map(|b| paginator.count_lines(b, dims.width)).sum();
            assert!(lines <= max_lines, "page {:?} over budget", page);

            // pages of whole blocks also fit the spacing between them
            if page.iter().all(|b| sources.contains(b)) {
                let spacing = config.after_text_lines * (page.len() - 1);
                assert!(lines + spacing <= max_lines, "page {:?} over budget", page);
            }
        }
    }

    #[test]
    fn test_repeated_runs_are_stable_apart_from_fresh_ids() {
        let html = format!(
            r#"<p data-uuid="a" data-page-uuid="p">{}</p><p>no identity</p>"#,
            lorem(40)
        );
        let dims = Dimensions::new(200.0, 96.0);
        let first = paginate(&html, dims).unwrap();
        let second = paginate(&html, dims).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_ne!(a.uuid, b.uuid);
            assert_eq!(a.full_content, b.full_content);
            for (x, y) in a.content.iter().zip(&b.content) {
                assert_eq!(x.content, y.content);
                if x.page_uuid.is_some() {
                    assert_eq!(x.uuid, y.uuid);
                } else {
                    assert_ne!(x.uuid, y.uuid);
                }
            }
        }
    }

    #[test]
    fn test_paginate_with_custom_config() {
        let config = PaginationConfig {
            line_height: 12.0,
            ..PaginationConfig::default()
        };
        let paginator = Paginator::new(config).unwrap();
        assert_eq!(paginator.max_lines(Dimensions::new(300.0, 48.0)), 4);
        assert!(Paginator::new(PaginationConfig {
            line_height: -1.0,
            ..PaginationConfig::default()
        })
        .is_err());
    }
}
