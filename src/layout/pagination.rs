//! Greedy packing of blocks into fixed-height pages

use smallvec::SmallVec;

use crate::config::PaginationConfig;
use crate::document::{wrap_paragraph_if_needed, ContentBlock};
use crate::error::{PaginationError, Result};
use crate::layout::line_break::LineBreaker;
use crate::layout::split::TextSplitter;

/// Raw block markup assigned to one page, in reading order
pub type RawPage = Vec<String>;

/// Packs blocks into pages under a line budget.
///
/// Text blocks cost their estimated lines plus `after_text_lines`; media
/// blocks cost a flat `media_lines` plus `after_media_lines`. Text that does
/// not fit is split at a word boundary and continued on the next page.
pub struct PagePacker<'a> {
    config: &'a PaginationConfig,
    breaker: &'a LineBreaker,
    width: f32,
    max_lines: usize,
    media_lines: usize,
    current: SmallVec<[String; 8]>,
    current_lines: usize,
    pages: Vec<RawPage>,
}

impl<'a> PagePacker<'a> {
    pub fn new(
        config: &'a PaginationConfig,
        breaker: &'a LineBreaker,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            config,
            breaker,
            width,
            max_lines: config.max_lines(height),
            media_lines: config.media_lines(),
            current: SmallVec::new(),
            current_lines: 0,
            pages: Vec::new(),
        }
    }

    /// Pack `blocks` in order and return the finished pages
    pub fn pack<I>(mut self, blocks: I) -> Result<Vec<RawPage>>
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        if self.max_lines == 0 {
            tracing::debug!(width = self.width, "container shorter than one line, no pages");
            return Ok(Vec::new());
        }

        for block in blocks {
            self.push_block(block)?;
        }
        self.flush();

        Ok(self.pages)
    }

    fn push_block(&mut self, block: ContentBlock) -> Result<()> {
        if block.is_media() {
            self.push_media(block.html);
            return Ok(());
        }

        let block_lines = self.breaker.count_lines(&block.html, self.width);
        if block_lines > self.max_lines {
            self.push_oversized(block.html)
        } else {
            self.push_text(block.html, block_lines);
            Ok(())
        }
    }

    fn push_media(&mut self, html: String) {
        let cost = self.media_lines + self.config.after_media_lines;
        if self.current_lines + cost > self.max_lines {
            self.flush();
            self.current.push(html);
            self.current_lines = self.media_lines;
        } else {
            self.current.push(html);
            self.current_lines += cost;
        }
    }

    /// A block taller than a whole page: fill the rest of this page, then
    /// whole pages, until nothing is left.
    ///
    /// Every iteration either places at least one word or closes a page, so
    /// the loop is bounded by twice the block's word count.
    fn push_oversized(&mut self, html: String) -> Result<()> {
        let bound = 2 * html.split_whitespace().count() + 2;
        let limit = self
            .config
            .max_split_iterations
            .map_or(bound, |cap| cap.min(bound));
        let mut pending = html;
        let mut iterations = 0;

        while !pending.is_empty() {
            iterations += 1;
            if iterations > limit {
                tracing::warn!(limit, max_lines = self.max_lines, "split loop did not converge");
                return Err(PaginationError::SplitLimitExceeded { limit });
            }

            let remaining = self.remaining_lines();
            if remaining == 0 {
                self.flush();
                continue;
            }

            let splitter = TextSplitter::new(self.breaker, self.width);
            let mut split = splitter.split(&pending, remaining);
            if split.head.is_empty() {
                if !self.current.is_empty() {
                    self.flush();
                    continue;
                }
                split = splitter.split_first_word(&pending);
            }

            self.current.push(wrap_paragraph_if_needed(&split.head));
            self.current_lines += remaining;
            self.flush();
            pending = split.tail;
        }

        tracing::trace!(iterations, "placed oversized block");
        Ok(())
    }

    fn push_text(&mut self, html: String, block_lines: usize) {
        let cost = block_lines + self.config.after_text_lines;
        if self.current_lines + cost <= self.max_lines {
            self.current.push(html);
            self.current_lines += cost;
            return;
        }

        let remaining = self.remaining_lines();
        if remaining > 0 {
            let split = TextSplitter::new(self.breaker, self.width).split(&html, remaining);
            if !split.head.is_empty() {
                self.current.push(wrap_paragraph_if_needed(&split.head));
                self.current_lines += remaining;
                self.flush();

                if !split.is_complete() {
                    let tail = wrap_paragraph_if_needed(&split.tail);
                    self.current_lines = self.breaker.count_lines(&tail, self.width);
                    self.current.push(tail);
                }
                return;
            }
        }

        self.flush();
        self.current.push(html);
        self.current_lines = cost;
    }

    fn remaining_lines(&self) -> usize {
        self.max_lines.saturating_sub(self.current_lines)
    }

    /// Close the current page. Empty pages are never emitted.
    fn flush(&mut self) {
        if self.current.is_empty() {
            tracing::trace!(page = self.pages.len() + 1, "skipped empty page");
        } else {
            self.pages.push(std::mem::take(&mut self.current).into_vec());
        }
        self.current_lines = 0;
    }
}
