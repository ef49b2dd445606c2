//! Seeking within paginated output and the two-page spread mapping

use rustc_hash::FxHashMap;

use crate::render::PageRecord;

/// Spread shown when resuming at the given source page (two pages per spread)
pub fn spread_for_source_page(last_read_page: usize) -> usize {
    last_read_page / 2
}

/// Source page to record as read once the reader lands on a spread
pub fn source_page_for_spread(spread_index: usize) -> usize {
    spread_index * 2 + 1
}

/// Lookup from source identities to the first page record holding them
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    by_source_page: FxHashMap<String, usize>,
    by_content: FxHashMap<String, usize>,
    page_count: usize,
}

impl PageIndex {
    pub fn new(records: &[PageRecord]) -> Self {
        let mut by_source_page = FxHashMap::default();
        let mut by_content = FxHashMap::default();

        for record in records {
            for item in &record.content {
                if let Some(page_uuid) = &item.page_uuid {
                    by_source_page
                        .entry(page_uuid.clone())
                        .or_insert(record.number);
                }
                by_content.entry(item.uuid.clone()).or_insert(record.number);
            }
        }

        Self {
            by_source_page,
            by_content,
            page_count: records.len(),
        }
    }

    /// First page number showing content from the given source page
    pub fn page_for_source_page(&self, page_uuid: &str) -> Option<usize> {
        self.by_source_page.get(page_uuid).copied()
    }

    /// First page number showing the given content item
    pub fn page_for_content(&self, content_uuid: &str) -> Option<usize> {
        self.by_content.get(content_uuid).copied()
    }

    /// "X of Y" progress label, `None` for a number outside `1..=page_count`
    pub fn label(&self, number: usize) -> Option<String> {
        if number == 0 || number > self.page_count {
            return None;
        }
        Some(format!("{} of {}", number, self.page_count))
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::materialize;

    fn records() -> Vec<PageRecord> {
        materialize(vec![
            vec![r#"<p data-uuid="c1" data-page-uuid="s1">a</p>"#.to_string()],
            vec![
                r#"<p data-uuid="c2" data-page-uuid="s1">b</p>"#.to_string(),
                r#"<p data-uuid="c3" data-page-uuid="s2">c</p>"#.to_string(),
            ],
            vec![r#"<p data-uuid="c3" data-page-uuid="s2">c continued</p>"#.to_string()],
        ])
    }

    #[test]
    fn test_spread_mapping() {
        assert_eq!(spread_for_source_page(0), 0);
        assert_eq!(spread_for_source_page(1), 0);
        assert_eq!(spread_for_source_page(5), 2);
        assert_eq!(source_page_for_spread(0), 1);
        assert_eq!(source_page_for_spread(2), 5);
    }

    #[test]
    fn test_first_page_wins() {
        let index = PageIndex::new(&records());
        assert_eq!(index.page_count(), 3);
        assert_eq!(index.page_for_source_page("s1"), Some(1));
        assert_eq!(index.page_for_source_page("s2"), Some(2));
        assert_eq!(index.page_for_content("c3"), Some(2));
        assert_eq!(index.page_for_content("missing"), None);
    }

    #[test]
    fn test_label() {
        let index = PageIndex::new(&records());
        assert_eq!(index.label(1).as_deref(), Some("1 of 3"));
        assert_eq!(index.label(3).as_deref(), Some("3 of 3"));
        assert_eq!(index.label(0), None);
        assert_eq!(index.label(4), None);
    }

    #[test]
    fn test_empty_index() {
        let index = PageIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.page_for_source_page("s1"), None);
    }
}
