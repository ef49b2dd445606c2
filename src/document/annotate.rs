//! Building chapter HTML from paged source content

use serde::{Deserialize, Serialize};

/// One content item of a source chapter page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceContent {
    pub uuid: String,
    pub content: String,
}

/// A chapter page as delivered by the content API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePage {
    pub uuid: String,
    #[serde(default)]
    pub content: Vec<SourceContent>,
}

/// Concatenate source pages into one annotated HTML string.
///
/// Items starting with a bare `<p>` get `data-uuid` (the item) and
/// `data-page-uuid` (the page) injected into every bare `<p>` they contain, so
/// pagination can trace each block back to where it came from. Other items are
/// copied unchanged.
pub fn chapter_html(pages: &[SourcePage]) -> String {
    let mut html = String::new();
    for page in pages {
        for item in &page.content {
            if item.content.starts_with("<p>") {
                let open = format!(
                    r#"<p data-uuid="{}" data-page-uuid="{}">"#,
                    item.uuid, page.uuid
                );
                html.push_str(&item.content.replace("<p>", &open));
            } else {
                html.push_str(&item.content);
            }
        }
    }
    html
}
