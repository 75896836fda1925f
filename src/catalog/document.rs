use crate::types::ContentItem;
use serde::{Deserialize, Serialize};

/// A catalog entry: the ranker's view of a post plus display metadata.
///
/// On disk the item fields sit at the top level next to `title` and `href`;
/// unknown fields (body text, author, ...) are ignored.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(flatten)]
    pub item: ContentItem,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}

impl Document {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Title if present, id otherwise.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.item.id)
    }
}

impl From<ContentItem> for Document {
    fn from(item: ContentItem) -> Self {
        Document {
            item,
            title: None,
            href: None,
        }
    }
}
