//! Section-level types.

use serde::{Deserialize, Serialize};

/// A block of the resume introduced by a second-level heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text
    pub title: String,

    /// Items in encounter order
    pub content: Vec<ContentItem>,
}

impl Section {
    /// Create a new empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
        }
    }

    /// Append an item.
    pub fn push(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    /// Check if the section has no items.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Iterate over bullet texts only.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(|item| match item {
            ContentItem::Bullet { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.content.len() + 1);
        lines.push(self.title.clone());
        lines.extend(self.content.iter().map(|item| item.text().to_string()));
        lines.join("\n")
    }
}

/// A single line of section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// Sub-heading or compact entry row ("Title | Company | Dates")
    Sub { text: String },

    /// Bulleted list entry
    Bullet { text: String },

    /// Any other prose line
    Text { text: String },
}

impl ContentItem {
    /// Create a sub-heading item.
    pub fn sub(text: impl Into<String>) -> Self {
        ContentItem::Sub { text: text.into() }
    }

    /// Create a bullet item.
    pub fn bullet(text: impl Into<String>) -> Self {
        ContentItem::Bullet { text: text.into() }
    }

    /// Create a prose item.
    pub fn text_item(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    /// The item's text regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            ContentItem::Sub { text } | ContentItem::Bullet { text } | ContentItem::Text { text } => {
                text
            }
        }
    }

    /// Short tag used in JSON and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentItem::Sub { .. } => "sub",
            ContentItem::Bullet { .. } => "bullet",
            ContentItem::Text { .. } => "text",
        }
    }
}
