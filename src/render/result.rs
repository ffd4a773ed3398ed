//! Rendering result with statistics.

use crate::model::{ContentItem, ParsedDocument};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Document statistics
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: DocumentStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counts of what a structured resume contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of sections
    pub section_count: u32,

    /// Number of sub-heading/row items
    pub sub_count: u32,

    /// Number of bullet items
    pub bullet_count: u32,

    /// Number of prose items
    pub text_count: u32,

    /// Number of contact lines
    pub contact_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count sections, items, and contacts of a document (no text counts).
    pub fn from_document(doc: &ParsedDocument) -> Self {
        let mut stats = Self::new();
        stats.contact_count = doc.contact.len() as u32;
        for section in &doc.sections {
            stats.add_section();
            for item in &section.content {
                stats.add_item(item);
            }
        }
        stats
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment the counter for this item's kind.
    pub fn add_item(&mut self, item: &ContentItem) {
        match item {
            ContentItem::Sub { .. } => self.sub_count += 1,
            ContentItem::Bullet { .. } => self.bullet_count += 1,
            ContentItem::Text { .. } => self.text_count += 1,
        }
    }

    /// Total number of content items.
    pub fn item_count(&self) -> u32 {
        self.sub_count + self.bullet_count + self.text_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DocumentStats) {
        self.section_count += other.section_count;
        self.sub_count += other.sub_count;
        self.bullet_count += other.bullet_count;
        self.text_count += other.text_count;
        self.contact_count += other.contact_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
