//! Document-level types.

use super::{ContentItem, Section};
use serde::{Deserialize, Serialize};

/// A resume split into header fields and titled sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Top-level heading text (empty if none)
    pub name: String,

    /// Title/role line from the header region (empty if none)
    pub role: String,

    /// Contact lines from the header region, in order
    pub contact: Vec<String>,

    /// Remaining header prose, space-joined
    pub summary: String,

    /// Sections in document order
    pub sections: Vec<Section>,
}

impl ParsedDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.role.is_empty()
            && self.contact.is_empty()
            && self.summary.is_empty()
            && self.sections.is_empty()
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Find the first section with the given title (case-insensitive).
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title))
    }

    /// Append a line to the summary, space-separated.
    pub fn push_summary(&mut self, line: &str) {
        if !self.summary.is_empty() {
            self.summary.push(' ');
        }
        self.summary.push_str(line);
    }

    /// Iterate over every content item across all sections.
    pub fn items(&self) -> impl Iterator<Item = &ContentItem> {
        self.sections.iter().flat_map(|s| s.content.iter())
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::new();
        for header in [&self.name, &self.role] {
            if !header.is_empty() {
                parts.push(header.clone());
            }
        }
        parts.extend(self.contact.iter().cloned());
        if !self.summary.is_empty() {
            parts.push(self.summary.clone());
        }
        parts.extend(self.sections.iter().map(|s| s.plain_text()));
        parts.join("\n\n")
    }
}
