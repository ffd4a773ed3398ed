//! Plain text rendering for structured resumes.

use crate::error::Result;
use crate::model::{ContentItem, ParsedDocument};

use super::{ContactKind, RenderOptions};

/// Convert a document to plain text.
///
/// Section titles are uppercased; bullets keep the configured marker
/// indented by two spaces.
pub fn to_text(doc: &ParsedDocument, options: &RenderOptions) -> Result<String> {
    let mut blocks: Vec<String> = Vec::new();

    let header: Vec<&str> = [doc.name.as_str(), doc.role.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !header.is_empty() {
        blocks.push(header.join("\n"));
    }

    if !doc.contact.is_empty() {
        let lines: Vec<String> = doc
            .contact
            .iter()
            .map(|line| {
                if options.label_contacts {
                    format!("{}: {}", ContactKind::classify(line), line)
                } else {
                    line.clone()
                }
            })
            .collect();
        blocks.push(lines.join("\n"));
    }

    if !doc.summary.is_empty() {
        blocks.push(doc.summary.clone());
    }

    for section in &doc.sections {
        if section.is_empty() && !options.include_empty_sections {
            continue;
        }
        let mut lines = vec![section.title.to_uppercase()];
        for item in &section.content {
            lines.push(match item {
                ContentItem::Bullet { text } => format!("  {} {}", options.list_marker, text),
                ContentItem::Sub { text } | ContentItem::Text { text } => text.clone(),
            });
        }
        blocks.push(lines.join("\n"));
    }

    Ok(blocks.join("\n\n"))
}
