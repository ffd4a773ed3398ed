//! Markdown rendering for structured resumes.
//!
//! The output is canonical: structuring it again yields the same document
//! for any resume whose header prose does not itself look like a role.

use crate::error::Result;
use crate::model::{ContentItem, ParsedDocument, Section};

use super::{DocumentStats, RenderOptions, RenderResult};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &ParsedDocument, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &ParsedDocument, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: DocumentStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: DocumentStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &ParsedDocument) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &ParsedDocument) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);

        self.stats.count_text(&content);

        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &ParsedDocument) -> String {
        let mut output = String::new();

        self.render_header(&mut output, doc);

        for section in &doc.sections {
            if section.is_empty() && !self.options.include_empty_sections {
                continue;
            }
            self.render_section(&mut output, section);
        }

        output.trim().to_string()
    }

    fn render_header(&mut self, output: &mut String, doc: &ParsedDocument) {
        if !doc.name.is_empty() {
            output.push_str("# ");
            output.push_str(&doc.name);
            output.push_str("\n\n");
        }

        if !doc.role.is_empty() {
            output.push_str(&doc.role);
            output.push_str("\n\n");
        }

        if !doc.contact.is_empty() {
            if self.options.collect_stats {
                self.stats.contact_count += doc.contact.len() as u32;
            }
            for line in &doc.contact {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }

        if !doc.summary.is_empty() {
            output.push_str(&doc.summary);
            output.push_str("\n\n");
        }
    }

    fn render_section(&mut self, output: &mut String, section: &Section) {
        if self.options.collect_stats {
            self.stats.add_section();
        }

        output.push_str("## ");
        output.push_str(&section.title);
        output.push_str("\n\n");

        for item in &section.content {
            if self.options.collect_stats {
                self.stats.add_item(item);
            }
            match item {
                ContentItem::Sub { text } => {
                    output.push_str("### ");
                    output.push_str(text);
                }
                ContentItem::Bullet { text } => {
                    output.push(self.options.list_marker);
                    output.push(' ');
                    output.push_str(text);
                }
                ContentItem::Text { text } => output.push_str(text),
            }
            output.push('\n');
        }
        output.push('\n');
    }
}
