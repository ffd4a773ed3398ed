//! # resumark
//!
//! Structure freeform resume markdown into a typed document model.
//!
//! A resume is read top to bottom in a single pass. Lines before the first
//! `##` heading form the header region and become the name, role, contact
//! lines, and summary. Every `##` heading opens a section whose lines are
//! sorted into sub-headings/entry rows, bullets, and prose.
//!
//! ## Quick Start
//!
//! ```
//! use resumark::{structure, ContentItem};
//!
//! let doc = structure("# Jane Doe\njane@x.com\nSenior Analyst\n## Experience\n- Did X");
//! assert_eq!(doc.name, "Jane Doe");
//! assert_eq!(doc.role, "Senior Analyst");
//! assert_eq!(doc.sections[0].content, vec![ContentItem::bullet("Did X")]);
//! ```
//!
//! ## Features
//!
//! - **Total parsing**: malformed markdown is absorbed, never rejected
//! - **Strict mode**: opt-in validation with line-level diagnostics
//! - **Multiple output formats**: canonical Markdown, plain text, JSON
//! - **Batch processing**: structure many resumes in parallel with Rayon

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{Error, Result};
pub use model::{ContentItem, ParsedDocument, Section};
pub use parser::{
    structure, validate, Diagnostic, DiagnosticKind, ErrorMode, ParseOptions, Severity,
    StructureOutcome, Structurer,
};
pub use render::{ContactKind, DocumentStats, JsonFormat, RenderOptions, RenderResult};

use std::io::Read;
use std::path::Path;

/// Structure resume text with custom options.
///
/// # Example
///
/// ```
/// use resumark::{structure_with_options, ParseOptions};
///
/// let result = structure_with_options("- orphan\n## Skills", &ParseOptions::new().strict());
/// assert!(result.is_err());
/// ```
pub fn structure_with_options(raw: &str, options: &ParseOptions) -> Result<ParsedDocument> {
    Structurer::new(options.clone()).structure(raw)
}

/// Read a UTF-8 file and structure it.
///
/// # Example
///
/// ```no_run
/// let doc = resumark::structure_file("resume.md").unwrap();
/// println!("{} sections", doc.section_count());
/// ```
pub fn structure_file<P: AsRef<Path>>(path: P) -> Result<ParsedDocument> {
    structure_file_with_options(path, &ParseOptions::default())
}

/// Read a UTF-8 file and structure it with custom options.
pub fn structure_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<ParsedDocument> {
    let bytes = std::fs::read(path.as_ref())?;
    let raw = String::from_utf8(bytes)?;
    structure_with_options(&raw, options)
}

/// Read UTF-8 text from a reader and structure it.
pub fn structure_reader<R: Read>(mut reader: R) -> Result<ParsedDocument> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let raw = String::from_utf8(bytes)?;
    Ok(structure(&raw))
}

/// Structure many resumes in parallel, preserving input order.
pub fn structure_many<S>(inputs: &[S]) -> Vec<ParsedDocument>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    inputs.par_iter().map(|raw| structure(raw.as_ref())).collect()
}

/// Convert resume text to canonical Markdown.
pub fn to_markdown(raw: &str) -> Result<String> {
    render::to_markdown(&structure(raw), &RenderOptions::default())
}

/// Convert resume text to JSON.
pub fn to_json(raw: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&structure(raw), format)
}

/// Builder for structuring and rendering resumes.
///
/// # Example
///
/// ```
/// use resumark::Resumark;
///
/// let markdown = Resumark::new()
///     .strict()
///     .with_list_marker('*')
///     .structure("# Jane\n## Skills\n- Rust")?
///     .to_markdown()?;
/// assert!(markdown.contains("* Rust"));
/// # Ok::<(), resumark::Error>(())
/// ```
pub struct Resumark {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Resumark {
    /// Create a new Resumark builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Reject orphan bullets, orphan sub-headings, and repeated titles.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Normalize input before structuring.
    pub fn normalize_unicode(mut self) -> Self {
        self.parse_options = self.parse_options.with_normalization(true);
        self
    }

    /// Set the bullet marker for rendered output.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Label contact lines by kind in text output.
    pub fn with_contact_labels(mut self) -> Self {
        self.render_options = self.render_options.with_contact_labels(true);
        self
    }

    /// Leave sections without content out of rendered output.
    pub fn skip_empty_sections(mut self) -> Self {
        self.render_options = self.render_options.with_empty_sections(false);
        self
    }

    /// Structure resume text and return a result wrapper.
    pub fn structure(self, raw: &str) -> Result<ResumarkResult> {
        let document = structure_with_options(raw, &self.parse_options)?;
        Ok(ResumarkResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Structure a resume file.
    pub fn structure_file<P: AsRef<Path>>(self, path: P) -> Result<ResumarkResult> {
        let document = structure_file_with_options(path, &self.parse_options)?;
        Ok(ResumarkResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Resumark {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of structuring a resume.
pub struct ResumarkResult {
    /// The structured document
    pub document: ParsedDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl ResumarkResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to Markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &ParsedDocument {
        &self.document
    }
}
