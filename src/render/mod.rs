//! Rendering module for converting structured resumes to output formats.

mod contact;
mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use contact::ContactKind;
pub use json::{to_json, to_json_value, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{DocumentStats, RenderResult};
pub use text::to_text;
