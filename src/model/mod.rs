//! Document model types for structured resume content.
//!
//! The model is what the structurer produces and what every renderer
//! consumes. It carries no source positions and no formatting; a renderer
//! decides how each item kind is laid out.

mod document;
mod section;

pub use document::ParsedDocument;
pub use section::{ContentItem, Section};
