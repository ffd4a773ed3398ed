//! Resume structuring module.

pub mod classify;
mod diagnostic;
mod normalize;
mod options;
mod structurer;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use normalize::normalize_input;
pub use options::{ErrorMode, ParseOptions};
pub use structurer::{structure, validate, StructureOutcome, Structurer};
