//! Structural findings recorded while structuring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Output is still what a reader would expect
    Warning,
    /// A line was dropped or overwritten
    Error,
}

/// What was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Bullet before the first section; dropped
    OrphanBullet { text: String },
    /// `###` heading before the first section; dropped
    OrphanSubHeading { text: String },
    /// A later `#` heading replaced the name
    RepeatedTitle { previous: String, replacement: String },
    /// No `#` heading anywhere
    MissingName,
    /// Section closed without any content
    EmptySection { title: String },
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::OrphanBullet { .. }
            | DiagnosticKind::OrphanSubHeading { .. }
            | DiagnosticKind::RepeatedTitle { .. } => Severity::Error,
            DiagnosticKind::MissingName | DiagnosticKind::EmptySection { .. } => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::OrphanBullet { text } => {
                write!(f, "bullet before any section: \"{}\"", text)
            }
            DiagnosticKind::OrphanSubHeading { text } => {
                write!(f, "sub-heading before any section: \"{}\"", text)
            }
            DiagnosticKind::RepeatedTitle {
                previous,
                replacement,
            } => write!(
                f,
                "title \"{}\" replaced by \"{}\"",
                previous, replacement
            ),
            DiagnosticKind::MissingName => write!(f, "document has no top-level heading"),
            DiagnosticKind::EmptySection { title } => {
                write!(f, "section \"{}\" has no content", title)
            }
        }
    }
}

/// A finding tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-indexed line, `None` for document-level findings
    pub line: Option<usize>,

    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn at(line: usize, kind: DiagnosticKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    pub fn document(kind: DiagnosticKind) -> Self {
        Self { line: None, kind }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
