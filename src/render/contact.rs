//! Contact line tagging for renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::classify::looks_like_phone;

/// Inferred kind of a contact line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Link,
    Location,
}

impl ContactKind {
    /// Guess the kind of a contact line; anything unrecognized is a location.
    pub fn classify(line: &str) -> Self {
        if line.contains('@') {
            return ContactKind::Email;
        }
        if looks_like_phone(line) {
            return ContactKind::Phone;
        }
        let lower = line.to_lowercase();
        if lower.contains("http") || lower.contains("www.") || lower.contains(".com") {
            ContactKind::Link
        } else {
            ContactKind::Location
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Link => "Link",
            ContactKind::Location => "Location",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
