//! Rendering options and configuration.

/// Options for rendering a structured resume.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Character to use for bullet markers
    pub list_marker: char,

    /// Prefix contact lines with their inferred kind (text output only)
    pub label_contacts: bool,

    /// Emit sections that have no content items
    pub include_empty_sections: bool,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable contact labels.
    pub fn with_contact_labels(mut self, label: bool) -> Self {
        self.label_contacts = label;
        self
    }

    /// Enable or disable output of empty sections.
    pub fn with_empty_sections(mut self, include: bool) -> Self {
        self.include_empty_sections = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_marker: '-',
            label_contacts: false,
            include_empty_sections: true,
            collect_stats: false,
        }
    }
}
