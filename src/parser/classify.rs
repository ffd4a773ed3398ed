//! Line classification rules.
//!
//! Every trimmed, non-empty input line falls into exactly one [`LineKind`].
//! Plain lines are then routed by [`classify_header_line`] while the
//! header region is open, or by [`is_entry_row`] inside a section. The
//! rules are ordered; the first match wins and nothing backtracks.

use regex::Regex;
use std::sync::OnceLock;

/// Header lines must be strictly shorter than this to count as a role.
pub const ROLE_MAX_CHARS: usize = 60;

/// Section lines containing `" - "` must be strictly shorter than this to count as a row.
pub const ROW_MAX_CHARS: usize = 80;

/// Optional `+`/`00` prefix, 1-3 digits, then at least 6 digits, spaces, or hyphens.
const PHONE_PATTERN: &str = r"(?:\+|00)?[0-9]{1,3}[0-9\s-]{6,}";

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).unwrap())
}

/// Structural kind of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# ` heading
    Title(&'a str),
    /// `## ` heading
    SectionHeading(&'a str),
    /// `### ` heading
    SubHeading(&'a str),
    /// `- ` or `* ` list entry, marker removed
    Bullet(&'a str),
    /// Anything else
    Plain(&'a str),
}

/// Classify a trimmed line by its leading marker.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix("# ") {
        LineKind::Title(rest.trim_start())
    } else if let Some(rest) = line.strip_prefix("## ") {
        LineKind::SectionHeading(rest.trim_start())
    } else if let Some(rest) = line.strip_prefix("### ") {
        LineKind::SubHeading(rest.trim_start())
    } else if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        LineKind::Bullet(rest)
    } else {
        LineKind::Plain(line)
    }
}

/// Where a plain header-region line belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLine {
    Contact,
    Role,
    Summary,
}

/// Route a plain line seen before the first section.
///
/// `role_taken` is true once a role has been assigned; later role
/// candidates fall through to the summary.
pub fn classify_header_line(line: &str, role_taken: bool) -> HeaderLine {
    if looks_like_contact(line) {
        HeaderLine::Contact
    } else if !role_taken && looks_like_role(line) {
        HeaderLine::Role
    } else {
        HeaderLine::Summary
    }
}

/// Email, phone number, or `.com` address.
pub fn looks_like_contact(line: &str) -> bool {
    line.contains('@') || looks_like_phone(line) || line.to_lowercase().contains(".com")
}

/// Search (not anchored) for a phone-number-like run.
pub fn looks_like_phone(line: &str) -> bool {
    phone_regex().is_match(line)
}

/// Short and free of periods.
pub fn looks_like_role(line: &str) -> bool {
    char_len(line) < ROLE_MAX_CHARS && !line.contains('.')
}

/// A compact entry row such as `Title | Company | Dates` or `Acme - Engineer`.
pub fn is_entry_row(line: &str) -> bool {
    line.contains('|') || (line.contains(" - ") && char_len(line) < ROW_MAX_CHARS)
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_line_markers() {
        assert_eq!(classify_line("# Jane Doe"), LineKind::Title("Jane Doe"));
        assert_eq!(
            classify_line("## Experience"),
            LineKind::SectionHeading("Experience")
        );
        assert_eq!(classify_line("### Acme"), LineKind::SubHeading("Acme"));
        assert_eq!(classify_line("- Did X"), LineKind::Bullet("Did X"));
        assert_eq!(classify_line("* Did Y"), LineKind::Bullet("Did Y"));
        assert_eq!(classify_line("Plain"), LineKind::Plain("Plain"));
    }

    #[test]
    fn test_classify_line_requires_space_after_marker() {
        assert_eq!(classify_line("#Hashtag"), LineKind::Plain("#Hashtag"));
        assert_eq!(classify_line("##"), LineKind::Plain("##"));
        assert_eq!(classify_line("-dash"), LineKind::Plain("-dash"));
        assert_eq!(classify_line("**bold**"), LineKind::Plain("**bold**"));
        assert_eq!(classify_line("#### Deep"), LineKind::Plain("#### Deep"));
    }

    #[test]
    fn test_heading_remainder_drops_extra_whitespace() {
        assert_eq!(classify_line("#   Jane"), LineKind::Title("Jane"));
        assert_eq!(classify_line("##  Skills"), LineKind::SectionHeading("Skills"));
    }

    #[test]
    fn test_bullet_keeps_text_after_two_char_marker() {
        assert_eq!(classify_line("-  indented"), LineKind::Bullet(" indented"));
    }

    #[test]
    fn test_contact_detection() {
        assert!(looks_like_contact("jane@example.org"));
        assert!(looks_like_contact("linkedin.COM/in/jane"));
        assert!(looks_like_contact("+1 555 123 4567"));
        assert!(looks_like_contact("0044 20 7946 0958"));
        assert!(!looks_like_contact("Berlin, Germany"));
    }

    #[test]
    fn test_phone_trailing_run_boundary() {
        // one leading digit plus exactly six more
        assert!(looks_like_phone("tel 1234567"));
        // one leading digit plus only five more
        assert!(!looks_like_phone("tel 123456"));
        // spaces and hyphens count toward the run
        assert!(looks_like_phone("5 55-12"));
        assert!(!looks_like_phone("5 55-1"));
    }

    #[test]
    fn test_role_length_boundary() {
        let fifty_nine = "a".repeat(59);
        let sixty = "a".repeat(60);
        assert!(looks_like_role(&fifty_nine));
        assert!(!looks_like_role(&sixty));
        assert!(!looks_like_role("Sr. Engineer"));
    }

    #[test]
    fn test_role_length_counts_chars_not_bytes() {
        let line = "é".repeat(59);
        assert!(looks_like_role(&line));
    }

    #[test]
    fn test_header_line_order() {
        assert_eq!(
            classify_header_line("jane@x.com", false),
            HeaderLine::Contact
        );
        assert_eq!(
            classify_header_line("Senior Analyst", false),
            HeaderLine::Role
        );
        assert_eq!(
            classify_header_line("Senior Analyst", true),
            HeaderLine::Summary
        );
        assert_eq!(
            classify_header_line("A seasoned operator.", false),
            HeaderLine::Summary
        );
    }

    #[test]
    fn test_entry_row_boundary() {
        let pad = |n: usize| format!("Acme - {}", "x".repeat(n - "Acme - ".len()));
        assert!(is_entry_row(&pad(79)));
        assert!(!is_entry_row(&pad(80)));
        let long_pipe = format!("{} | 2020", "y".repeat(120));
        assert!(is_entry_row(&long_pipe));
        assert!(!is_entry_row("Built a pipeline-based system"));
    }
}
