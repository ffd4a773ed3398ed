//! Single-pass resume structurer.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{ContentItem, ParsedDocument, Section};

use super::classify::{classify_header_line, classify_line, is_entry_row, HeaderLine, LineKind};
use super::normalize::normalize_input;
use super::{Diagnostic, DiagnosticKind, ErrorMode, ParseOptions};

const BOM: char = '\u{FEFF}';

/// Document plus everything noticed while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureOutcome {
    pub document: ParsedDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl StructureOutcome {
    /// First finding that strict mode would reject.
    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.first_error().is_some()
    }
}

/// Structures resume text according to a set of [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct Structurer {
    options: ParseOptions,
}

impl Structurer {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Structure `raw`, failing in strict mode on the first error-severity finding.
    pub fn structure(&self, raw: &str) -> Result<ParsedDocument> {
        let outcome = self.structure_with_diagnostics(raw);

        if let Some(diag) = outcome.first_error() {
            match self.options.error_mode {
                ErrorMode::Strict => {
                    return Err(Error::Malformed {
                        line: diag.line.unwrap_or(0),
                        reason: diag.kind.to_string(),
                    });
                }
                ErrorMode::Lenient => {
                    log::warn!(
                        "Absorbed {} malformed line(s), first at {}",
                        outcome.diagnostics.iter().filter(|d| d.is_error()).count(),
                        diag
                    );
                }
            }
        }

        Ok(outcome.document)
    }

    /// Structure `raw` and keep every diagnostic. Never fails.
    pub fn structure_with_diagnostics(&self, raw: &str) -> StructureOutcome {
        if self.options.normalize_unicode {
            run(&normalize_input(raw))
        } else {
            run(raw)
        }
    }

    /// Structure many inputs, preserving order.
    pub fn structure_many<S>(&self, inputs: &[S]) -> Vec<Result<ParsedDocument>>
    where
        S: AsRef<str> + Sync,
    {
        if self.options.parallel {
            inputs
                .par_iter()
                .map(|raw| self.structure(raw.as_ref()))
                .collect()
        } else {
            inputs.iter().map(|raw| self.structure(raw.as_ref())).collect()
        }
    }
}

/// Structure resume markdown. Total: malformed lines are absorbed.
pub fn structure(raw: &str) -> ParsedDocument {
    run(raw).document
}

/// Report structural findings for `raw` without failing.
pub fn validate(raw: &str) -> Vec<Diagnostic> {
    run(raw).diagnostics
}

fn run(raw: &str) -> StructureOutcome {
    let outcome = raw
        .lines()
        .enumerate()
        .fold(Accumulator::default(), |acc, (idx, line)| {
            acc.feed(idx + 1, trim_line(line))
        })
        .finish();

    log::debug!(
        "Structured {} section(s), {} contact line(s), {} diagnostic(s)",
        outcome.document.sections.len(),
        outcome.document.contact.len(),
        outcome.diagnostics.len()
    );
    outcome
}

/// Trim whitespace and byte-order marks from both ends of a line.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Section still receiving items, with the line of its heading.
#[derive(Debug)]
struct OpenSection {
    line: usize,
    section: Section,
}

/// Fold state. The header region is open exactly while `current` is `None`;
/// once a section opens there is always one until the end of input.
#[derive(Debug, Default)]
struct Accumulator {
    document: ParsedDocument,
    current: Option<OpenSection>,
    diagnostics: Vec<Diagnostic>,
    title_line: Option<usize>,
}

impl Accumulator {
    fn feed(mut self, line_no: usize, line: &str) -> Self {
        if line.is_empty() {
            return self;
        }

        match classify_line(line) {
            LineKind::Title(name) => self.set_title(line_no, name),
            LineKind::SectionHeading(title) => {
                self.close_section();
                self.current = Some(OpenSection {
                    line: line_no,
                    section: Section::new(title),
                });
            }
            LineKind::SubHeading(text) => match self.current.as_mut() {
                Some(open) => open.section.push(ContentItem::sub(text)),
                None => {
                    log::debug!("Dropping sub-heading before first section at line {}", line_no);
                    self.diagnostics.push(Diagnostic::at(
                        line_no,
                        DiagnosticKind::OrphanSubHeading {
                            text: text.to_string(),
                        },
                    ));
                }
            },
            LineKind::Bullet(text) => match self.current.as_mut() {
                Some(open) => open.section.push(ContentItem::bullet(text)),
                None => {
                    log::debug!("Dropping bullet before first section at line {}", line_no);
                    self.diagnostics.push(Diagnostic::at(
                        line_no,
                        DiagnosticKind::OrphanBullet {
                            text: text.to_string(),
                        },
                    ));
                }
            },
            LineKind::Plain(text) => match self.current.as_mut() {
                Some(open) => {
                    let item = if is_entry_row(text) {
                        ContentItem::sub(text)
                    } else {
                        ContentItem::text_item(text)
                    };
                    open.section.push(item);
                }
                None => self.push_header_line(text),
            },
        }

        self
    }

    fn set_title(&mut self, line_no: usize, name: &str) {
        if self.title_line.is_some() {
            self.diagnostics.push(Diagnostic::at(
                line_no,
                DiagnosticKind::RepeatedTitle {
                    previous: self.document.name.clone(),
                    replacement: name.to_string(),
                },
            ));
        }
        self.title_line = Some(line_no);
        self.document.name = name.to_string();
    }

    fn push_header_line(&mut self, text: &str) {
        let doc = &mut self.document;
        match classify_header_line(text, !doc.role.is_empty()) {
            HeaderLine::Contact => doc.contact.push(text.to_string()),
            HeaderLine::Role => doc.role = text.to_string(),
            HeaderLine::Summary => doc.push_summary(text),
        }
    }

    fn close_section(&mut self) {
        if let Some(open) = self.current.take() {
            if open.section.is_empty() {
                self.diagnostics.push(Diagnostic::at(
                    open.line,
                    DiagnosticKind::EmptySection {
                        title: open.section.title.clone(),
                    },
                ));
            }
            self.document.sections.push(open.section);
        }
    }

    fn finish(mut self) -> StructureOutcome {
        self.close_section();
        if self.title_line.is_none() {
            self.diagnostics
                .push(Diagnostic::document(DiagnosticKind::MissingName));
        }
        StructureOutcome {
            document: self.document,
            diagnostics: self.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(body: &str) -> ParsedDocument {
        structure(&format!("# Name\n{}", body))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(structure(""), ParsedDocument::default());
        assert_eq!(structure("   \n\t\n  "), ParsedDocument::default());
    }

    #[test]
    fn test_header_fields() {
        let doc = structure("# Jane Doe\njane@x.com\nSenior Analyst\nA seasoned operator.");
        assert_eq!(doc.name, "Jane Doe");
        assert_eq!(doc.contact, vec!["jane@x.com"]);
        assert_eq!(doc.role, "Senior Analyst");
        assert_eq!(doc.summary, "A seasoned operator.");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_bullets_in_section() {
        let doc = structure("# A\n## Experience\n- Did X\n- Did Y");
        assert_eq!(
            doc.sections,
            vec![Section {
                title: "Experience".to_string(),
                content: vec![ContentItem::bullet("Did X"), ContentItem::bullet("Did Y")],
            }]
        );
    }

    #[test]
    fn test_row_then_text() {
        let doc = structure("## Exp\nRole Title | Company | 2020-Present\nDescribed the job.");
        assert_eq!(
            doc.sections[0].content,
            vec![
                ContentItem::sub("Role Title | Company | 2020-Present"),
                ContentItem::text_item("Described the job."),
            ]
        );
    }

    #[test]
    fn test_role_set_once() {
        let doc = header("Engineer\nManager");
        assert_eq!(doc.role, "Engineer");
        assert_eq!(doc.summary, "Manager");
    }

    #[test]
    fn test_role_boundary_sixty_chars() {
        let sixty = "b".repeat(60);
        let doc = header(&sixty);
        assert_eq!(doc.role, "");
        assert_eq!(doc.summary, sixty);

        let fifty_nine = "b".repeat(59);
        let doc = header(&fifty_nine);
        assert_eq!(doc.role, fifty_nine);
        assert_eq!(doc.summary, "");
    }

    #[test]
    fn test_row_boundary_eighty_chars() {
        let line = |n: usize| format!("Acme - {}", "z".repeat(n - 7));

        let doc = structure(&format!("## Work\n{}", line(80)));
        assert_eq!(doc.sections[0].content, vec![ContentItem::text_item(line(80))]);

        let doc = structure(&format!("## Work\n{}", line(79)));
        assert_eq!(doc.sections[0].content, vec![ContentItem::sub(line(79))]);
    }

    #[test]
    fn test_phone_boundary_in_header() {
        let doc = header("ext 1234567");
        assert_eq!(doc.contact, vec!["ext 1234567"]);

        let doc = header("ext 123456");
        assert!(doc.contact.is_empty());
        assert_eq!(doc.role, "ext 123456");
    }

    #[test]
    fn test_header_never_reopens() {
        let doc = structure("# Jane\n## Contact\njane@x.com\nShort line");
        assert!(doc.contact.is_empty());
        assert_eq!(doc.role, "");
        assert_eq!(
            doc.sections[0].content,
            vec![
                ContentItem::text_item("jane@x.com"),
                ContentItem::text_item("Short line"),
            ]
        );
    }

    #[test]
    fn test_orphans_are_dropped() {
        let doc = structure("# Jane\n- +1 555 123 4567\n### Early\n## Skills\n- Rust");
        assert!(doc.contact.is_empty());
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].content, vec![ContentItem::bullet("Rust")]);
    }

    #[test]
    fn test_title_after_section_sets_name_and_keeps_section() {
        let doc = structure("## Skills\n# Late Name\n- Rust");
        assert_eq!(doc.name, "Late Name");
        assert_eq!(doc.sections[0].content, vec![ContentItem::bullet("Rust")]);
    }

    #[test]
    fn test_leading_bom_keeps_title() {
        let doc = structure("\u{FEFF}# Jane Doe\nSenior Analyst\n## Skills\n- Rust");
        assert_eq!(doc.name, "Jane Doe");
        assert_eq!(doc.role, "Senior Analyst");
        assert_eq!(doc.sections[0].content, vec![ContentItem::bullet("Rust")]);
    }

    #[test]
    fn test_crlf_and_indentation() {
        let doc = structure("  # Jane  \r\n\r\n  ## Skills\r\n    * Rust\r\n");
        assert_eq!(doc.name, "Jane");
        assert_eq!(doc.sections[0].title, "Skills");
        assert_eq!(doc.sections[0].content, vec![ContentItem::bullet("Rust")]);
    }

    #[test]
    fn test_empty_section_is_kept() {
        let doc = structure("## A\n## B\nText here.");
        assert_eq!(doc.sections.len(), 2);
        assert!(doc.sections[0].is_empty());
    }

    #[test]
    fn test_stability() {
        let raw = "# Jane\njane@x.com\n## Exp\nA | B\n- one\nprose.";
        assert_eq!(structure(raw), structure(raw));
    }

    #[test]
    fn test_validate_reports_findings() {
        let diags = validate("- early\n### early sub\n# One\n# Two\n## Empty\n## Full\n- x");
        let kinds: Vec<_> = diags.iter().map(|d| (d.line, d.is_error())).collect();
        assert_eq!(
            kinds,
            vec![
                (Some(1), true),
                (Some(2), true),
                (Some(4), true),
                (Some(5), false),
            ]
        );
    }

    #[test]
    fn test_validate_missing_name() {
        let diags = validate("## Skills\n- Rust");
        assert_eq!(diags, vec![Diagnostic::document(DiagnosticKind::MissingName)]);
    }

    #[test]
    fn test_strict_rejects_orphan_bullet() {
        let structurer = Structurer::new(ParseOptions::new().strict());
        let err = structurer.structure("# Jane\n- orphan\n## A").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_strict_accepts_warnings_only() {
        let structurer = Structurer::new(ParseOptions::new().strict());
        let doc = structurer.structure("## Empty").unwrap();
        assert_eq!(doc.sections.len(), 1);
    }

    mod capture {
        use std::cell::RefCell;

        use log::{Level, LevelFilter, Log, Metadata, Record};

        thread_local! {
            static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
        }

        struct CaptureLogger;

        impl Log for CaptureLogger {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
            }

            fn flush(&self) {}
        }

        static LOGGER: CaptureLogger = CaptureLogger;

        /// Run `f` and return the records logged on this thread meanwhile.
        pub fn records(f: impl FnOnce()) -> Vec<(Level, String)> {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
            RECORDS.with(|r| r.borrow_mut().clear());
            f();
            RECORDS.with(|r| r.borrow_mut().drain(..).collect())
        }
    }

    #[test]
    fn test_lenient_warns_on_absorbed_errors() {
        let records = capture::records(|| {
            let doc = Structurer::default().structure("- orphan\n### also\n## A").unwrap();
            assert_eq!(doc.sections.len(), 1);
        });
        assert!(records
            .iter()
            .any(|(level, msg)| *level == log::Level::Warn && msg.starts_with("Absorbed 2")));

        let clean = capture::records(|| {
            Structurer::default().structure("# Jane\n## A\n- x").unwrap();
        });
        assert!(clean.iter().all(|(level, _)| *level != log::Level::Warn));
    }

    #[test]
    fn test_lenient_matches_free_function() {
        let raw = "# Jane\n- orphan\n## A\n- x";
        let structurer = Structurer::default();
        assert_eq!(structurer.structure(raw).unwrap(), structure(raw));
    }

    #[test]
    fn test_normalization_option() {
        let raw = "\u{FEFF}# Rene\u{0301}\n## Skills";
        let plain = structure(raw);
        assert_eq!(plain.name, "Rene\u{0301}");

        let structurer = Structurer::new(ParseOptions::new().with_normalization(true));
        let doc = structurer.structure(raw).unwrap();
        assert_eq!(doc.name, "Ren\u{00E9}");
    }

    #[test]
    fn test_structure_many_preserves_order() {
        let inputs = vec!["# A", "# B", "# C"];
        for options in [ParseOptions::new(), ParseOptions::new().sequential()] {
            let names: Vec<_> = Structurer::new(options)
                .structure_many(&inputs)
                .into_iter()
                .map(|r| r.unwrap().name)
                .collect();
            assert_eq!(names, vec!["A", "B", "C"]);
        }
    }
}
