//! resumark CLI - resume markdown structuring tool

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use resumark::render::{self, to_json_value};
use resumark::{
    structure_file_with_options, ContactKind, ContentItem, DocumentStats, ErrorMode, JsonFormat,
    ParseOptions, ParsedDocument, RenderOptions, Severity, Structurer,
};

#[derive(Parser)]
#[command(name = "resumark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Structure resume markdown into JSON, Markdown, and text", long_about = None)]
struct Cli {
    /// Input resume file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write JSON, Markdown, and text for each input
    Convert {
        /// Input resume files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Reject malformed documents
        #[arg(long, env = "RESUMARK_STRICT")]
        strict: bool,
    },

    /// Structure a resume and print it as JSON
    Json {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Reject malformed documents
        #[arg(long, env = "RESUMARK_STRICT")]
        strict: bool,
    },

    /// Rewrite a resume as canonical Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Bullet marker character
        #[arg(long, default_value = "-")]
        list_marker: char,

        /// Reject malformed documents
        #[arg(long, env = "RESUMARK_STRICT")]
        strict: bool,
    },

    /// Render a resume as plain text
    Text {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Prefix contact lines with their kind
        #[arg(long)]
        label_contacts: bool,
    },

    /// Show structure summary
    Info {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Report dropped or suspicious lines
    Check {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            strict,
        }) => cmd_convert(&inputs, output.as_deref(), strict).map(|_| ()),
        Some(Commands::Json {
            input,
            output,
            compact,
            strict,
        }) => cmd_json(&input, output.as_deref(), compact, strict),
        Some(Commands::Markdown {
            input,
            output,
            list_marker,
            strict,
        }) => cmd_markdown(&input, output.as_deref(), list_marker, strict),
        Some(Commands::Text {
            input,
            output,
            label_contacts,
        }) => cmd_text(&input, output.as_deref(), label_contacts),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Check { input, json }) => cmd_check(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: print JSON if input is provided
            if let Some(input) = cli.input {
                cmd_json(&input, None, false, false)
            } else {
                println!("{}", "Usage: resumark <FILE>".yellow());
                println!("       resumark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(strict: bool) -> ParseOptions {
    let mode = if strict {
        ErrorMode::Strict
    } else {
        ErrorMode::Lenient
    };
    ParseOptions::new().with_error_mode(mode)
}

fn load(input: &Path, strict: bool) -> Result<ParsedDocument, Box<dyn std::error::Error>> {
    log::debug!("Structuring {}", input.display());
    Ok(structure_file_with_options(input, &parse_options(strict))?)
}

/// Structural counts plus word and character counts of the document text.
fn document_stats(doc: &ParsedDocument) -> DocumentStats {
    let mut stats = DocumentStats::from_document(doc);
    stats.count_text(&doc.plain_text());
    stats
}

/// Output file stem per input. Two inputs sharing a stem would overwrite each other.
fn output_stems(inputs: &[PathBuf]) -> Result<Vec<String>, String> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    let mut stems = Vec::with_capacity(inputs.len());

    for input in inputs {
        let stem = input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        if let Some(previous) = seen.insert(stem.clone(), input) {
            return Err(format!(
                "{} and {} would both write {}.{{json,md,txt}}",
                previous.display(),
                input.display(),
                stem
            ));
        }
        stems.push(stem);
    }

    Ok(stems)
}

fn emit(content: &str, output: Option<&Path>) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    strict: bool,
) -> Result<DocumentStats, Box<dyn std::error::Error>> {
    let stems = output_stems(inputs)?;
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("resumark_output"));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let render_options = RenderOptions::new();
    let mut total = DocumentStats::new();

    for (input, stem) in inputs.iter().zip(&stems) {
        pb.set_message(format!("{}", input.display()));

        let doc = load(input, strict)?;
        total.merge(&document_stats(&doc));

        let json = render::to_json(&doc, JsonFormat::Pretty)?;
        fs::write(output_dir.join(format!("{}.json", stem)), &json)?;

        let markdown = render::to_markdown(&doc, &render_options)?;
        fs::write(output_dir.join(format!("{}.md", stem)), &markdown)?;

        let text = render::to_text(&doc, &render_options)?;
        fs::write(output_dir.join(format!("{}.txt", stem)), &text)?;

        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {}",
        "Output files in".green().bold(),
        output_dir.display()
    );
    for (i, stem) in stems.iter().enumerate() {
        let branch = if i + 1 == stems.len() { "└─" } else { "├─" };
        println!("  {} {}.{{json,md,txt}}", branch.dimmed(), stem);
    }
    println!(
        "{} {} section(s), {} item(s), {} word(s)",
        "Total:".bold(),
        total.section_count,
        total.item_count(),
        total.word_count
    );

    Ok(total)
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool, strict: bool) -> CliResult {
    let doc = load(input, strict)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    emit(&render::to_json(&doc, format)?, output)
}

fn cmd_markdown(input: &Path, output: Option<&Path>, list_marker: char, strict: bool) -> CliResult {
    let doc = load(input, strict)?;
    let options = RenderOptions::new().with_list_marker(list_marker);
    emit(&render::to_markdown(&doc, &options)?, output)
}

fn cmd_text(input: &Path, output: Option<&Path>, label_contacts: bool) -> CliResult {
    let doc = load(input, false)?;
    let options = RenderOptions::new().with_contact_labels(label_contacts);
    emit(&render::to_text(&doc, &options)?, output)
}

fn cmd_info(input: &Path) -> CliResult {
    let doc = load(input, false)?;
    let stats = document_stats(&doc);

    println!("{}", "Resume Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Name".bold(), or_none(&doc.name));
    println!("{}: {}", "Role".bold(), or_none(&doc.role));
    for line in &doc.contact {
        println!("{}: {}", ContactKind::classify(line).label().bold(), line);
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for section in &doc.sections {
        let bullets = section
            .content
            .iter()
            .filter(|item| matches!(item, ContentItem::Bullet { .. }))
            .count();
        println!(
            "{} ({} items, {} bullets)",
            section.title.bold(),
            section.content.len(),
            bullets
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Sub-headings".bold(), stats.sub_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Paragraphs".bold(), stats.text_count);
    println!("{}: {}", "Items".bold(), stats.item_count());
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

fn cmd_check(input: &Path, json: bool) -> CliResult {
    let raw = String::from_utf8(fs::read(input)?)?;
    let outcome = Structurer::new(ParseOptions::new()).structure_with_diagnostics(&raw);

    if json {
        println!(
            "{}",
            to_json_value(&outcome.diagnostics, JsonFormat::Pretty)?
        );
    } else if outcome.diagnostics.is_empty() {
        println!("{} {}", "OK".green().bold(), input.display());
    } else {
        for diag in &outcome.diagnostics {
            let tag = match diag.severity() {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow().bold(),
            };
            println!("{}: {}: {}", input.display(), tag, diag);
        }
    }

    if outcome.has_errors() {
        return Err(format!(
            "{} error(s) found",
            outcome.diagnostics.iter().filter(|d| d.is_error()).count()
        )
        .into());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resumark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume markdown structuring tool");
    println!();
    println!("License: MIT");
}
