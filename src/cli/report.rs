//! Report formatting and printing utilities.
//!
//! Separate from core logic so bitmx can be used as a library without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandSummary, InitSummary, NoInputFilesSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ConvertSummary;
use crate::error::LengthMismatch;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command summary. Failures go to stderr, everything else to stdout.
pub fn print(summary: &CommandSummary) {
    print_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print a command summary to custom writers.
pub fn print_to<O: Write, E: Write>(summary: &CommandSummary, out: &mut O, err: &mut E) {
    match summary {
        CommandSummary::Converted(summary) => print_converted(summary, out),
        CommandSummary::LengthMismatch(mismatch) => print_length_mismatch(mismatch, err),
        CommandSummary::NoInputFiles(summary) => print_no_input_files(summary, err),
        CommandSummary::Scan(summary) => print_scan(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn units(count: usize) -> &'static str {
    if count == 1 {
        "translation unit"
    } else {
        "translation units"
    }
}

fn print_converted<W: Write>(summary: &ConvertSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Created {} ({} {})",
            summary.output_path.display(),
            summary.unit_count,
            units(summary.unit_count)
        )
        .green()
    );
}

fn print_length_mismatch<W: Write>(mismatch: &LengthMismatch, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} The source and target files do not have the same number of lines.",
        FAILURE_MARK.red(),
        "error:".bold().red()
    );
    let _ = writeln!(
        writer,
        "  {} source: {} lines, target: {} lines",
        "=".blue(),
        mismatch.source_lines,
        mismatch.target_lines
    );
}

fn print_no_input_files<W: Write>(summary: &NoInputFilesSummary, writer: &mut W) {
    let extensions: Vec<&str> = summary.extensions.iter().map(String::as_str).collect();
    let _ = writeln!(
        writer,
        "{} No files with extensions {} found in {}",
        FAILURE_MARK.red(),
        extensions.join(", "),
        summary.dir.display()
    );
}

fn print_scan<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let recognized = &summary.classification.recognized;

    // Align the status column; file names may contain wide characters.
    let width = summary
        .files
        .iter()
        .map(|f| UnicodeWidthStr::width(f.as_str()))
        .max()
        .unwrap_or(0);

    for file in &summary.files {
        let padding = width - UnicodeWidthStr::width(file.as_str());
        let status = if recognized.contains(file) {
            "recognized".green()
        } else {
            "skipped".dimmed()
        };
        let _ = writeln!(writer, "  {}{}  {}", file, " ".repeat(padding), status);
    }

    if !summary.files.is_empty() {
        let _ = writeln!(writer);
    }

    let unrecognized = &summary.classification.unrecognized_extensions;
    if !unrecognized.is_empty() {
        let shown: Vec<&str> = unrecognized
            .iter()
            .map(|ext| if ext.is_empty() { "(none)" } else { ext.as_str() })
            .collect();
        let _ = writeln!(
            writer,
            "{} unrecognized extensions: {} (add them with {} or in {})",
            "note:".bold(),
            shown.join(", "),
            "--extension".cyan(),
            CONFIG_FILE_NAME
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} of {} {} in {} recognized{}",
            recognized.len(),
            summary.files.len(),
            if summary.files.len() == 1 { "file" } else { "files" },
            summary.dir.display(),
            if summary.config_from_file {
                format!(" (extensions from {})", CONFIG_FILE_NAME)
            } else {
                String::new()
            }
        )
        .green()
    );
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}
