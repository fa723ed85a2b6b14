//! Output formatting for command results.

use std::io::{self, Write};

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print overlapping key pairs followed by a summary line.
pub fn print_overlaps(overlaps: &[(String, String)], entries: usize) {
    print_overlaps_to(overlaps, entries, &mut io::stdout().lock());
}

pub fn print_overlaps_to<W: Write>(overlaps: &[(String, String)], entries: usize, writer: &mut W) {
    for (ancestor, nested) in overlaps {
        let _ = writeln!(
            writer,
            "{}: key `{}` has nested key `{}`",
            "error".red().bold(),
            ancestor,
            nested
        );
    }

    let _ = writeln!(
        writer,
        "\n{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} overlapping key pair(s) in {} entries",
            overlaps.len(),
            entries
        )
        .red()
    );
}

/// Note printed when a command changed the table without `--apply`.
pub fn print_dry_run(new_entries: usize) {
    eprintln!(
        "{}",
        format!(
            "{} new entr{} not saved (dry run, use --apply to save)",
            new_entries,
            if new_entries == 1 { "y" } else { "ies" }
        )
        .yellow()
    );
}
