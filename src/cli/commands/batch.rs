use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::super::args::BatchCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_dry_run, print_success};
use super::CommandContext;
use crate::table_file::save_table;

/// One text to key, as found by an extraction pass.
#[derive(Debug, Deserialize)]
pub struct BatchEntry {
    pub text: String,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub fn parse_batch(content: &str) -> Result<Vec<BatchEntry>> {
    serde_json::from_str(content).context("Batch input must be a JSON array of entries")
}

pub fn batch(cmd: BatchCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let content = fs::read_to_string(&cmd.input)
        .with_context(|| format!("Failed to read batch file: {}", cmd.input.display()))?;
    let entries = parse_batch(&content)?;

    let mut generator = ctx.generator()?;
    let before = generator.get_table().len();
    generator.begin_unit();

    for (index, entry) in entries.iter().enumerate() {
        let labels = ctx.context_labels(entry.file.as_deref(), &entry.path);
        let key = generator
            .derive_and_resolve(&entry.text, &labels, &entry.suffix)
            .with_context(|| format!("Failed to derive key for entry {}", index))?;
        println!("{}\t{}", key, entry.text);
    }

    if !generator.has_replacements() {
        eprintln!("No entries in {}", cmd.input.display());
        return Ok(ExitStatus::Success);
    }

    let new_entries = generator.get_table().len() - before;
    if ctx.verbose {
        eprintln!(
            "{} key(s) derived, {} new entr{}",
            generator.call_count(),
            new_entries,
            if new_entries == 1 { "y" } else { "ies" }
        );
    }

    if new_entries > 0 {
        if cmd.apply {
            save_table(&ctx.table_path, generator.get_table())?;
            print_success(&format!(
                "Saved {} entries to {}",
                generator.get_table().len(),
                ctx.table_path.display()
            ));
        } else {
            print_dry_run(new_entries);
        }
    }

    Ok(ExitStatus::Success)
}
