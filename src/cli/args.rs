//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Create a `.lutkeyrc.json` configuration file
//! - `key`: Derive the key for one text
//! - `batch`: Derive keys for a list of texts as one unit of work
//! - `export`: Print the table as a nested tree
//! - `check`: Report keys that nest under other keys

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Key(cmd)) => cmd.common.verbose,
            Some(Command::Batch(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all table commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Translation table file (overrides config file)
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct KeyCommand {
    /// Text to derive a key for
    pub text: String,

    /// Context label, outermost first. Repeat for nested locations:
    /// --path settings --path h2
    #[arg(long = "path", value_name = "LABEL")]
    pub path: Vec<String>,

    /// Namespace segment appended to the key (e.g. "text")
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Source file the text comes from; its directories prefix the context
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Save the updated table (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct BatchCommand {
    /// JSON file holding an array of {"text", "path", "suffix", "file"} entries
    pub input: PathBuf,

    /// Save the updated table (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Put texts at the leaves instead of keys
    #[arg(long)]
    pub values: bool,

    /// Replace texts with random CJK text of the same length (implies --values)
    #[arg(long)]
    pub pseudo: bool,

    /// Write the tree to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .lutkeyrc.json configuration file
    Init,
    /// Derive the translation key for a single text
    Key(KeyCommand),
    /// Derive keys for every entry of a JSON batch file
    Batch(BatchCommand),
    /// Print the translation table as a nested tree
    Export(ExportCommand),
    /// Report keys that would collide when the table is nested
    Check(CheckCommand),
}
