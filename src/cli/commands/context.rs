use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use super::super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::{KeyGenerator, Table, file_base_path},
    table_file::load_table,
};

/// Configuration and table location shared by table commands.
pub struct CommandContext {
    pub config: Config,
    pub table_path: PathBuf,
    pub verbose: bool,
}

impl CommandContext {
    /// Resolve configuration from the working directory and command line args.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root_dir = env::current_dir().context("Failed to read current directory")?;
        let config_result = load_config(&root_dir)?;

        if args.verbose && config_result.path.is_none() {
            eprintln!("Note: No .lutkeyrc.json found, using default configuration");
        }

        let config = config_result.config;
        let table_path = match &args.table {
            Some(path) => path.clone(),
            None => root_dir.join(&config.table_file),
        };

        Ok(Self {
            config,
            table_path,
            verbose: args.verbose,
        })
    }

    pub fn load_table(&self) -> Result<Table> {
        load_table(&self.table_path)
    }

    /// A generator seeded with the current table.
    ///
    /// Overlapping keys in the loaded table are reported but do not stop the
    /// command; `lutkey check` lists them.
    pub fn generator(&self) -> Result<KeyGenerator> {
        let generator = self.config.key_generator().with_table(self.load_table()?);

        let overlaps = generator.store().overlaps();
        if !overlaps.is_empty() {
            tracing::warn!(
                count = overlaps.len(),
                table = %self.table_path.display(),
                "Table has overlapping keys, run `lutkey check` for details"
            );
        }
        Ok(generator)
    }

    /// Context labels for a text: the file's base path followed by `labels`.
    pub fn context_labels(&self, file: Option<&Path>, labels: &[String]) -> Vec<String> {
        let mut context = file
            .map(|file| {
                file_base_path(file, &self.config.root_marker, &self.config.shared_marker)
            })
            .unwrap_or_default();
        context.extend(labels.iter().cloned());
        context
    }
}
