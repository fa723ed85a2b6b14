use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SEGMENT_LENGTH, DEFAULT_ROOT_MARKER,
    DEFAULT_SHARED_MARKER, KeyDeriver, KeyGenerator, LabelTable, LeafPolicy,
    labels::sanitize_segment,
};

pub const CONFIG_FILE_NAME: &str = ".lutkeyrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_table_file")]
    pub table_file: String,
    #[serde(default = "default_max_segment_length")]
    pub max_segment_length: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_root_marker")]
    pub root_marker: String,
    #[serde(default = "default_shared_marker")]
    pub shared_marker: String,
    #[serde(default)]
    pub leaf_policy: LeafPolicy,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

fn default_table_file() -> String {
    "./i18n/lut.json".to_string()
}

fn default_max_segment_length() -> usize {
    DEFAULT_MAX_SEGMENT_LENGTH
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_root_marker() -> String {
    DEFAULT_ROOT_MARKER.to_string()
}

fn default_shared_marker() -> String {
    DEFAULT_SHARED_MARKER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_file: default_table_file(),
            max_segment_length: default_max_segment_length(),
            max_iterations: default_max_iterations(),
            root_marker: default_root_marker(),
            shared_marker: default_shared_marker(),
            leaf_policy: LeafPolicy::default(),
            labels: HashMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Limits must be positive and every custom label must keep at least one
    /// letter once sanitized, otherwise it would silently vanish from keys.
    pub fn validate(&self) -> Result<()> {
        if self.max_segment_length == 0 {
            bail!("'maxSegmentLength' must be greater than 0");
        }
        if self.max_iterations == 0 {
            bail!("'maxIterations' must be greater than 0");
        }

        for (label, role) in &self.labels {
            if sanitize_segment(role, self.max_segment_length).is_empty() {
                bail!(
                    "Invalid label mapping in 'labels': \"{}\" -> \"{}\" has no letters",
                    label,
                    role
                );
            }
        }

        Ok(())
    }

    /// Build a key generator configured from this file.
    pub fn key_generator(&self) -> KeyGenerator {
        let deriver = KeyDeriver::new()
            .with_labels(LabelTable::with_overrides(self.labels.clone()))
            .with_max_segment_length(self.max_segment_length)
            .with_root_marker(Some(self.root_marker.clone()))
            .with_leaf_policy(self.leaf_policy);

        KeyGenerator::new()
            .with_deriver(deriver)
            .with_max_iterations(self.max_iterations)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "Loaded config");
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
