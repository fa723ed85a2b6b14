//! Reading and writing translation tables as JSON files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::{Table, try_flatten};

/// Load a table from a JSON file.
///
/// Both flat (`{"a.b": "text"}`) and nested (`{"a": {"b": "text"}}`) layouts
/// are accepted; nested objects are flattened into dotted keys. A missing file
/// yields an empty table. Leaves that are not strings and dotted keys given
/// twice are errors, so saving the table back never drops entries.
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Table file not found, starting empty");
        return Ok(Table::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
    if !value.is_object() {
        bail!("Root of JSON file must be an object: {}", path.display());
    }

    let table = match try_flatten(&value) {
        Ok(table) => table,
        Err(err) => bail!("Invalid table file {}: {}", path.display(), err),
    };
    tracing::debug!(path = %path.display(), entries = table.len(), "Loaded table");
    Ok(table)
}

/// Save a table as flat, pretty-printed JSON.
pub fn save_table(path: &Path, table: &Table) -> Result<()> {
    let value = serde_json::to_value(table).context("Failed to serialize table")?;
    write_json(path, &value)
}

/// Write any JSON value with 2-space indentation and a trailing newline,
/// creating parent directories as needed.
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), "Wrote JSON file");
    Ok(())
}
