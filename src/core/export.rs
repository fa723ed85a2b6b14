//! Conversion between the flat dotted table and its nested tree form.

use rand::Rng;
use serde_json::{Map, Value};
use thiserror::Error;

use super::table::Table;

const CJK_FIRST: u32 = 0x4E00;
const CJK_LAST: u32 = 0x9FA5;

/// Build a nested tree from the flat table.
///
/// Every key is split on `.`; each segment but the last becomes a nested
/// object and the last one holds either the text (`use_value_as_leaf`) or the
/// key itself. Keys are visited in lexicographic order.
///
/// Empty segments are skipped; a key made only of dots is stored as-is at the
/// root. A key nesting under an existing leaf replaces that leaf, which only
/// happens when the table already breaks tree conversion.
pub fn export_grouped(table: &Table, use_value_as_leaf: bool) -> Value {
    let mut root = Map::new();

    for (key, text) in table {
        let value = if use_value_as_leaf { text } else { key };
        let mut segments: Vec<&str> = key.split('.').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            segments.push(key.as_str());
        }
        insert_nested(&mut root, &segments, Value::String(value.clone()));
    }

    Value::Object(root)
}

fn insert_nested(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut current = root;
    for segment in parents {
        let next = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !next.is_object() {
            tracing::warn!(segment, "Leaf replaced by nested group during export");
            *next = Value::Object(Map::new());
        }
        current = match next {
            Value::Object(map) => map,
            _ => unreachable!("replaced by an object above"),
        };
    }

    if let Some(existing) = current.get(*last)
        && existing.is_object()
    {
        tracing::warn!(segment = last, "Nested group shadows leaf during export");
        return;
    }
    current.insert(last.to_string(), value);
}

/// A nested table that cannot be flattened without losing entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    #[error("value at \"{key}\" is not a string")]
    NonStringLeaf { key: String },
    #[error("key \"{key}\" is defined more than once")]
    DuplicateKey { key: String },
}

/// Flatten a nested tree back into dotted keys.
///
/// Only string leaves produce entries; other JSON values are ignored.
pub fn flatten(value: &Value) -> Table {
    leaves(value)
        .into_iter()
        .filter_map(|(key, leaf)| leaf.as_str().map(|text| (key, text.to_string())))
        .collect()
}

/// Flatten a nested tree, rejecting leaves that are not strings and dotted
/// keys reached through more than one path (`{"a.b": .., "a": {"b": ..}}`).
pub fn try_flatten(value: &Value) -> Result<Table, FlattenError> {
    let mut table = Table::new();
    for (key, leaf) in leaves(value) {
        let Some(text) = leaf.as_str() else {
            return Err(FlattenError::NonStringLeaf { key });
        };
        if table.contains_key(&key) {
            return Err(FlattenError::DuplicateKey { key });
        }
        table.insert(key, text.to_string());
    }
    Ok(table)
}

fn leaves(value: &Value) -> Vec<(String, &Value)> {
    let mut out = Vec::new();
    collect_leaves(value, String::new(), &mut out);
    out
}

fn collect_leaves<'a>(value: &'a Value, prefix: String, out: &mut Vec<(String, &'a Value)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaves(val, new_prefix, out);
            }
        }
        leaf => out.push((prefix, leaf)),
    }
}

/// Copy of the table with every text replaced by random CJK characters of
/// the same length, for spotting untranslated strings and layout overflow.
pub fn pseudo_localize(table: &Table) -> Table {
    let mut rng = rand::rng();
    table
        .iter()
        .map(|(key, text)| {
            let pseudo: String = (0..text.chars().count())
                .filter_map(|_| char::from_u32(rng.random_range(CJK_FIRST..=CJK_LAST)))
                .collect();
            (key.clone(), pseudo)
        })
        .collect()
}
