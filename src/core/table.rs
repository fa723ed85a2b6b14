//! Lookup table store.
//!
//! Holds the flat `key -> text` mapping produced by key generation together
//! with the per-unit call counter. The store owns no policy: deciding which
//! key a text gets is the resolver's job.

use std::collections::BTreeMap;
use std::ops::Bound;

use serde_json::Value;

use super::export::export_grouped;

/// Flat translation table, ordered by key.
pub type Table = BTreeMap<String, String>;

/// An existing key that shares a dotted path with a probed key.
///
/// A flat table containing both `a.b` and `a.b.c` cannot be turned into a
/// nested tree, since `a.b` would have to be a leaf and a container at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap<'a> {
    /// The existing key is a shorter path the probe would nest under.
    Ancestor(&'a str),
    /// The existing key nests under the probe.
    Descendant(&'a str),
}

impl<'a> Overlap<'a> {
    pub fn key(&self) -> &'a str {
        match self {
            Overlap::Ancestor(key) | Overlap::Descendant(key) => key,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct TableStore {
    entries: Table,
    calls: usize,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: Table) -> Self {
        Self {
            entries: table,
            calls: 0,
        }
    }

    /// Current table contents.
    pub fn get(&self) -> &Table {
        &self.entries
    }

    /// Replace the whole table. No merge takes place.
    pub fn set(&mut self, table: Table) {
        self.entries = table;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning the text it replaced.
    pub(crate) fn insert(&mut self, key: String, text: String) -> Option<String> {
        self.entries.insert(key, text)
    }

    /// Nested view of the table, see [`export_grouped`].
    pub fn export_grouped(&self, use_value_as_leaf: bool) -> Value {
        export_grouped(&self.entries, use_value_as_leaf)
    }

    /// Find an existing key that overlaps `key` on a `.` boundary.
    ///
    /// Ancestors are checked first, shortest first; then the lexicographically
    /// smallest descendant. An entry equal to `key` is not an overlap.
    pub fn find_overlapping(&self, key: &str) -> Option<Overlap<'_>> {
        for (idx, _) in key.match_indices('.') {
            if let Some((existing, _)) = self.entries.get_key_value(&key[..idx]) {
                return Some(Overlap::Ancestor(existing.as_str()));
            }
        }

        first_descendant(&self.entries, key).map(Overlap::Descendant)
    }

    /// Every `(ancestor, descendant)` pair that breaks tree conversion.
    pub fn overlaps(&self) -> Vec<(String, String)> {
        find_overlaps(&self.entries)
    }

    /// Number of key derivations since the last reset.
    pub fn call_count(&self) -> usize {
        self.calls
    }

    pub fn reset_call_counter(&mut self) {
        self.calls = 0;
    }

    pub fn increment_call_counter(&mut self) {
        self.calls += 1;
    }
}

fn descendants<'a>(table: &'a Table, key: &str) -> impl Iterator<Item = &'a str> {
    let prefix = format!("{}.", key);
    table
        .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
        .map(|(existing, _)| existing.as_str())
        .take_while(move |existing| existing.starts_with(&prefix))
}

fn first_descendant<'a>(table: &'a Table, key: &str) -> Option<&'a str> {
    descendants(table, key).next()
}

/// List every pair of keys where one nests under the other.
pub fn find_overlaps(table: &Table) -> Vec<(String, String)> {
    table
        .keys()
        .flat_map(|key| {
            descendants(table, key).map(move |nested| (key.clone(), nested.to_string()))
        })
        .collect()
}
