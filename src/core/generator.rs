//! Entry point used by extraction passes.
//!
//! A [`KeyGenerator`] bundles the table store, the deriver and the resolver
//! for one extraction run. Runs that must not share keys use separate
//! generators; a generator itself is not meant to be shared across threads
//! without external synchronization.

use serde_json::Value;

use super::derive::{DEFAULT_MAX_SEGMENT_LENGTH, KeyDeriver};
use super::resolve::{KeyError, Resolver};
use super::table::{Table, TableStore};

#[derive(Debug, Clone, Default)]
pub struct KeyGenerator {
    store: TableStore,
    deriver: KeyDeriver,
    resolver: Resolver,
}

impl KeyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deriver(mut self, deriver: KeyDeriver) -> Self {
        self.deriver = deriver;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.resolver = Resolver::new(max_iterations);
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.store.set(table);
        self
    }

    /// Derive the key for `text` found at `path` and record it in the table.
    ///
    /// Re-deriving the same text at the same location returns the key it
    /// already has. `suffix` is appended as a separate namespace segment
    /// (for example `text` for element content) and may be empty.
    pub fn derive_and_resolve<S: AsRef<str>>(
        &mut self,
        text: &str,
        path: &[S],
        suffix: &str,
    ) -> Result<String, KeyError> {
        self.store.increment_call_counter();
        let candidate = self.deriver.derive_for_text(text, path);
        let resolution = self
            .resolver
            .resolve(&mut self.store, text, &candidate, suffix)?;
        if resolution.is_inserted() && resolution.key() != candidate {
            tracing::debug!(
                candidate = %candidate,
                key = resolution.key(),
                "Candidate key was taken"
            );
        }
        Ok(resolution.into_key())
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    pub fn get_table(&self) -> &Table {
        self.store.get()
    }

    pub fn set_table(&mut self, table: Table) {
        self.store.set(table);
    }

    pub fn clear_table(&mut self) {
        self.store.clear();
    }

    pub fn export_grouped(&self, use_value_as_leaf: bool) -> Value {
        self.store.export_grouped(use_value_as_leaf)
    }

    pub fn max_segment_length(&self) -> usize {
        self.deriver.max_segment_length()
    }

    pub fn set_max_segment_length(&mut self, max_segment_length: usize) {
        self.deriver.set_max_segment_length(max_segment_length);
    }

    pub fn reset_max_segment_length(&mut self) {
        self.deriver.set_max_segment_length(DEFAULT_MAX_SEGMENT_LENGTH);
    }

    pub fn max_iterations(&self) -> usize {
        self.resolver.max_iterations()
    }

    /// Start a new unit of work (typically one source file).
    pub fn begin_unit(&mut self) {
        self.store.reset_call_counter();
    }

    pub fn call_count(&self) -> usize {
        self.store.call_count()
    }

    /// True when at least one key was derived since the unit began.
    pub fn has_replacements(&self) -> bool {
        self.store.call_count() > 0
    }
}
