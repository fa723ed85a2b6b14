//! Candidate key derivation.
//!
//! Turns the structural location of a text (directories, components, element
//! names, attribute names) into a dotted candidate key. Derivation is pure:
//! the same labels always produce the same candidate.

use serde::{Deserialize, Serialize};

use super::labels::{LabelTable, sanitize_segment};

pub const DEFAULT_MAX_SEGMENT_LENGTH: usize = 64;

/// Segment used when no label survives sanitization.
pub const PLACEHOLDER_SEGMENT: &str = "_";

pub const DEFAULT_ROOT_MARKER: &str = "application";

/// Where the leaf segment of a key comes from.
///
/// A generator applies one policy to every call. Mixing them on one table
/// would break idempotence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafPolicy {
    /// Keys come from structural labels only.
    #[default]
    Path,
    /// Keys come from structural labels; a location without any label is
    /// keyed by a sanitized slice of the text itself.
    Text,
}

#[derive(Debug, Clone)]
pub struct KeyDeriver {
    labels: LabelTable,
    max_segment_length: usize,
    root_marker: Option<String>,
    leaf_policy: LeafPolicy,
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self {
            labels: LabelTable::default(),
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            root_marker: Some(DEFAULT_ROOT_MARKER.to_string()),
            leaf_policy: LeafPolicy::default(),
        }
    }
}

impl KeyDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, labels: LabelTable) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_max_segment_length(mut self, max_segment_length: usize) -> Self {
        self.max_segment_length = max_segment_length;
        self
    }

    /// Labels up to and including the first `marker` are dropped.
    pub fn with_root_marker(mut self, marker: Option<String>) -> Self {
        self.root_marker = marker.filter(|m| !m.is_empty());
        self
    }

    pub fn with_leaf_policy(mut self, leaf_policy: LeafPolicy) -> Self {
        self.leaf_policy = leaf_policy;
        self
    }

    pub fn max_segment_length(&self) -> usize {
        self.max_segment_length
    }

    pub fn set_max_segment_length(&mut self, max_segment_length: usize) {
        self.max_segment_length = max_segment_length;
    }

    /// Derive a candidate key from structural labels alone.
    pub fn derive<S: AsRef<str>>(&self, labels: &[S]) -> String {
        let segments = self.segments(labels);
        if segments.is_empty() {
            PLACEHOLDER_SEGMENT.to_string()
        } else {
            segments.join(".")
        }
    }

    /// Derive the candidate key for `text` found at `labels`, honoring the
    /// leaf policy.
    pub fn derive_for_text<S: AsRef<str>>(&self, text: &str, labels: &[S]) -> String {
        let segments = self.segments(labels);
        if !segments.is_empty() {
            return segments.join(".");
        }

        match self.leaf_policy {
            LeafPolicy::Path => PLACEHOLDER_SEGMENT.to_string(),
            LeafPolicy::Text => {
                let leaf = sanitize_segment(&text.to_lowercase(), self.max_segment_length);
                if leaf.is_empty() {
                    PLACEHOLDER_SEGMENT.to_string()
                } else {
                    leaf
                }
            }
        }
    }

    fn segments<S: AsRef<str>>(&self, labels: &[S]) -> Vec<String> {
        let start = self
            .root_marker
            .as_deref()
            .and_then(|marker| labels.iter().position(|l| l.as_ref() == marker))
            .map_or(0, |idx| idx + 1);

        labels[start..]
            .iter()
            .map(|label| label.as_ref())
            .filter(|label| !label.is_empty())
            .map(|label| sanitize_segment(self.labels.normalize(label), self.max_segment_length))
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

/// Derive a candidate key with the default label table and root marker.
pub fn derive<S: AsRef<str>>(labels: &[S], max_segment_length: usize) -> String {
    KeyDeriver::default()
        .with_max_segment_length(max_segment_length)
        .derive(labels)
}
