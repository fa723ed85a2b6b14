//! Collision resolution.
//!
//! Given a candidate key and the text it should hold, find the key that is
//! actually used: the existing entry if this text is already stored there, a
//! free slot otherwise. The flat table must stay convertible into a nested
//! tree, so a slot is only free when no stored key nests under it or above it.
//!
//! Resolution walks a small state machine:
//!
//! - `TryExact`: the slot already holds this text, reuse it.
//! - `TryFree`: the slot is empty and nothing overlaps it, insert.
//! - `TryOverlapRewrite`: an overlapping key exists and no numbered key has
//!   been tried yet. A deeper probe gets an `of.` qualifier in front, a
//!   shallower one gets a `.value` leaf appended.
//! - `TryNumericSuffix`: append an increasing counter to the current
//!   candidate. Once entered, overlaps are never rewritten again.
//!
//! Every visit to `TryExact` counts as one attempt against the iteration limit.

use thiserror::Error;

use super::table::{Overlap, TableStore};

pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Segment put in front of a key that would nest under an existing one.
pub const QUALIFIER_SEGMENT: &str = "of";

/// Segment appended to a key that existing keys already nest under.
pub const VALUE_SEGMENT: &str = "value";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("no free key for candidate \"{candidate}\" after {limit} attempts")]
    IterationLimit { candidate: String, limit: usize },
}

/// Terminal state of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The text was already stored under this key.
    Matched(String),
    /// A new entry was inserted under this key.
    Inserted(String),
}

impl Resolution {
    pub fn key(&self) -> &str {
        match self {
            Resolution::Matched(key) | Resolution::Inserted(key) => key,
        }
    }

    pub fn into_key(self) -> String {
        match self {
            Resolution::Matched(key) | Resolution::Inserted(key) => key,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, Resolution::Inserted(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    TryExact,
    TryFree,
    TryOverlapRewrite(OverlapKind),
    TryNumericSuffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlapKind {
    Ancestor,
    Descendant,
}

impl From<Overlap<'_>> for OverlapKind {
    fn from(overlap: Overlap<'_>) -> Self {
        match overlap {
            Overlap::Ancestor(_) => OverlapKind::Ancestor,
            Overlap::Descendant(_) => OverlapKind::Descendant,
        }
    }
}

/// Append the caller's namespace suffix as its own segment(s).
///
/// Empty segments in the suffix are dropped, so `"text."` and `".text"` both
/// append `.text` and a suffix of only dots appends nothing.
pub fn effective_key(candidate: &str, suffix: &str) -> String {
    suffix
        .split('.')
        .filter(|segment| !segment.is_empty())
        .fold(candidate.to_string(), |mut key, segment| {
            key.push('.');
            key.push_str(segment);
            key
        })
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    max_iterations: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Resolver {
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Resolve `candidate` (plus `suffix`) to the key that holds `text`.
    ///
    /// The store is mutated at most once, when a new entry is inserted. On
    /// error it is left untouched.
    pub fn resolve(
        &self,
        store: &mut TableStore,
        text: &str,
        candidate: &str,
        suffix: &str,
    ) -> Result<Resolution, KeyError> {
        let mut current = candidate.to_string();
        let mut numeric_base = current.clone();
        let mut counter = 1usize;
        let mut rewrites_open = true;
        let mut attempts = 0usize;
        let mut state = State::TryExact;

        loop {
            state = match state {
                State::TryExact => {
                    attempts += 1;
                    if attempts > self.max_iterations {
                        tracing::debug!(candidate, attempts, "Key resolution gave up");
                        return Err(KeyError::IterationLimit {
                            candidate: effective_key(candidate, suffix),
                            limit: self.max_iterations,
                        });
                    }

                    let key = effective_key(&current, suffix);
                    if store.lookup(&key) == Some(text) {
                        tracing::trace!(key = %key, "Reusing existing key");
                        return Ok(Resolution::Matched(key));
                    }
                    State::TryFree
                }
                State::TryFree => {
                    let key = effective_key(&current, suffix);
                    if store.contains_key(&key) {
                        State::TryNumericSuffix
                    } else {
                        match store.find_overlapping(&key) {
                            None => {
                                tracing::trace!(key = %key, "Inserting new key");
                                store.insert(key.clone(), text.to_string());
                                return Ok(Resolution::Inserted(key));
                            }
                            Some(overlap) if rewrites_open => {
                                tracing::debug!(key = %key, overlapping = overlap.key(), "Key overlaps");
                                State::TryOverlapRewrite(overlap.into())
                            }
                            Some(_) => State::TryNumericSuffix,
                        }
                    }
                }
                State::TryOverlapRewrite(kind) => {
                    current = match kind {
                        OverlapKind::Ancestor => format!("{}.{}", QUALIFIER_SEGMENT, current),
                        OverlapKind::Descendant => format!("{}.{}", current, VALUE_SEGMENT),
                    };
                    numeric_base = current.clone();
                    State::TryExact
                }
                State::TryNumericSuffix => {
                    rewrites_open = false;
                    current = format!("{}{}", numeric_base, counter);
                    counter += 1;
                    tracing::debug!(candidate = %current, "Falling back to numbered key");
                    State::TryExact
                }
            };
        }
    }
}
