//! Context label normalization.
//!
//! Markup element names are collapsed to the semantic role they play in the
//! page, then every label is turned into a lowercase, underscore-joined key
//! segment.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHA_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z]+").unwrap());
static NON_ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z]").unwrap());

/// Semantic role for well-known markup tags.
fn builtin_label(tag: &str) -> Option<&'static str> {
    match tag {
        "p" => Some("paragraph"),
        "a" => Some("link"),
        "ul" | "ol" => Some("list"),
        "li" => Some("item"),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some("heading"),
        _ => None,
    }
}

/// Label normalization table: built-in tag roles plus user overrides.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    overrides: HashMap<String, String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Map a structural label to its semantic role. Unknown labels pass through.
    pub fn normalize<'a>(&'a self, label: &'a str) -> &'a str {
        if let Some(role) = self.overrides.get(label) {
            return role;
        }
        builtin_label(label).unwrap_or(label)
    }
}

/// Insert `_` before every ASCII uppercase letter and lowercase it.
pub fn camel_to_snake(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    for c in label.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Turn one label into a key segment.
///
/// The label is snake-cased and cut to `max_len` characters, then runs of
/// non-letters collapse to single separators and the ends are trimmed.
/// Returns an empty string when nothing alphabetic survives.
pub fn sanitize_segment(label: &str, max_len: usize) -> String {
    let snake = camel_to_snake(label);
    let truncated: String = snake.chars().take(max_len).collect();
    let spaced = NON_ALPHA_RUN.replace_all(&truncated, " ");
    NON_ALPHA
        .replace_all(spaced.trim(), "_")
        .into_owned()
}
