//! Leading context labels derived from a source file's location.

use std::path::{Component, Path};

pub const DEFAULT_SHARED_MARKER: &str = "shared";

/// Context labels contributed by the file a text was found in.
///
/// Directories after `root_marker` become labels, except the last two path
/// components (the component directory and the file itself). Files living
/// under a shared location, or outside any root, contribute nothing.
///
/// ```
/// use lutkey::core::file_base_path;
///
/// let labels = file_base_path("src/application/settings/Profile/index.jsx", "application", "shared");
/// assert_eq!(labels, vec!["settings"]);
/// ```
pub fn file_base_path(file: impl AsRef<Path>, root_marker: &str, shared_marker: &str) -> Vec<String> {
    let path = file.as_ref();
    let mut parts: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if !shared_marker.is_empty() && parts.iter().any(|part| part.contains(shared_marker)) {
        return Vec::new();
    }

    if let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned())
        && let Some(last) = parts.last_mut()
    {
        *last = stem;
    }

    let Some(start) = parts.iter().position(|part| part == root_marker) else {
        return Vec::new();
    };

    let end = parts.len().saturating_sub(2);
    if start + 1 >= end {
        return Vec::new();
    }
    parts[start + 1..end].to_vec()
}
