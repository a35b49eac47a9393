//! Identifier helpers.

use std::path::Path;

/// Names with a leading or trailing underscore are implementation-reserved
/// and never bound.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    name.starts_with('_') || name.ends_with('_')
}

/// Whether a declaration name may appear in generated bindings.
#[must_use]
pub fn is_bindable(name: Option<&str>) -> bool {
    name.is_some_and(|name| !name.is_empty() && !is_reserved(name))
}

/// C identifier derived from an input file's base name.
///
/// `ase/engine.cc` → `engine_cc`.
#[must_use]
pub fn file_identifier(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
