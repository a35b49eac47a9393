//! Per-file generation statistics.

use serde::Serialize;

/// What one file's generation emitted and left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub file: String,
    pub namespaces: usize,
    pub enums: usize,
    pub classes: usize,
    pub plain_data_classes: usize,
    pub fields: usize,
    pub methods: usize,
    pub bases: usize,
    /// Method names dropped as ambiguous overload sets.
    pub duplicates: usize,
    /// Classes skipped for reserved names or foreign source files.
    pub skipped_classes: usize,
}
