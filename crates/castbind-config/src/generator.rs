//! Binding generator configuration.

use castbind_codegen::GeneratorOptions;
use castbind_codegen::counter::DEFAULT_START;
use castbind_codegen::emit::DEFAULT_FUNCTION_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

const fn default_counter_start() -> u64 {
    DEFAULT_START
}

const fn default_restrict_to_input() -> bool {
    true
}

fn default_function_prefix() -> String {
    DEFAULT_FUNCTION_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Top-level C++ namespaces to bind.
    #[serde(default)]
    pub namespaces: Vec<String>,

    /// Bind only classes declared in the input file itself, not in headers
    /// it includes.
    #[serde(default = "default_restrict_to_input")]
    pub restrict_to_input: bool,

    /// First identifier suffix of the run.
    #[serde(default = "default_counter_start")]
    pub counter_start: u64,

    /// Prefix of each generated registration function name.
    #[serde(default = "default_function_prefix")]
    pub function_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespaces: Vec::new(),
            restrict_to_input: default_restrict_to_input(),
            counter_start: default_counter_start(),
            function_prefix: default_function_prefix(),
        }
    }
}

impl GeneratorConfig {
    /// Without namespaces every generated function is empty.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.namespaces.is_empty()
    }

    /// Generator options for one input; `input` is only used when
    /// `restrict_to_input` is set and should already be absolute.
    #[must_use]
    pub fn options_for(&self, input: Option<PathBuf>) -> GeneratorOptions {
        GeneratorOptions {
            namespaces: self.namespaces.clone(),
            restrict_to: input.filter(|_| self.restrict_to_input),
            function_prefix: self.function_prefix.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.function_prefix.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::InvalidValue {
                field: "generator.function_prefix".to_string(),
                reason: format!("'{}' is not a C identifier", self.function_prefix),
            });
        }
        if let Some(ns) = self
            .namespaces
            .iter()
            .find(|ns| ns.is_empty() || ns.contains("::"))
        {
            return Err(ConfigError::InvalidValue {
                field: "generator.namespaces".to_string(),
                reason: format!("'{ns}' is not a top-level namespace name"),
            });
        }
        Ok(())
    }
}
