//! External C++ parser configuration.

use castbind_ast::CastXml;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_program() -> String {
    CastXml::default().program
}

fn default_std() -> String {
    CastXml::default().std
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CastXmlConfig {
    /// Parser executable, looked up on `PATH` unless absolute.
    #[serde(default = "default_program")]
    pub program: String,

    /// Language standard (e.g., `gnu++17`).
    #[serde(default = "default_std")]
    pub std: String,

    /// Include directories, passed as `-I <dir>` in order.
    #[serde(default)]
    pub includes: Vec<String>,

    /// Extra arguments placed before the input file (e.g., `-DNDEBUG`).
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for CastXmlConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            std: default_std(),
            includes: Vec::new(),
            extra_args: Vec::new(),
        }
    }
}

impl CastXmlConfig {
    #[must_use]
    pub fn to_parser(&self) -> CastXml {
        CastXml {
            program: self.program.clone(),
            std: self.std.clone(),
            includes: self.includes.iter().map(PathBuf::from).collect(),
            extra_args: self.extra_args.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_parser_defaults() {
        assert_eq!(CastXmlConfig::default().to_parser(), CastXml::default());
    }

    #[test]
    fn includes_become_paths() {
        let config = CastXmlConfig {
            includes: vec!["ase".to_string(), "/usr/include/glib-2.0".to_string()],
            ..CastXmlConfig::default()
        };
        assert_eq!(
            config.to_parser().includes,
            vec![PathBuf::from("ase"), PathBuf::from("/usr/include/glib-2.0")]
        );
    }
}
