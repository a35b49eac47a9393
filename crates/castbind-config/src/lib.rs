//! # castbind-config
//!
//! Layered configuration loading for castbind using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CASTBIND_*` prefix, `__` as separator)
//! 2. Project-level `castbind.toml` (or an explicit `--config` file)
//! 3. User-level `~/.config/castbind/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top of the loaded value by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CASTBIND_CASTXML__PROGRAM` -> `castxml.program` and
//! `CASTBIND_GENERATOR__NAMESPACES="[Ase, Bse]"` -> `generator.namespaces`.
//!
//! # Usage
//!
//! ```no_run
//! use castbind_config::CastbindConfig;
//!
//! let config = CastbindConfig::load_with_dotenv(None).expect("config");
//! let parser = config.castxml.to_parser();
//! println!("parser: {}", parser.program);
//! ```

mod castxml;
mod error;
mod generator;

pub use castxml::CastXmlConfig;
pub use error::ConfigError;
pub use generator::GeneratorConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = "castbind.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CastbindConfig {
    #[serde(default)]
    pub castxml: CastXmlConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl CastbindConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `file` replaces the project-local `castbind.toml` when given.
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if the merged values are unusable.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file, if one exists.
    ///
    /// # Errors
    /// As [`CastbindConfig::load`].
    pub fn load_with_dotenv(file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(file)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer more providers.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local or explicit config
        let local_path = file.map_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CASTBIND_").split("__"))
    }

    /// Reject values that cannot produce a working run.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.castxml.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "castxml.program".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        self.generator.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("castbind").join("config.toml"))
    }
}
