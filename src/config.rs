//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orggen/orggen.toml`
//! 3. Local config: `<dir>/orggen.toml` for an explicitly given directory
//! 4. Environment variables: `ORGGEN_*` prefix, nested keys joined by `__`
//!    (e.g. `ORGGEN_FLEXIBLE__TOTAL=80`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::error::GenResult;
use crate::domain::params::{GenerationParams, Model};

/// Defaults for the fixed level count model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FixedDefaults {
    pub total: usize,
    pub levels: usize,
    pub max_reports: usize,
}

impl Default for FixedDefaults {
    fn default() -> Self {
        Self {
            total: 15,
            levels: 3,
            max_reports: 3,
        }
    }
}

/// Defaults for the flexible ratio model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlexibleDefaults {
    pub total: usize,
    pub ratio: usize,
    pub min: usize,
    pub max: usize,
}

impl Default for FlexibleDefaults {
    fn default() -> Self {
        Self {
            total: 50,
            ratio: 4,
            min: 2,
            max: 6,
        }
    }
}

/// Defaults for the strict ratio model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StrictDefaults {
    pub total: usize,
    pub ratio: usize,
}

impl Default for StrictDefaults {
    fn default() -> Self {
        Self {
            total: 13,
            ratio: 3,
        }
    }
}

/// Merged settings for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Model tag used when no generation subcommand is given
    pub default_model: String,
    pub fixed: FixedDefaults,
    pub flexible: FlexibleDefaults,
    pub strict: StrictDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_model: "flexible".to_string(),
            fixed: FixedDefaults::default(),
            flexible: FlexibleDefaults::default(),
            strict: StrictDefaults::default(),
        }
    }
}

impl Settings {
    /// Global config file path, when a home directory is resolvable.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "orggen").map(|dirs| dirs.config_dir().join("orggen.toml"))
    }

    /// Loads settings with layered precedence.
    ///
    /// `local_dir`, when given, overlays an `orggen.toml` found in that
    /// directory on top of the global config; environment variables win
    /// over both.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                builder = builder.add_source(File::from(global));
            }
        }

        if let Some(dir) = local_dir {
            let local = dir.join("orggen.toml");
            if local.exists() {
                builder = builder.add_source(File::from(local));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ORGGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Generation parameters for the configured default model.
    ///
    /// Fails with an unknown-model error for tags outside the closed set,
    /// before any tree construction.
    pub fn default_params(&self) -> GenResult<GenerationParams> {
        let model: Model = self.default_model.parse()?;
        Ok(self.params_for(model))
    }

    /// Configured default parameters for `model`.
    pub fn params_for(&self, model: Model) -> GenerationParams {
        match model {
            Model::FixedLevels => GenerationParams::FixedLevels {
                total: self.fixed.total,
                levels: self.fixed.levels,
                max_reports: self.fixed.max_reports,
            },
            Model::Flexible => GenerationParams::Flexible {
                total: self.flexible.total,
                ratio: self.flexible.ratio,
                min: self.flexible.min,
                max: self.flexible.max,
            },
            Model::Strict => GenerationParams::Strict {
                total: self.strict.total,
                ratio: self.strict.ratio,
            },
        }
    }
}
