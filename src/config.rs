//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/scenetree/scenetree.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `SCENETREE_*` prefix, `__` between nested keys
//!    (`SCENETREE_PATH__DELIMITER`, `SCENETREE_PATH__PREFIX`)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::PathFormat;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("configuration error: {message}")]
    Load { message: String },
}

fn config_err(e: impl std::fmt::Display) -> SettingsError {
    SettingsError::Load {
        message: e.to_string(),
    }
}

/// Unified configuration for scenetree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Default full path format
    pub path: PathFormat,
}

/// Get the XDG config directory for scenetree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "scenetree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("scenetree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `local` is required to exist when given; the global file is optional.
    pub fn load(local: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_layers(global_config_path().as_deref(), local)
    }

    /// Load settings from explicit global and local files plus the environment.
    pub fn load_layers(global: Option<&Path>, local: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_from_sources(global, local, None)
    }

    /// Like [`Settings::load_layers`], but reads the `SCENETREE_*` overrides
    /// from `vars` instead of the process environment.
    pub fn load_layers_with_vars<I, K, V>(
        global: Option<&Path>,
        local: Option<&Path>,
        vars: I,
    ) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::load_from_sources(global, local, Some(vars))
    }

    #[instrument(level = "debug", skip(vars))]
    fn load_from_sources(
        global: Option<&Path>,
        local: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("path.delimiter", defaults.path.delimiter)
            .map_err(config_err)?
            .set_default("path.prefix", defaults.path.prefix)
            .map_err(config_err)?;

        if let Some(global_path) = global {
            builder = builder.add_source(
                File::from(global_path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(SettingsError::Load {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            builder = builder.add_source(
                File::from(local_path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("SCENETREE")
                .prefix_separator("_")
                .separator("__")
                .source(vars),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!("settings: {:?}", settings);
        Ok(settings)
    }

    /// Render the settings as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string(self).map_err(config_err)
    }
}
