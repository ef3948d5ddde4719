//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/msgtree/msgtree.toml`
//! 3. Environment variables: `MSGTREE_*` prefix
//! 4. Command line flags (applied by the binary)

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// When to emit terminal color codes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow NO_COLOR / CLICOLOR / CLICOLOR_FORCE
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Install this mode as the process-wide `colored` policy.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(name)
    }
}

/// Unified configuration for msgtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Color policy for rendered trees
    pub color: ColorMode,
}

/// Get the XDG config directory for msgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "msgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("msgtree.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from defaults, the global config file and `MSGTREE_*` variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `config_file` instead of the global config path.
    ///
    /// A missing file is skipped; a malformed one is an error.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("color", defaults.color.to_string())
            .map_err(config_err)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(false));
        }

        // MSGTREE_COLOR, with "__" reserved for nested keys
        builder = builder.add_source(
            Environment::with_prefix("MSGTREE")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Apply command line overrides on top of loaded settings.
    pub fn with_color(mut self, color: Option<ColorMode>) -> Self {
        if let Some(color) = color {
            self.color = color;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.color, ColorMode::Auto);
    }

    #[test]
    fn test_with_color_overrides_only_when_given() {
        let settings = Settings::default().with_color(None);
        assert_eq!(settings.color, ColorMode::Auto);
        let settings = settings.with_color(Some(ColorMode::Never));
        assert_eq!(settings.color, ColorMode::Never);
    }

    #[test]
    fn test_global_config_path_file_name() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("msgtree.toml"));
        }
    }
}
