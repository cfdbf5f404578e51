//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::logger::Level;

/// Name of the directory, inside the install directory, receiving the aliases
pub const ALIASES_FOLDER: &str = ".luau-aliases";

/// Main configuration settings for npmluau
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Project root containing the install directory
    pub target: PathBuf,

    /// Name of the install directory inside `target`
    pub modules_folder: String,

    /// Extension of the generated alias files, without the dot
    pub extension: String,

    /// Keep `.luaurc` files shipped by dependencies
    pub keep_luaurc: bool,

    /// Keep `*.project.json` files shipped by dependencies
    pub keep_rojo_configs: bool,

    /// Minimum level of diagnostics
    pub log_level: String,
}

impl Settings {
    /// Directory populated by the package manager
    pub fn install_dir(&self) -> PathBuf {
        self.target.join(&self.modules_folder)
    }

    /// Directory the aliases are generated into
    pub fn output_dir(&self) -> PathBuf {
        self.install_dir().join(ALIASES_FOLDER)
    }

    /// Parsed `log_level`, falling back to the default filter
    pub fn level_filter(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::DEFAULT_FILTER)
    }

    /// Whether the config file pruning step has anything to delete
    pub fn prunes_config_files(&self) -> bool {
        !self.keep_luaurc || !self.keep_rojo_configs
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: PathBuf::from("."),
            modules_folder: "node_modules".to_string(),
            extension: "luau".to_string(),
            keep_luaurc: false,
            keep_rojo_configs: false,
            log_level: "warn".to_string(),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub target: Option<PathBuf>,
    pub modules_folder: Option<String>,
    pub extension: Option<String>,
    pub keep_luaurc: Option<bool>,
    pub keep_rojo_configs: Option<bool>,
    pub log_level: Option<String>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.target.is_some() {
            self.target = other.target;
        }
        if other.modules_folder.is_some() {
            self.modules_folder = other.modules_folder;
        }
        if other.extension.is_some() {
            self.extension = other.extension;
        }
        if other.keep_luaurc.is_some() {
            self.keep_luaurc = other.keep_luaurc;
        }
        if other.keep_rojo_configs.is_some() {
            self.keep_rojo_configs = other.keep_rojo_configs;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(target) = &self.target {
            settings.target = target.clone();
        }
        if let Some(modules_folder) = &self.modules_folder {
            settings.modules_folder = modules_folder.clone();
        }
        if let Some(extension) = &self.extension {
            settings.extension = extension.clone();
        }
        if let Some(keep_luaurc) = self.keep_luaurc {
            settings.keep_luaurc = keep_luaurc;
        }
        if let Some(keep_rojo_configs) = self.keep_rojo_configs {
            settings.keep_rojo_configs = keep_rojo_configs;
        }
        if let Some(log_level) = &self.log_level {
            settings.log_level = log_level.clone();
        }

        settings
    }
}
