//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NpmLuauError, Result};
use crate::models::config::PartialSettings;
use crate::output::logger::Level;

/// Configuration file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".npmluau.toml";

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(NpmLuauError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| NpmLuauError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| NpmLuauError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(target) = &settings.target {
        if target.as_os_str().is_empty() {
            return Err(NpmLuauError::config_error(format!(
                "Invalid empty target in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(extension) = &settings.extension {
        if extension.is_empty() {
            return Err(NpmLuauError::config_error(format!(
                "Invalid empty extension in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(modules_folder) = &settings.modules_folder {
        if modules_folder.is_empty() {
            return Err(NpmLuauError::config_error(format!(
                "Invalid empty modules_folder in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(log_level) = &settings.log_level {
        log_level.parse::<Level>().map_err(|e| {
            NpmLuauError::config_error(format!("{} in config file: {}", e, path.display()))
        })?;
    }

    Ok(())
}

/// Candidate configuration files, most specific first
pub fn default_config_paths(working_dir: &Path, config_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![working_dir.join(LOCAL_CONFIG_FILE)];

    if let Some(config_dir) = config_dir {
        paths.push(config_dir.join("npmluau").join("config.toml"));
    }

    paths
}

/// Load the first configuration file found among `paths`
pub fn find_config_in(paths: &[PathBuf]) -> Result<Option<PartialSettings>> {
    for path in paths {
        if path.is_file() {
            return Ok(Some(parse_config_file(path)?));
        }
    }

    Ok(None)
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let config_dir = dirs::config_dir();
    find_config_in(&default_config_paths(Path::new("."), config_dir.as_deref()))
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(NpmLuauError::io_error)?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).map_err(NpmLuauError::io_error)?;

    Ok(())
}
