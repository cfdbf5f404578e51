//! Settings validation

use crate::error::{NpmLuauError, Result};
use crate::models::config::Settings;
use crate::output::logger::Level;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        Self::validate_extension(&settings.extension)?;
        Self::validate_modules_folder(&settings.modules_folder)?;

        settings
            .log_level
            .parse::<Level>()
            .map_err(NpmLuauError::config_error)?;

        Ok(())
    }

    /// The extension is appended to alias names after a dot
    fn validate_extension(extension: &str) -> Result<()> {
        if extension.is_empty() {
            return Err(NpmLuauError::config_error("Extension must not be empty"));
        }
        if extension.starts_with('.') {
            return Err(NpmLuauError::config_error(format!(
                "Extension '{}' must be given without its leading dot",
                extension
            )));
        }
        if has_separator(extension) {
            return Err(NpmLuauError::config_error(format!(
                "Extension '{}' must not contain a path separator",
                extension
            )));
        }

        Ok(())
    }

    /// The modules folder is a single directory name inside the target
    fn validate_modules_folder(modules_folder: &str) -> Result<()> {
        if modules_folder.is_empty() {
            return Err(NpmLuauError::config_error("Modules folder must not be empty"));
        }
        if has_separator(modules_folder) {
            return Err(NpmLuauError::config_error(format!(
                "Modules folder '{}' must be a folder name, not a path",
                modules_folder
            )));
        }

        Ok(())
    }
}

fn has_separator(value: &str) -> bool {
    value.contains('/') || value.contains('\\')
}
