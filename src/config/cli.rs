//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::PartialSettings;
use crate::output::logger::Level;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub target: Option<PathBuf>,
    pub modules_folder: Option<String>,
    pub extension: Option<String>,
    pub verbose: u8,
    pub keep_luaurc: bool,
    pub keep_rojo_configs: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        let cli_args = CliArgs {
            target: args.target.clone(),
            modules_folder: args.modules_folder.clone(),
            extension: args.extension.clone(),
            verbose: args.verbose,
            keep_luaurc: args.keep_luaurc,
            keep_rojo_configs: args.keep_rojo_configs,
            config: args.config.clone(),
        };

        Self::new(cli_args)
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            target: self.args.target.clone(),
            modules_folder: self.args.modules_folder.clone(),
            extension: self.args.extension.clone(),
            ..Default::default()
        };

        // Flags can only turn a behavior on, an absent flag defers to other sources
        if self.args.keep_luaurc {
            settings.keep_luaurc = Some(true);
        }

        if self.args.keep_rojo_configs {
            settings.keep_rojo_configs = Some(true);
        }

        if self.args.verbose > 0 {
            let level = Level::from_verbosity(self.args.verbose);
            settings.log_level = Some(level.name().to_lowercase());
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
