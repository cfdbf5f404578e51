//! Command implementations

use std::fs;
use std::sync::Arc;

use super::Args;
use crate::codegen::TypeReexporter;
use crate::config::{cli::CliConfig, load_config, ConfigSource, FileConfig};
use crate::core::{config_file_filter, remove_files, AliasBuilder, BuildOptions};
use crate::error::{handle_error, ErrorSeverity, NpmLuauError, Result, ResultExt};
use crate::models::config::Settings;
use crate::models::package::BuildReport;
use crate::output::logger::{self, Logger};
use crate::output::write_nocheck_luaurc;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Generate the aliases of an install directory
    Generate(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Generate(args)
    }

    /// Execute the command, reporting through the process-wide logger
    pub fn execute(&self) -> Result<()> {
        self.execute_with(logger::global())
    }

    /// Execute the command with an explicit logger
    pub fn execute_with(&self, logger: Arc<Logger>) -> Result<()> {
        match self {
            Command::Generate(args) => {
                self.validate()?;

                let settings = load_config(&CliConfig::from_args(args))?;

                logger.set_level_filter(settings.level_filter());
                logger.debug(format!("settings: {:?}", settings));

                let report = generate(&settings, logger.clone())?;
                logger.info(format!(
                    "wrote {} alias(es) to `{}`",
                    report.written_count(),
                    settings.output_dir().display()
                ));

                Ok(())
            }
            Command::Init => {
                let file_config = FileConfig::new();

                if file_config.is_available() {
                    println!(
                        "Configuration file already exists at: {}",
                        file_config.path().display()
                    );
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                file_config.create_default()?;

                println!(
                    "Created default configuration file at: {}",
                    file_config.path().display()
                );
                Ok(())
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Generate(args) => {
                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(NpmLuauError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }

                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and handle errors
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(_) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                exit_code(err.severity())
            }
        }
    }
}

/// Process exit code for an error that ended the run
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error | ErrorSeverity::Critical => 1,
    }
}

/// Generate aliases, prune dependency config files and write the `.luaurc`.
///
/// The install directory must exist; nothing is touched otherwise.
pub fn generate(settings: &Settings, logger: Arc<Logger>) -> Result<BuildReport> {
    let install_dir = settings.install_dir();

    let metadata = fs::metadata(&install_dir).with_file_context(&install_dir)?;
    if !metadata.is_dir() {
        return Err(NpmLuauError::InstallDirNotFound { path: install_dir });
    }

    let builder = AliasBuilder::new(Arc::new(TypeReexporter::new()), logger.clone());
    let options = BuildOptions {
        output: settings.output_dir(),
        extension: settings.extension.clone(),
    };
    let report = builder.build(&install_dir, &options);

    if settings.prunes_config_files() {
        let keep = config_file_filter(settings.keep_luaurc, settings.keep_rojo_configs)?;
        let removed = remove_files(&install_dir, keep)?;
        logger.debug(format!("removed {} configuration file(s) from dependencies", removed));
    }

    if let Err(err) = write_nocheck_luaurc(&install_dir) {
        if let Some(fatal) = handle_error(err, &logger) {
            return Err(fatal);
        }
    }

    Ok(report)
}
