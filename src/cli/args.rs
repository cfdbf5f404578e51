//! Command-line argument parsing

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// npmluau - Luau aliases for npm dependencies
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "npmluau")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "a utility to manage Luau npm dependencies")]
#[command(long_about = "npmluau generates one require alias per package installed in node_modules, \
inside node_modules/.luau-aliases. Luau entry points are re-exported with their exported types, \
data files are forwarded with a plain require.")]
#[command(after_help = "EXAMPLES:

    # Generate aliases for ./node_modules
    npmluau

    # Generate aliases for another project
    npmluau --target ./packages/game

    # Generate `.lua` alias files
    npmluau --extension lua

    # Keep the Rojo project files shipped by dependencies
    npmluau --keep-rojo-configs

    # Show every skipped package
    npmluau -vv
")]
pub struct Args {
    /// Path where the Luau package is defined
    #[arg(long, value_name = "TARGET", help = "The path where the Luau package is defined (defaults to the current directory)")]
    pub target: Option<PathBuf>,

    /// Name of the install directory
    #[arg(long, value_name = "NAME", help = "Name of the install directory inside the target (default is `node_modules`)")]
    pub modules_folder: Option<String>,

    /// Extension of the generated files
    #[arg(long, value_name = "EXTENSION", help = "The file extension to use when generating module links (default is `luau`)")]
    pub extension: Option<String>,

    /// Increase diagnostics verbosity
    #[arg(short, long, action = ArgAction::Count, help = "Increase diagnostics verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    /// Keep `.luaurc` files of dependencies
    #[arg(long, help = "When specified, the tool will not delete Luau config files (named '.luaurc')")]
    pub keep_luaurc: bool,

    /// Keep Rojo project files of dependencies
    #[arg(long, help = "When specified, the tool will not delete Rojo files (matching '*.project.json')")]
    pub keep_rojo_configs: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .npmluau.toml in the current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.npmluau.toml) in the current directory")]
    pub init: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
