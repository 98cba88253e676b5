//! Command-line interface implementation for cpm.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for cpm.
#[derive(Parser, Debug)]
#[command(author, version, about = "cpm: create project modules from template structures", long_about = None)]
pub struct Args {
    /// Scaffold type declared under "types" in the configuration
    #[arg(value_name = "TYPE_ID")]
    pub type_id: Option<String>,

    /// Slash-delimited values for the type's parameters, e.g. "user/profile-card"
    #[arg(value_name = "TYPE_VALUE")]
    pub type_value: Option<String>,

    /// Path to the configuration file.
    /// Defaults to cpm.config.json next to the executable, then in the project directory.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory that template and destination roots are resolved against
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Never prompt. Missing or invalid arguments become errors.
    #[arg(short, long)]
    pub non_interactive: bool,

    /// Print the configured types and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling (usage on stderr, status 2) for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
