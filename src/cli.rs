//! Command-line interface implementation for retemplate.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for retemplate.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "retemplate: turn a python template checkout into a named project",
    long_about = None
)]
pub struct Args {
    /// Template checkout to customize
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Accept every default without prompting
    #[arg(short = 'y', long)]
    pub defaults: bool,

    /// Read preloaded answers as JSON from stdin
    #[arg(short, long, conflicts_with = "answers")]
    pub stdin: bool,

    /// Read preloaded answers from a JSON or YAML file
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Bypass commit hooks when creating the initial commit
    #[arg(long)]
    pub no_verify: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// Exits with clap's default error handling on invalid arguments.
pub fn get_args() -> Args {
    Args::parse()
}
