//! Configuration management

use crate::types::DriftError;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for drift
#[derive(Debug, Parser)]
#[command(
    name = "drift",
    version,
    about = "Stage changed files between two directory trees into a diff directory"
)]
pub struct Cli {
    /// Source directory for comparison
    #[arg(long = "srcdir", value_name = "DIR")]
    pub srcdir: String,

    /// Target directory for comparison
    #[arg(long = "targetdir", value_name = "DIR")]
    pub targetdir: String,

    /// Directory that receives the staged diff files
    #[arg(long = "diffdir", value_name = "DIR")]
    pub diffdir: String,

    /// Print one line per copied file
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Global configuration for one sync run
///
/// Immutable once constructed. The core never reads process-wide argument
/// state; it only ever sees this value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source directory (the authoritative, newer tree)
    pub source: PathBuf,

    /// Target directory (the prior state; only ever gains new directories)
    pub target: PathBuf,

    /// Diff output directory (receives the staging tree)
    pub diff_dir: PathBuf,

    /// Per-file copy reporting
    pub verbose: bool,
}

impl TryFrom<Cli> for Config {
    type Error = DriftError;

    /// Validate the collaborator contract: all three paths non-empty.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.srcdir.is_empty() {
            return Err(DriftError::Config("parameter 'srcdir' is empty".to_string()));
        }
        if cli.targetdir.is_empty() {
            return Err(DriftError::Config(
                "parameter 'targetdir' is empty".to_string(),
            ));
        }
        if cli.diffdir.is_empty() {
            return Err(DriftError::Config(
                "parameter 'diffdir' is empty".to_string(),
            ));
        }

        Ok(Config {
            source: PathBuf::from(cli.srcdir),
            target: PathBuf::from(cli.targetdir),
            diff_dir: PathBuf::from(cli.diffdir),
            verbose: cli.verbose,
        })
    }
}
