use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::UploadOutcome;

/// PyInstaller action - validate inputs, normalize options and build executables
#[derive(Parser, Debug)]
#[command(name = "pyinstaller-action")]
#[command(about = "Input validation and build driver for the PyInstaller GitHub Action")]
#[command(version)]
pub struct Cli {
    /// Read inputs from a JSON file; INPUT_* environment variables override it
    #[arg(long, global = true, value_name = "FILE")]
    pub inputs: Option<PathBuf>,

    /// Print the commands that would run without running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check inputs before any environment setup
    Validate,
    /// Publish normalized options, the spec path and the artifact name as step outputs
    Normalize,
    /// Install PyInstaller and requirements, then build the executable
    Build,
    /// Publish `is_uploaded` from the upload step's outcome
    ReportUpload {
        /// Outcome of the upload step (success, failure, cancelled, skipped)
        #[arg(long)]
        outcome: UploadOutcome,
    },
    /// Validate, normalize and build in one go
    Run,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
