//! Backup and restore arguments

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the 'backup' command
#[derive(Parser, Debug)]
pub struct BackupArgs {
    /// Output file (default: kuma-backup-<timestamp>.tar.gz)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the 'restore' command
#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Backup archive created by 'kumactl backup'
    pub file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}
