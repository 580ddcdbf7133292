//! Backup and restore command handlers

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::cli::{BackupArgs, Cli, RestoreArgs};
use crate::error::{KumaError, Result};
use crate::kuma::KumaClient;
use crate::ui::{confirm_action, create_spinner};

use super::settle;

/// Default backup file name for a point in time
fn default_backup_path(now: chrono::DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("kuma-backup-{}.tar.gz", now.format("%Y%m%d-%H%M%S")))
}

/// Run the backup command
pub async fn run_backup_command(client: &KumaClient, cli: &Cli, args: &BackupArgs) -> Result<()> {
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_backup_path(Local::now()));

    let spinner = create_spinner("Creating backup...", cli.batch);
    let archive = settle(spinner, client.backup().await, |archive| match archive {
        Some(bytes) => format!("Received {} bytes", bytes.len()),
        None => "Received an empty backup".to_string(),
    })?
    .ok_or_else(|| KumaError::Request("Server returned an empty backup".to_string()))?;

    fs::write(&output_path, &archive).map_err(|e| KumaError::Io {
        message: format!("Cannot write '{}': {}", output_path.display(), e),
    })?;

    println!("Backup saved to {} ({} bytes)", output_path.display(), archive.len());
    Ok(())
}

/// Run the restore command
pub async fn run_restore_command(client: &KumaClient, cli: &Cli, args: &RestoreArgs) -> Result<()> {
    let archive = fs::read(&args.file).map_err(|e| KumaError::Io {
        message: format!("Cannot read '{}': {}", args.file.display(), e),
    })?;

    let prompt = format!(
        "Restore KUMA Core at {} from '{}'? The current configuration will be replaced",
        client.connection().address(),
        args.file.display()
    );
    if !confirm_action(&prompt, cli.batch, args.yes)? {
        if cli.batch {
            return Err(KumaError::Config(
                "Restore needs --yes in batch mode".to_string(),
            ));
        }
        println!("Restore cancelled");
        return Ok(());
    }

    let size = archive.len();
    let spinner = create_spinner(&format!("Uploading {} bytes...", size), cli.batch);
    settle(spinner, client.restore(archive).await, |_| {
        "Restore finished".to_string()
    })?;

    println!("Restored from {}", args.file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_backup_path() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(
            default_backup_path(now),
            PathBuf::from("kuma-backup-20240309-070503.tar.gz")
        );
    }
}
