//! Command handlers
//!
//! Every command opens a session first (whoami) and stops on a failed
//! connect, so nothing else is requested with a rejected token.

mod export;
mod get;
mod import;
mod resolve;
mod session;
mod system;

use indicatif::ProgressBar;

use crate::cli::{Cli, Command};
use crate::error::Result;
use crate::kuma::Outcome;
use crate::ui::{clear_spinner, finish_spinner};

pub use resolve::match_choice;
pub use session::{open_session, resolve_token, user_label};

/// Run the command selected on the command line
pub async fn run(cli: &Cli) -> Result<()> {
    let (client, whoami) = open_session(cli).await?;

    match &cli.command {
        Command::Connect => {
            session::print_connected(&client, whoami.as_ref());
            Ok(())
        }
        Command::Export { resource } => export::run_export_command(&client, cli, resource).await,
        Command::Get { resource } => get::run_get_command(&client, cli, resource).await,
        Command::Import { resource } => import::run_import_command(&client, cli, resource).await,
        Command::Backup(args) => system::run_backup_command(&client, cli, args).await,
        Command::Restore(args) => system::run_restore_command(&client, cli, args).await,
    }
}

/// Stop the spinner and unwrap the outcome
///
/// The payload of a failed call (such as the pages fetched before a failing
/// one) is dropped.
fn settle<T>(
    spinner: Option<ProgressBar>,
    outcome: Outcome<T>,
    message: impl FnOnce(&T) -> String,
) -> Result<T> {
    match outcome.into_result() {
        Ok(payload) => {
            finish_spinner(spinner, &message(&payload));
            Ok(payload)
        }
        Err(e) => {
            clear_spinner(spinner);
            Err(e)
        }
    }
}
