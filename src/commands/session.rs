//! Session setup: token resolution and the initial connect

use std::io::IsTerminal;
use std::time::Duration;

use log::{debug, info};
use serde_json::Value;

use crate::cli::Cli;
use crate::config::env;
use crate::error::{KumaError, Result};
use crate::kuma::{Connection, KumaClient};
use crate::ui::{create_spinner, prompt_token};

use super::settle;

/// Address used for the connection record when only a base URL is given
const PLACEHOLDER_ADDRESS: &str = "localhost";

/// Pick the API token from the command line/environment, or prompt for it
///
/// The prompt is only shown when not in batch mode and stdin is a terminal.
pub fn resolve_token(token: Option<&str>, batch: bool) -> Result<String> {
    if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
        debug!("Using token from command line or {}", env::TOKEN);
        return Ok(token.to_string());
    }
    if !batch && std::io::stdin().is_terminal() {
        return prompt_token();
    }
    Err(KumaError::TokenNotFound(format!(
        "No API token given. Use --token or set {}",
        env::TOKEN
    )))
}

/// Build the client from the global options
fn build_client(cli: &Cli, token: &str) -> Result<KumaClient> {
    if let Some(base_url) = &cli.base_url {
        let address = cli.address.as_deref().unwrap_or(PLACEHOLDER_ADDRESS);
        let connection = Connection::new(address, &cli.port, token)?;
        debug!("Using base URL override: {}", base_url);
        return Ok(KumaClient::with_base_url(
            connection,
            base_url,
            Duration::from_secs(cli.timeout),
        ));
    }

    let address = cli.address.as_deref().ok_or_else(|| {
        KumaError::Config(format!(
            "No KUMA Core address given. Use --address or set {}",
            env::ADDRESS
        ))
    })?;
    let connection = Connection::new(address, &cli.port, token)?;
    Ok(KumaClient::new(connection, Duration::from_secs(cli.timeout)))
}

/// Connect to KUMA Core and verify the token
///
/// Returns the client and the current user document.
pub async fn open_session(cli: &Cli) -> Result<(KumaClient, Option<Value>)> {
    let token = resolve_token(cli.token.as_deref(), cli.batch)?;
    let client = build_client(cli, &token)?;
    let target = format!(
        "{}:{}",
        client.connection().address(),
        client.connection().port()
    );

    let spinner = create_spinner(&format!("Connecting to {}...", target), cli.batch);
    let whoami = settle(spinner, client.connect().await, |_| {
        format!("Connected to {}", target)
    })?;
    info!("Connected to {}", target);

    Ok((client, whoami))
}

/// Login or name of the current user, if the server reported one
pub fn user_label(whoami: &Value) -> Option<&str> {
    ["login", "name", "email"]
        .iter()
        .find_map(|key| whoami.get(*key).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
}

pub(super) fn print_connected(client: &KumaClient, whoami: Option<&Value>) {
    let connection = client.connection();
    println!("Status: OK");
    println!("Server: {}:{}", connection.address(), connection.port());
    if let Some(user) = whoami.and_then(user_label) {
        println!("User:   {}", user);
    }
}
