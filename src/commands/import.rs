//! Import command handlers

use std::fs;

use log::info;

use crate::cli::{Cli, ImportAssetsArgs, ImportResource};
use crate::error::{KumaError, Result};
use crate::kuma::{parse_assets, KumaClient};
use crate::ui::create_spinner;

use super::resolve::resolve_tenant;
use super::settle;

/// Run an 'import' subcommand
pub async fn run_import_command(
    client: &KumaClient,
    cli: &Cli,
    resource: &ImportResource,
) -> Result<()> {
    match resource {
        ImportResource::Assets(args) => import_assets(client, cli, args).await,
    }
}

async fn import_assets(client: &KumaClient, cli: &Cli, args: &ImportAssetsArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file).map_err(|e| KumaError::Io {
        message: format!("Cannot read '{}': {}", args.file.display(), e),
    })?;
    let assets = parse_assets(&text)?;
    let tenant_id = resolve_tenant(client, &args.tenant, cli.batch).await?;

    let spinner = create_spinner(&format!("Importing {} assets...", assets.len()), cli.batch);
    let details = settle(spinner, client.import_assets(&assets, &tenant_id).await, |_| {
        "Assets imported".to_string()
    })?;

    println!("Imported {} assets into tenant {}", assets.len(), tenant_id);
    if let Some(details) = details {
        info!("Import details: {}", details);
        println!("Details: {}", details);
    }
    Ok(())
}
