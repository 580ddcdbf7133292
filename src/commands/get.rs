//! Get command handlers

use log::debug;

use crate::cli::{Cli, GetResource, ListArgs, OutputFormat, ResourceArgs, ResourcesArgs};
use crate::error::{KumaError, Result};
use crate::kuma::{parse_resource_key, KumaClient};
use crate::output::{output_choices, output_raw};
use crate::ui::create_spinner;

use super::settle;

/// Run a 'get' subcommand
pub async fn run_get_command(client: &KumaClient, cli: &Cli, resource: &GetResource) -> Result<()> {
    match resource {
        GetResource::Tenants(args) => get_tenants(client, cli, args).await,
        GetResource::Correlators(args) => get_correlators(client, cli, args).await,
        GetResource::Resources(args) => get_resources(client, cli, args).await,
        GetResource::Resource(args) => get_resource(client, cli, args).await,
    }
}

async fn get_tenants(client: &KumaClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let spinner = create_spinner("Fetching tenants...", cli.batch);
    let tenants = settle(spinner, client.list_tenants().await, |t| {
        format!("Found {} tenants", t.len())
    })?;
    output_choices("NAME", "ID", &tenants, args.output)
}

async fn get_correlators(client: &KumaClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let spinner = create_spinner("Fetching correlators...", cli.batch);
    let correlators = settle(spinner, client.list_correlators().await, |c| {
        format!("Found {} correlators", c.len())
    })?;
    output_choices("CORRELATOR;TENANT", "RESOURCE ID", &correlators, args.output)
}

async fn get_resources(client: &KumaClient, cli: &Cli, args: &ResourcesArgs) -> Result<()> {
    let kind = args.kind.map(|k| k.as_str());
    debug!("Searching resources: kind={:?}, name={:?}", kind, args.name);

    let spinner = create_spinner("Searching resources...", cli.batch);
    let resources = settle(
        spinner,
        client.list_resources(kind, args.name.as_deref()).await,
        |r| format!("Found {} resources", r.len()),
    )?;
    output_choices("NAME; TENANT", "KIND;ID", &resources, args.output)
}

/// Reject list-only formats for a single resource document
fn document_format(format: OutputFormat) -> Result<OutputFormat> {
    if format.is_structured() {
        Ok(format)
    } else {
        Err(KumaError::Config(format!(
            "Output format '{}' is not available for a single resource; use json or yaml",
            format
        )))
    }
}

async fn get_resource(client: &KumaClient, cli: &Cli, args: &ResourceArgs) -> Result<()> {
    let format = document_format(args.output)?;
    let (kind, id) = match &args.id {
        Some(id) => (args.key.as_str(), id.as_str()),
        None => parse_resource_key(&args.key)?,
    };

    let spinner = create_spinner(&format!("Fetching {} {}...", kind, id), cli.batch);
    let document = settle(spinner, client.get_resource(kind, id).await, |_| {
        format!("Fetched {} {}", kind, id)
    })?;
    output_raw(&document, format)
}
