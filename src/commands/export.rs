//! Export command handlers

use clap::ValueEnum;
use log::debug;

use crate::cli::{
    AlertExportArgs, AlertStatus, Cli, ExportResource, IncidentExportArgs, IncidentStatus,
    RuleExportArgs,
};
use crate::error::{KumaError, Result};
use crate::kuma::{EventQuery, KumaClient};
use crate::output::write_export;
use crate::ui::create_spinner;

use super::resolve::{resolve_correlator, resolve_tenant};
use super::settle;

/// Run an 'export' subcommand
pub async fn run_export_command(
    client: &KumaClient,
    cli: &Cli,
    resource: &ExportResource,
) -> Result<()> {
    match resource {
        ExportResource::Alerts(args) => export_alerts(client, cli, args).await,
        ExportResource::Incidents(args) => export_incidents(client, cli, args).await,
        ExportResource::Rules(args) => export_rules(client, cli, args).await,
    }
}

/// Alert filters; no status given means every status
pub fn alert_query(args: &AlertExportArgs) -> EventQuery {
    let statuses = if args.status.is_empty() {
        AlertStatus::value_variants()
    } else {
        args.status.as_slice()
    };
    EventQuery {
        statuses: statuses.iter().map(|s| s.as_str().to_string()).collect(),
        time_field: args.time_field.map(|f| f.as_str().to_string()),
        from: args.from,
        to: args.to,
    }
}

/// Incident filters; no status given means every status
pub fn incident_query(args: &IncidentExportArgs) -> EventQuery {
    let statuses = if args.status.is_empty() {
        IncidentStatus::value_variants()
    } else {
        args.status.as_slice()
    };
    EventQuery {
        statuses: statuses.iter().map(|s| s.as_str().to_string()).collect(),
        time_field: args.time_field.map(|f| f.as_str().to_string()),
        from: args.from,
        to: args.to,
    }
}

async fn export_alerts(client: &KumaClient, cli: &Cli, args: &AlertExportArgs) -> Result<()> {
    let query = alert_query(args);
    debug!("Alert query: {:?}", query);

    let spinner = create_spinner("Fetching alerts...", cli.batch);
    let rows = settle(spinner, client.list_alerts(&query).await, |rows| {
        format!("Fetched {} alerts", rows.len())
    })?;

    let written = write_export(&rows, args.output.as_deref())?;
    if let Some(path) = &args.output {
        println!("Exported {} alerts to {}", written, path.display());
    }
    Ok(())
}

async fn export_incidents(
    client: &KumaClient,
    cli: &Cli,
    args: &IncidentExportArgs,
) -> Result<()> {
    let query = incident_query(args);
    debug!("Incident query: {:?}", query);

    let spinner = create_spinner("Fetching incidents...", cli.batch);
    let rows = settle(spinner, client.list_incidents(&query).await, |rows| {
        format!("Fetched {} incidents", rows.len())
    })?;

    let written = write_export(&rows, args.output.as_deref())?;
    if let Some(path) = &args.output {
        println!("Exported {} incidents to {}", written, path.display());
    }
    Ok(())
}

async fn export_rules(client: &KumaClient, cli: &Cli, args: &RuleExportArgs) -> Result<()> {
    let rows = match (&args.correlator, &args.tenant) {
        (Some(correlator), _) => {
            let id = resolve_correlator(client, correlator, cli.batch).await?;
            let spinner = create_spinner("Fetching correlator rules...", cli.batch);
            settle(spinner, client.rules_by_correlator(&id).await, |rows| {
                format!("Fetched {} rules", rows.len())
            })?
        }
        (None, Some(tenant)) => {
            let id = resolve_tenant(client, tenant, cli.batch).await?;
            let spinner = create_spinner("Fetching tenant rules...", cli.batch);
            settle(spinner, client.rules_by_tenant(&id).await, |rows| {
                format!("Fetched {} rules", rows.len())
            })?
        }
        (None, None) => {
            return Err(KumaError::Config(
                "Rule export needs --correlator or --tenant".to_string(),
            ))
        }
    };

    let written = write_export(&rows, args.output.as_deref())?;
    if let Some(path) = &args.output {
        println!("Exported {} rules to {}", written, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AlertTimeField, IncidentTimeField};
    use chrono::NaiveDate;

    fn alert_args(status: Vec<AlertStatus>) -> AlertExportArgs {
        AlertExportArgs {
            status,
            time_field: None,
            from: None,
            to: None,
            output: None,
        }
    }

    #[test]
    fn test_alert_query_defaults_to_all_statuses() {
        let query = alert_query(&alert_args(vec![]));
        assert_eq!(query.statuses, vec!["new", "assigned", "closed", "escalated"]);
        assert!(query.time_field.is_none());
    }

    #[test]
    fn test_alert_query_with_range() {
        let from = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut args = alert_args(vec![AlertStatus::Closed]);
        args.time_field = Some(AlertTimeField::LastSeen);
        args.from = Some(from);

        let query = alert_query(&args);
        assert_eq!(query.statuses, vec!["closed"]);
        assert_eq!(query.time_field.as_deref(), Some("lastSeen"));
        assert_eq!(query.from, Some(from));
        assert!(query.to.is_none());
    }

    #[test]
    fn test_incident_query_defaults_to_all_statuses() {
        let args = IncidentExportArgs {
            status: vec![],
            time_field: Some(IncidentTimeField::CreatedAt),
            from: None,
            to: None,
            output: None,
        };
        let query = incident_query(&args);
        assert_eq!(query.statuses, vec!["open", "assigned", "closed"]);
        assert_eq!(query.time_field.as_deref(), Some("createdAt"));
    }

    #[tokio::test]
    async fn test_rule_export_without_source_is_config_error() {
        use clap::Parser;

        let cli = Cli::parse_from(["kumactl", "--batch", "connect"]);
        let client = KumaClient::test_client("http://127.0.0.1:9");
        let args = RuleExportArgs {
            correlator: None,
            tenant: None,
            output: None,
        };

        let err = export_rules(&client, &cli, &args).await.unwrap_err();

        assert!(matches!(err, KumaError::Config(_)));
        assert!(err.to_string().contains("--correlator or --tenant"));
    }
}
