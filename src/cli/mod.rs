//! CLI argument parsing

mod common;
mod enums;
mod export;
mod get;
mod import;
mod system;

use clap::{Parser, Subcommand};

use crate::config::{defaults, env};

pub use common::OutputFormat;
pub use enums::{AlertStatus, AlertTimeField, IncidentStatus, IncidentTimeField, ResourceKind};
pub use export::{
    parse_datetime, AlertExportArgs, ExportResource, IncidentExportArgs, RuleExportArgs,
};
pub use get::{GetResource, ListArgs, ResourceArgs, ResourcesArgs};
pub use import::{ImportAssetsArgs, ImportResource};
pub use system::{BackupArgs, RestoreArgs};

/// KUMA Core administration CLI
#[derive(Parser, Debug)]
#[command(name = "kumactl")]
#[command(version)]
#[command(about = "Export alerts, incidents and rules, import assets, back up and restore KUMA Core")]
pub struct Cli {
    /// KUMA Core address (host name or IP)
    #[arg(short = 'a', long, env = env::ADDRESS, global = true)]
    pub address: Option<String>,

    /// KUMA Core API port
    #[arg(short = 'p', long, env = env::PORT, default_value = defaults::PORT, global = true)]
    pub port: String,

    /// API token (prompted for when missing and running interactively)
    #[arg(short = 't', long, env = env::TOKEN, hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = defaults::TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode: no spinners, no prompts
    #[arg(short = 'b', long, global = true)]
    pub batch: bool,

    /// Full API base URL, replacing https://<address>:<port>/api/v3
    #[arg(long, env = env::BASE_URL, hide = true, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the connection and the API token
    Connect,

    /// Export alerts, incidents or correlation rules to CSV
    Export {
        #[command(subcommand)]
        resource: ExportResource,
    },

    /// List tenants, correlators and resources, or show one resource
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Import data from files
    Import {
        #[command(subcommand)]
        resource: ImportResource,
    },

    /// Download a backup of the Core configuration
    Backup(BackupArgs),

    /// Restore the Core configuration from a backup
    Restore(RestoreArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["kumactl", "-a", "kuma.local", "-t", "secret"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["connect"]);
        assert_eq!(cli.address.as_deref(), Some("kuma.local"));
        assert_eq!(cli.token.as_deref(), Some("secret"));
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.timeout, defaults::TIMEOUT_SECS);
        assert!(!cli.batch);
        assert!(matches!(cli.command, Command::Connect));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["kumactl", "connect", "--address", "10.0.0.5", "-p", "7224", "--batch"]);
        assert_eq!(cli.address.as_deref(), Some("10.0.0.5"));
        assert_eq!(cli.port, "7224");
        assert!(cli.batch);
    }

    #[test]
    fn test_export_alerts() {
        let cli = parse(&[
            "export", "alerts", "-s", "new,closed", "--time-field", "firstSeen",
            "--from", "2024-03-01", "--to", "2024-03-31T23:59:59", "-o", "alerts.csv",
        ]);
        let Command::Export {
            resource: ExportResource::Alerts(args),
        } = cli.command
        else {
            panic!("Expected export alerts");
        };
        assert_eq!(args.status, vec![AlertStatus::New, AlertStatus::Closed]);
        assert_eq!(args.time_field, Some(AlertTimeField::FirstSeen));
        assert_eq!(args.from.unwrap().to_string(), "2024-03-01 00:00:00");
        assert_eq!(args.to.unwrap().to_string(), "2024-03-31 23:59:59");
        assert_eq!(args.output, Some(PathBuf::from("alerts.csv")));
    }

    #[test]
    fn test_export_alerts_range_requires_time_field() {
        let result = Cli::try_parse_from(["kumactl", "export", "alerts", "--from", "2024-03-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_incidents_status() {
        let cli = parse(&["export", "incidents", "--status", "open", "--status", "assigned"]);
        let Command::Export {
            resource: ExportResource::Incidents(args),
        } = cli.command
        else {
            panic!("Expected export incidents");
        };
        assert_eq!(args.status, vec![IncidentStatus::Open, IncidentStatus::Assigned]);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_export_rules_needs_exactly_one_source() {
        assert!(Cli::try_parse_from(["kumactl", "export", "rules"]).is_err());
        assert!(
            Cli::try_parse_from(["kumactl", "export", "rules", "-c", "c-1", "--tenant", "t-1"]).is_err()
        );

        let cli = parse(&["export", "rules", "--correlator", "c-1"]);
        let Command::Export {
            resource: ExportResource::Rules(args),
        } = cli.command
        else {
            panic!("Expected export rules");
        };
        assert_eq!(args.correlator.as_deref(), Some("c-1"));
        assert!(args.tenant.is_none());
    }

    #[test]
    fn test_get_resources() {
        let cli = parse(&["get", "resources", "--kind", "correlationRule", "-n", "brute", "-o", "json"]);
        let Command::Get {
            resource: GetResource::Resources(args),
        } = cli.command
        else {
            panic!("Expected get resources");
        };
        assert_eq!(args.kind, Some(ResourceKind::CorrelationRule));
        assert_eq!(args.name.as_deref(), Some("brute"));
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_get_resource_defaults_to_json() {
        let cli = parse(&["get", "resource", "filter;f-1"]);
        let Command::Get {
            resource: GetResource::Resource(args),
        } = cli.command
        else {
            panic!("Expected get resource");
        };
        assert_eq!(args.key, "filter;f-1");
        assert!(args.id.is_none());
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_import_assets_requires_tenant() {
        assert!(Cli::try_parse_from(["kumactl", "import", "assets", "hosts.csv"]).is_err());

        let cli = parse(&["import", "assets", "hosts.csv", "--tenant", "Main"]);
        let Command::Import {
            resource: ImportResource::Assets(args),
        } = cli.command
        else {
            panic!("Expected import assets");
        };
        assert_eq!(args.file, PathBuf::from("hosts.csv"));
        assert_eq!(args.tenant, "Main");
    }

    #[test]
    fn test_restore_yes() {
        let cli = parse(&["restore", "backup.tar.gz", "-y"]);
        let Command::Restore(args) = cli.command else {
            panic!("Expected restore");
        };
        assert!(args.yes);
        assert_eq!(args.file, PathBuf::from("backup.tar.gz"));
    }

    #[test]
    fn test_invalid_resource_kind() {
        assert!(Cli::try_parse_from(["kumactl", "get", "resources", "--kind", "widget"]).is_err());
    }
}
