//! Export command resource definitions and arguments

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{AlertStatus, AlertTimeField, IncidentStatus, IncidentTimeField};

/// Resource types for the 'export' command
#[derive(Subcommand, Debug)]
pub enum ExportResource {
    /// Export alerts to CSV
    ///
    /// Columns: name,id,status,first_seen,last_seen,assignee,tenantName,tenantID
    ///
    /// EXAMPLES:
    ///   kumactl export alerts -o alerts.csv
    ///   kumactl export alerts -s new,assigned --time-field firstSeen --from 2024-03-01
    #[command(verbatim_doc_comment, visible_alias = "alert")]
    Alerts(AlertExportArgs),

    /// Export incidents to CSV
    ///
    /// Same columns as alerts; first_seen/last_seen come from
    /// createdAt/updatedAt and assignee from assigneeName.
    #[command(verbatim_doc_comment, visible_alias = "incident")]
    Incidents(IncidentExportArgs),

    /// Export correlation rules to CSV (columns: name,kind,id)
    #[command(visible_alias = "rule")]
    Rules(RuleExportArgs),
}

/// Arguments for 'export alerts' subcommand
#[derive(Parser, Debug)]
pub struct AlertExportArgs {
    /// Statuses to export, comma separated (default: all)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub status: Vec<AlertStatus>,

    /// Timestamp field the --from/--to range applies to
    #[arg(long, value_enum)]
    pub time_field: Option<AlertTimeField>,

    /// Range start (YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or RFC 3339)
    #[arg(long, value_parser = parse_datetime, requires = "time_field")]
    pub from: Option<NaiveDateTime>,

    /// Range end (YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or RFC 3339)
    #[arg(long, value_parser = parse_datetime, requires = "time_field")]
    pub to: Option<NaiveDateTime>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for 'export incidents' subcommand
#[derive(Parser, Debug)]
pub struct IncidentExportArgs {
    /// Statuses to export, comma separated (default: all)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub status: Vec<IncidentStatus>,

    /// Timestamp field the --from/--to range applies to
    #[arg(long, value_enum)]
    pub time_field: Option<IncidentTimeField>,

    /// Range start (YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or RFC 3339)
    #[arg(long, value_parser = parse_datetime, requires = "time_field")]
    pub from: Option<NaiveDateTime>,

    /// Range end (YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or RFC 3339)
    #[arg(long, value_parser = parse_datetime, requires = "time_field")]
    pub to: Option<NaiveDateTime>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for 'export rules' subcommand
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["correlator", "tenant"])))]
pub struct RuleExportArgs {
    /// Correlator whose rules to export (resource ID or correlator name)
    #[arg(short, long)]
    pub correlator: Option<String>,

    /// Tenant whose rules to export (tenant ID or name)
    #[arg(long)]
    pub tenant: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse a date or date-time argument
///
/// Offsets are converted to UTC; values without an offset are taken as UTC.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc).naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt);
    }

    Err(format!(
        "invalid date '{}': expected YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS or RFC 3339",
        value
    ))
}
