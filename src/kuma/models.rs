//! KUMA API data models shared across resources

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::api;
use crate::kuma::traits::CsvRecord;

/// A labelled identifier, used for pickers (tenants, correlators, resources)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Flattened alert or incident, in export column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub name: String,
    pub id: String,
    pub status: String,
    pub first_seen: String,
    pub last_seen: String,
    pub assignee: String,
    #[serde(rename = "tenantName")]
    pub tenant_name: String,
    #[serde(rename = "tenantID")]
    pub tenant_id: String,
}

impl CsvRecord for EventRow {
    const HEADER: &'static [&'static str] = &[
        "name",
        "id",
        "status",
        "first_seen",
        "last_seen",
        "assignee",
        "tenantName",
        "tenantID",
    ];

    fn fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.id.as_str(),
            self.status.as_str(),
            self.first_seen.as_str(),
            self.last_seen.as_str(),
            self.assignee.as_str(),
            self.tenant_name.as_str(),
            self.tenant_id.as_str(),
        ]
    }
}

/// Filters for alert and incident listings
///
/// Absent filters are left out of the query string.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    /// Accepted statuses, sent as repeated `status` parameters
    pub statuses: Vec<String>,
    /// Timestamp field the `from`/`to` range applies to
    pub time_field: Option<String>,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl EventQuery {
    /// Query parameters in request order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(field) = &self.time_field {
            query.push(("timestampField", field.clone()));
        }
        if let Some(from) = &self.from {
            query.push(("from", format_timestamp(from)));
        }
        if let Some(to) = &self.to {
            query.push(("to", format_timestamp(to)));
        }
        for status in &self.statuses {
            query.push(("status", status.clone()));
        }
        query
    }
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.000Z`
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(api::TIMESTAMP_FORMAT).to_string()
}
