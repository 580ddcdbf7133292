//! Alert data models

use serde::Deserialize;

use crate::kuma::lenient;
use crate::kuma::models::EventRow;

/// Alert data from KUMA API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub first_seen: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub last_seen: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub assignee: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub tenant_name: String,
    #[serde(rename = "tenantID", default, deserialize_with = "lenient::deserialize")]
    pub tenant_id: String,
}

impl From<Alert> for EventRow {
    fn from(alert: Alert) -> Self {
        Self {
            name: alert.name,
            id: alert.id,
            status: alert.status,
            first_seen: alert.first_seen,
            last_seen: alert.last_seen,
            assignee: alert.assignee,
            tenant_name: alert.tenant_name,
            tenant_id: alert.tenant_id,
        }
    }
}
