//! Incident data models

use serde::Deserialize;

use crate::kuma::lenient;
use crate::kuma::models::EventRow;
use crate::kuma::traits::PaginatedResponse;

/// One page of the incidents listing
///
/// Unlike alerts, incidents are nested under the `incidents` key.
#[derive(Deserialize, Debug)]
pub struct IncidentsPage {
    pub incidents: Vec<Incident>,
}

impl PaginatedResponse<Incident> for IncidentsPage {
    fn into_data(self) -> Vec<Incident> {
        self.incidents
    }
}

/// Incident data from KUMA API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub assignee_name: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub tenant_name: String,
    #[serde(rename = "tenantID", default, deserialize_with = "lenient::deserialize")]
    pub tenant_id: String,
}

/// Incidents export under the alert column names
impl From<Incident> for EventRow {
    fn from(incident: Incident) -> Self {
        Self {
            name: incident.name,
            id: incident.id,
            status: incident.status,
            first_seen: incident.created_at,
            last_seen: incident.updated_at,
            assignee: incident.assignee_name,
            tenant_name: incident.tenant_name,
            tenant_id: incident.tenant_id,
        }
    }
}
