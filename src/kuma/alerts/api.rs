//! Alert API operations

use crate::config::api;
use crate::kuma::envelope::Outcome;
use crate::kuma::models::{EventQuery, EventRow};
use crate::kuma::KumaClient;

use super::models::Alert;

impl KumaClient {
    /// List alerts matching the filters, across all pages
    ///
    /// The endpoint answers with a bare JSON array of alerts.
    pub async fn list_alerts(&self, query: &EventQuery) -> Outcome<Vec<EventRow>> {
        self.fetch_all_pages::<Alert, Vec<Alert>>(api::ALERTS, &query.to_query(), "alerts")
            .await
            .map(|alerts| alerts.into_iter().map(EventRow::from).collect())
    }
}
