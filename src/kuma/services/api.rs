//! Service API operations

use crate::config::api;
use crate::kuma::envelope::Outcome;
use crate::kuma::models::Choice;
use crate::kuma::KumaClient;

use super::models::Service;

impl KumaClient {
    /// List correlator services as `(name;tenant, resource id)` choices
    pub async fn list_correlators(&self) -> Outcome<Vec<Choice>> {
        let query = [("kind", "correlator".to_string())];

        self.fetch_all_pages::<Service, Vec<Service>>(api::SERVICES, &query, "correlators")
            .await
            .map(|services| services.into_iter().map(Choice::from).collect())
    }
}
