//! Tenant API operations

use crate::config::api;
use crate::kuma::envelope::Outcome;
use crate::kuma::models::Choice;
use crate::kuma::KumaClient;

use super::models::Tenant;

impl KumaClient {
    /// List tenants as `(name, id)` choices
    pub async fn list_tenants(&self) -> Outcome<Vec<Choice>> {
        self.fetch_all_pages::<Tenant, Vec<Tenant>>(api::TENANTS, &[], "tenants")
            .await
            .map(|tenants| tenants.into_iter().map(Choice::from).collect())
    }
}
