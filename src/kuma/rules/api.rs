//! Correlation rule API operations

use crate::config::api;
use crate::kuma::envelope::Outcome;
use crate::kuma::KumaClient;

use super::models::{CorrelatorResource, Rule, RuleRow};

impl KumaClient {
    /// Rules attached to a correlator (single request)
    pub async fn rules_by_correlator(&self, correlator_id: &str) -> Outcome<Vec<RuleRow>> {
        let path = format!(
            "{}/correlator/{}",
            api::RESOURCES,
            urlencoding::encode(correlator_id)
        );
        let context = format!("correlator '{}'", correlator_id);

        self.fetch_json::<CorrelatorResource>(&path, &[], &context)
            .await
            .map(|correlator| {
                correlator
                    .payload
                    .rules
                    .into_iter()
                    .map(RuleRow::from)
                    .collect()
            })
    }

    /// Correlation rules owned by a tenant, across all pages
    pub async fn rules_by_tenant(&self, tenant_id: &str) -> Outcome<Vec<RuleRow>> {
        let query = [
            ("kind", "correlationRule".to_string()),
            ("tenantID", tenant_id.to_string()),
        ];
        let context = format!("correlation rules for tenant '{}'", tenant_id);

        self.fetch_all_pages::<Rule, Vec<Rule>>(api::RESOURCES, &query, &context)
            .await
            .map(|rules| rules.into_iter().map(RuleRow::from).collect())
    }
}
