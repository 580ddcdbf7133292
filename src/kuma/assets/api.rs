//! Asset API operations

use log::debug;
use serde_json::Value;

use crate::config::api;
use crate::kuma::envelope::Outcome;
use crate::kuma::KumaClient;

use super::models::{Asset, ImportRequest};

impl KumaClient {
    /// Import assets into a tenant
    ///
    /// The payload is the server's JSON answer, if it sent one.
    pub async fn import_assets(&self, assets: &[Asset], tenant_id: &str) -> Outcome<Option<Value>> {
        let url = self.url(api::ASSETS_IMPORT, &[]);
        debug!("Importing {} assets into tenant {} via {}", assets.len(), tenant_id, url);

        let body = ImportRequest { assets, tenant_id };
        let (envelope, response) = self.execute(self.post(&url).json(&body)).await;
        let Some(response) = response else {
            return Outcome::new(envelope, None);
        };

        let text = response.text().await.unwrap_or_default();
        Outcome::ok(serde_json::from_str(&text).ok())
    }
}
