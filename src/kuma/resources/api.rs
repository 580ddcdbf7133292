//! Resource API operations

use serde_json::Value;

use crate::config::api;
use crate::kuma::envelope::Outcome;
use crate::kuma::models::Choice;
use crate::kuma::KumaClient;

use super::models::ResourceSummary;

impl KumaClient {
    /// Search resources by kind and name, across all pages
    ///
    /// Absent filters are not sent.
    pub async fn list_resources(&self, kind: Option<&str>, name: Option<&str>) -> Outcome<Vec<Choice>> {
        let mut query = Vec::new();
        if let Some(kind) = kind {
            query.push(("kind", kind.to_string()));
        }
        if let Some(name) = name {
            query.push(("name", name.to_string()));
        }

        self.fetch_all_pages::<ResourceSummary, Vec<ResourceSummary>>(
            api::RESOURCES,
            &query,
            "resources",
        )
        .await
        .map(|resources| resources.into_iter().map(Choice::from).collect())
    }

    /// Fetch the full JSON document of one resource
    ///
    /// The payload is an empty object when the call fails.
    pub async fn get_resource(&self, kind: &str, id: &str) -> Outcome<Value> {
        let path = format!(
            "{}/{}/{}",
            api::RESOURCES,
            urlencoding::encode(kind),
            urlencoding::encode(id)
        );
        let context = format!("resource '{};{}'", kind, id);

        let outcome = self.fetch_json::<Value>(&path, &[], &context).await;
        if outcome.is_ok() && !outcome.payload.is_null() {
            return outcome;
        }
        Outcome::new(outcome.envelope, Value::Object(Default::default()))
    }
}
