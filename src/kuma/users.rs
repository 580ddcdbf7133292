//! Session check against the current user endpoint

use log::debug;
use serde_json::Value;

use crate::config::api;
use crate::kuma::envelope::Outcome;
use crate::kuma::KumaClient;

impl KumaClient {
    /// Verify the token by fetching the current user
    ///
    /// Every command runs this first; an error envelope means no other call
    /// should be made with this client. Any 200/204 counts as connected;
    /// the payload is the user document when the body is JSON.
    pub async fn connect(&self) -> Outcome<Option<Value>> {
        let url = self.url(api::WHOAMI, &[]);
        debug!("Fetching current user from: {}", url);

        let (envelope, response) = self.execute(self.get(&url)).await;
        let Some(response) = response else {
            return Outcome::new(envelope, None);
        };

        let text = response.text().await.unwrap_or_default();
        Outcome::ok(serde_json::from_str(&text).ok())
    }
}
