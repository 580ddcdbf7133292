//! Backup and restore of the KUMA Core configuration

use log::{debug, info, warn};

use crate::config::api;
use crate::kuma::envelope::{Envelope, Outcome};
use crate::kuma::KumaClient;

impl KumaClient {
    /// Download a backup archive of the Core configuration
    ///
    /// The archive is opaque; it is only meant to be fed back to `restore`.
    /// An empty body gives an OK envelope without payload.
    pub async fn backup(&self) -> Outcome<Option<Vec<u8>>> {
        let url = self.url(api::BACKUP, &[]);
        debug!("Requesting backup from: {}", url);

        let (envelope, response) = self.execute(self.get(&url)).await;
        let Some(response) = response else {
            return Outcome::new(envelope, None);
        };

        match response.bytes().await {
            Ok(bytes) if bytes.is_empty() => {
                warn!("Backup response has an empty body");
                Outcome::ok(None)
            }
            Ok(bytes) => {
                info!("Received backup of {} bytes", bytes.len());
                Outcome::ok(Some(bytes.to_vec()))
            }
            Err(e) => Outcome::new(Envelope::Error(e.to_string()), None),
        }
    }

    /// Upload a backup archive, replacing the Core configuration
    pub async fn restore(&self, archive: Vec<u8>) -> Outcome<()> {
        let url = self.url(api::RESTORE, &[]);
        debug!("Uploading {} bytes to: {}", archive.len(), url);

        let (envelope, _) = self.execute(self.post(&url).body(archive)).await;
        Outcome::new(envelope, ())
    }
}
