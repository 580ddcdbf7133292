//! Connection parameters for a KUMA Core server

use std::fmt;

use crate::config::api;
use crate::error::{KumaError, Result};

/// Server address, API port and bearer token of a KUMA Core session
///
/// Immutable once built; reconnecting means building a new one.
#[derive(Clone, PartialEq, Eq)]
pub struct Connection {
    address: String,
    port: String,
    token: String,
}

impl Connection {
    /// Validate and build connection parameters
    pub fn new(address: &str, port: &str, token: &str) -> Result<Self> {
        let address = address.trim();
        let address = address
            .strip_prefix("https://")
            .or_else(|| address.strip_prefix("http://"))
            .unwrap_or(address)
            .trim_end_matches('/');
        if address.is_empty() {
            return Err(KumaError::Config(
                "KUMA Core address must not be empty".to_string(),
            ));
        }

        let port = port.trim();
        if port.parse::<u16>().is_err() {
            return Err(KumaError::Config(format!(
                "Invalid KUMA API port '{}'",
                port
            )));
        }

        if token.trim().is_empty() {
            return Err(KumaError::TokenNotFound(
                "KUMA API token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            address: address.to_string(),
            port: port.to_string(),
            token: token.trim().to_string(),
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Base URL of the REST API, e.g. `https://kuma.local:7223/api/v3`
    pub fn base_url(&self) -> String {
        format!("https://{}:{}{}", self.address, self.port, api::BASE_PATH)
    }
}

// Keep the token out of debug logs
impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("token", &"***")
            .finish()
    }
}
