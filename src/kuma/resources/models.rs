//! Resource data models

use serde::Deserialize;

use crate::error::{KumaError, Result};
use crate::kuma::lenient;
use crate::kuma::models::Choice;

/// Resource summary as listed by `/resources`
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub tenant_name: String,
}

impl From<ResourceSummary> for Choice {
    /// Label `"<name>; <tenantName>"`, value the resource key `"<kind>;<id>"`
    fn from(resource: ResourceSummary) -> Self {
        Choice::new(
            format!("{}; {}", resource.name, resource.tenant_name),
            format!("{};{}", resource.kind, resource.id),
        )
    }
}

/// Split a resource key `"<kind>;<id>"` into kind and id
pub fn parse_resource_key(key: &str) -> Result<(&str, &str)> {
    match key.split_once(';') {
        Some((kind, id)) if !kind.is_empty() && !id.is_empty() && !id.contains(';') => {
            Ok((kind, id))
        }
        _ => Err(KumaError::Config(format!(
            "Invalid resource key '{}': expected '<kind>;<id>'",
            key
        ))),
    }
}
