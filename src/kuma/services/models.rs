//! Service data models

use serde::Deserialize;

use crate::kuma::lenient;
use crate::kuma::models::Choice;

/// Running service as listed by `/services`
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub tenant_name: String,
    #[serde(rename = "resourceID", deserialize_with = "lenient::deserialize")]
    pub resource_id: String,
}

impl From<Service> for Choice {
    /// Label `"<name>;<tenantName>"`, value the backing resource id
    fn from(service: Service) -> Self {
        Choice::new(
            format!("{};{}", service.name, service.tenant_name),
            service.resource_id,
        )
    }
}
