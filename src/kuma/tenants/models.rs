//! Tenant data models

use serde::Deserialize;

use crate::kuma::lenient;
use crate::kuma::models::Choice;

#[derive(Deserialize, Debug, Clone)]
pub struct Tenant {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: String,
}

impl From<Tenant> for Choice {
    fn from(tenant: Tenant) -> Self {
        Choice::new(tenant.name, tenant.id)
    }
}
