//! KUMA Core REST API client
//!
//! `KumaClient` is the session: it is built from a `Connection` and passed
//! by reference into every operation. Operations are grouped per endpoint
//! family, each adding an `impl KumaClient` block.

mod alerts;
mod assets;
mod client;
mod connection;
mod envelope;
mod incidents;
mod lenient;
mod models;
mod resources;
mod rules;
mod services;
mod system;
mod tenants;
mod traits;
mod users;

pub use alerts::Alert;
pub use assets::{parse_assets, Asset, AssetOs, ASSET_HEADER};
pub use client::{KumaClient, Query};
pub use connection::Connection;
pub use envelope::{Envelope, Outcome, Status};
pub use incidents::{Incident, IncidentsPage};
pub use models::{format_timestamp, Choice, EventQuery, EventRow};
pub use resources::{parse_resource_key, ResourceSummary};
pub use rules::{CorrelatorResource, Rule, RuleRow};
pub use services::Service;
pub use tenants::Tenant;
pub use traits::{CsvRecord, PaginatedResponse};
