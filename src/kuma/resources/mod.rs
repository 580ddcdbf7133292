//! Resource module

mod api;
mod models;

pub use models::{parse_resource_key, ResourceSummary};
