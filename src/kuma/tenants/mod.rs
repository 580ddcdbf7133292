//! Tenant module

mod api;
mod models;

pub use models::Tenant;
