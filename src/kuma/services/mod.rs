//! Service module (correlators)

mod api;
mod models;

pub use models::Service;
