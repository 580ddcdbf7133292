//! Alert module

mod api;
mod models;

pub use models::Alert;
