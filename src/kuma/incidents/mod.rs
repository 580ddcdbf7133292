//! Incident module

mod api;
mod models;

pub use models::{Incident, IncidentsPage};
