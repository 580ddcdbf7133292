//! Correlation rule module

mod api;
mod models;

pub use models::{CorrelatorResource, Rule, RuleRow};
