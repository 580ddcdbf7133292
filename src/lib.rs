//! kumactl - Administer a KUMA Core server from the command line
//!
//! A CLI for the KUMA Core REST API (`/api/v3`).
//!
//! # Features
//!
//! - Export alerts, incidents and correlation rules to CSV
//! - Import assets from CSV
//! - Back up and restore the Core configuration
//! - Browse tenants, correlators and resources
//! - Automatic pagination handling
//!
//! # Example
//!
//! ```bash
//! export KUMA_ADDRESS=kuma.example.com KUMA_TOKEN=...
//!
//! # Check the token
//! kumactl connect
//!
//! # Export new and assigned alerts
//! kumactl export alerts -s new,assigned -o alerts.csv
//!
//! # Show a resource as YAML
//! kumactl get resource "filter;3a9c..." -o yaml
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod kuma;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{KumaError, Result};
pub use kuma::{Connection, Envelope, KumaClient, Outcome, Status};
