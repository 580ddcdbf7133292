//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use super::enums::ResourceKind;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// List tenants
    #[command(visible_alias = "tenant")]
    Tenants(ListArgs),

    /// List correlator services
    #[command(visible_alias = "correlator")]
    Correlators(ListArgs),

    /// Search configuration resources
    #[command(visible_alias = "res")]
    Resources(ResourcesArgs),

    /// Show one resource as JSON or YAML
    Resource(ResourceArgs),
}

/// Arguments for list subcommands without filters
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get resources' subcommand
#[derive(Parser, Debug)]
pub struct ResourcesArgs {
    /// Resource kind
    #[arg(short, long, value_enum)]
    pub kind: Option<ResourceKind>,

    /// Name filter, passed to the server as is
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get resource' subcommand
#[derive(Parser, Debug)]
pub struct ResourceArgs {
    /// Resource key "<kind>;<id>" as listed by 'get resources', or a kind
    /// followed by the ID
    pub key: String,

    /// Resource ID, when KEY is just the kind
    pub id: Option<String>,

    /// Output format (json or yaml)
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}
