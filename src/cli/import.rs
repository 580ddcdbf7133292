//! Import command resource definitions and arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resource types for the 'import' command
#[derive(Subcommand, Debug)]
pub enum ImportResource {
    /// Import assets from a CSV file
    ///
    /// The file must have the header
    ///   name,fqdn,ipAddresses,macAddresses,osName,osVersion
    /// fqdn, ipAddresses and macAddresses hold ';'-separated lists.
    /// osVersion must be an integer.
    ///
    /// EXAMPLES:
    ///   kumactl import assets hosts.csv --tenant Main
    #[command(verbatim_doc_comment, visible_alias = "asset")]
    Assets(ImportAssetsArgs),
}

/// Arguments for 'import assets' subcommand
#[derive(Parser, Debug)]
pub struct ImportAssetsArgs {
    /// CSV file with assets
    pub file: PathBuf,

    /// Target tenant (tenant ID or name)
    #[arg(long)]
    pub tenant: String,
}
