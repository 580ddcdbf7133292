//! Output formatting module
//!
//! Handles the output formats (table, CSV, JSON, YAML) and export files.

mod common;
pub mod csv;
mod table;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::cli::OutputFormat;
use crate::error::{KumaError, Result};
use crate::kuma::{Choice, CsvRecord};

pub use common::{output_raw, render_raw};
pub use table::choices_table;

/// Print choices in the requested format, with column titles for table/CSV
pub fn output_choices(
    label: &str,
    value: &str,
    choices: &[Choice],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", choices_table(label, value, choices)),
        OutputFormat::Csv => {
            let mut out = io::stdout().lock();
            writeln!(out, "{},{}", csv::escape_csv(label), csv::escape_csv(value))?;
            for choice in choices {
                writeln!(
                    out,
                    "{},{}",
                    csv::escape_csv(&choice.label),
                    csv::escape_csv(&choice.value)
                )?;
            }
        }
        OutputFormat::Json | OutputFormat::Yaml => output_raw(choices, format)?,
    }
    Ok(())
}

/// Write export rows as CSV to a file, or to stdout when no path is given
///
/// Returns the number of rows written.
pub fn write_export<R: CsvRecord>(rows: &[R], path: Option<&Path>) -> Result<usize> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| KumaError::Io {
                message: format!("Cannot create '{}': {}", path.display(), e),
            })?;
            csv::write_csv(&mut BufWriter::new(file), rows)?;
            info!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => csv::write_csv(&mut io::stdout().lock(), rows)?,
    }
    Ok(rows.len())
}
