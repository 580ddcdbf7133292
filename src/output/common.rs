//! Common utilities for output formatters

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{KumaError, Result};

/// Serialize a value as pretty JSON or YAML
pub fn render_raw<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            serde_yml::to_string(value).map_err(|e| KumaError::Json(e.to_string()))
        }
        _ => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Print a value as pretty JSON or YAML; other formats fall back to JSON
pub fn output_raw<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    println!("{}", render_raw(value, format)?.trim_end());
    Ok(())
}
