//! Serde helper that reads any JSON scalar as a string
//!
//! Export rows flatten server fields into CSV cells: `null` or a missing
//! field becomes an empty cell, numbers and booleans their text form.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
