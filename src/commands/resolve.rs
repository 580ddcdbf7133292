//! Resolve user input against tenant and correlator lists

use log::debug;

use crate::error::{KumaError, Result};
use crate::kuma::{Choice, KumaClient};
use crate::ui::create_spinner;

use super::settle;

/// Find the choice the user meant
///
/// An exact value (ID) wins; otherwise the input must match exactly one
/// label, either whole or its part before the first `;`.
pub fn match_choice<'a>(choices: &'a [Choice], input: &str, what: &str) -> Result<&'a Choice> {
    let input = input.trim();
    if let Some(choice) = choices.iter().find(|c| c.value == input) {
        return Ok(choice);
    }

    let matches: Vec<&Choice> = choices
        .iter()
        .filter(|c| {
            c.label == input || c.label.split(';').next().map(str::trim) == Some(input)
        })
        .collect();

    match matches.as_slice() {
        [choice] => {
            debug!("Resolved {} '{}' to {}", what, input, choice.value);
            Ok(choice)
        }
        [] => Err(KumaError::Config(format!("No {} matches '{}'", what, input))),
        many => {
            let labels: Vec<&str> = many.iter().map(|c| c.label.as_str()).collect();
            Err(KumaError::Config(format!(
                "'{}' matches several {}s ({}); use the ID instead",
                input,
                what,
                labels.join(", ")
            )))
        }
    }
}

/// Tenant ID for a tenant name or ID
pub(super) async fn resolve_tenant(client: &KumaClient, input: &str, batch: bool) -> Result<String> {
    let spinner = create_spinner("Fetching tenants...", batch);
    let tenants = settle(spinner, client.list_tenants().await, |t| {
        format!("Found {} tenants", t.len())
    })?;
    Ok(match_choice(&tenants, input, "tenant")?.value.clone())
}

/// Correlator resource ID for a correlator name or resource ID
pub(super) async fn resolve_correlator(
    client: &KumaClient,
    input: &str,
    batch: bool,
) -> Result<String> {
    let spinner = create_spinner("Fetching correlators...", batch);
    let correlators = settle(spinner, client.list_correlators().await, |c| {
        format!("Found {} correlators", c.len())
    })?;
    Ok(match_choice(&correlators, input, "correlator")?.value.clone())
}
