//! Interactive prompts

use dialoguer::{Confirm, Password};

use crate::error::{KumaError, Result};

/// Ask for a yes/no confirmation before a destructive operation
///
/// `assume_yes` skips the prompt. In batch mode without `assume_yes` the
/// answer is always no.
pub fn confirm_action(prompt: &str, batch: bool, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if batch {
        return Ok(false);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| KumaError::Io {
            message: format!("Confirmation prompt failed: {}", e),
        })
}

/// Read an API token from the terminal without echo
pub fn prompt_token() -> Result<String> {
    Password::new()
        .with_prompt("KUMA API token")
        .interact()
        .map_err(|e| KumaError::TokenNotFound(format!("Failed to read token: {}", e)))
}
