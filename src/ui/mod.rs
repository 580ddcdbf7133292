//! UI utilities for terminal output
//!
//! Progress spinners and interactive prompts. Both are disabled in batch mode.

mod confirm;
mod spinner;

pub use confirm::{confirm_action, prompt_token};
pub use spinner::{clear_spinner, create_spinner, finish_spinner};
