//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::kuma::Choice;

/// Build a borderless two-column table of choices
pub fn choices_table(label: &str, value: &str, choices: &[Choice]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![label, value]);
    for choice in choices {
        table.add_row(vec![&choice.label, &choice.value]);
    }
    table
}
