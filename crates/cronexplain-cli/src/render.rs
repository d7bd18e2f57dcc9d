//! Rendering of parsed schedules as text.
//!
//! The schedule's sets carry no presentation ordering of their own; this
//! module owns the output layout.

use std::collections::BTreeSet;

use cronexplain_expr::{FieldKind, Schedule};

/// Width of the field-name column in the table output.
pub const NAME_COLUMN_WIDTH: usize = 14;

/// Renders a schedule as one line per field: the field name padded to
/// [`NAME_COLUMN_WIDTH`] columns, then the matching values in ascending
/// order joined by single spaces. The final line carries the raw command.
pub fn render_table(schedule: &Schedule) -> String {
    let mut rows: Vec<String> = FieldKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{:<width$}{}",
                kind.name(),
                join_values(schedule.field(*kind)),
                width = NAME_COLUMN_WIDTH
            )
        })
        .collect();
    rows.push(format!(
        "{:<width$}{}",
        "command",
        schedule.command,
        width = NAME_COLUMN_WIDTH
    ));
    rows.join("\n")
}

/// Renders a schedule as pretty-printed JSON.
pub fn render_json(schedule: &Schedule) -> serde_json::Result<String> {
    serde_json::to_string_pretty(schedule)
}

fn join_values(values: &BTreeSet<u32>) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
