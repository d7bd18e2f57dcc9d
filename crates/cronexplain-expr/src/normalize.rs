//! Canonicalization of a raw crontab line into five field strings plus a
//! command.
//!
//! Symbolic aliases are rewritten as literal substring substitutions applied
//! in table order, matching the behavior of classic crontab tooling. The
//! substitutions are not tokenized: a month field of `JANFEB`
//! becomes `1FEB` and then `12`, and a `7` anywhere in the day-of-week field
//! becomes `0`. Changing either to token-aware matching would alter
//! observable behavior.

use crate::error::ParseError;

/// Number of mandatory time fields in an expression.
pub const FIELD_COUNT: usize = 5;

/// Month name substitutions, applied in order.
const MONTH_NAMES: [(&str, u32); 12] = [
    ("JAN", 1),
    ("FEB", 2),
    ("MAR", 3),
    ("APR", 4),
    ("MAY", 5),
    ("JUN", 6),
    ("JUL", 7),
    ("AUG", 8),
    ("SEP", 9),
    ("OCT", 10),
    ("NOV", 11),
    ("DEC", 12),
];

/// Weekday name substitutions, applied in order. Sunday is 0.
const DAY_NAMES: [(&str, u32); 7] = [
    ("SUN", 0),
    ("MON", 1),
    ("TUE", 2),
    ("WED", 3),
    ("THU", 4),
    ("FRI", 5),
    ("SAT", 6),
];

/// A raw expression split and canonicalized, ready for expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The five field strings in positional order.
    pub fields: [String; FIELD_COUNT],
    /// The trailing command, empty if the expression had none.
    pub command: String,
}

/// Splits a raw expression into five canonicalized field strings plus the
/// command.
///
/// The command begins at the sixth whitespace-delimited segment and is kept
/// verbatim, so it may itself contain whitespace.
pub fn normalize(raw: &str) -> Result<Normalized, ParseError> {
    let (fields, command) = split_fields(raw)?;
    let [minute, hour, day_of_month, month, day_of_week] = fields;

    // `?` is synonymous with `*` in both day fields, and day 7 is Sunday.
    // The 7 -> 0 rewrite runs first so weekday names never reintroduce a 7.
    let day_of_week = replace_names(
        &day_of_week.replace('7', "0").replace('?', "*"),
        &DAY_NAMES,
    );
    let day_of_month = day_of_month.replace('?', "*");
    let month = replace_names(&month, &MONTH_NAMES);

    Ok(Normalized {
        fields: [minute, hour, day_of_month, month, day_of_week],
        command,
    })
}

/// Splits on runs of whitespace at most five times. The remainder after the
/// fifth field, if any, is the command.
fn split_fields(raw: &str) -> Result<([String; FIELD_COUNT], String), ParseError> {
    let mut rest = raw.trim_start();
    let mut fields: [String; FIELD_COUNT] = Default::default();

    for (position, slot) in fields.iter_mut().enumerate() {
        if rest.is_empty() {
            return Err(ParseError::malformed(format!(
                "expected {} time fields, found {}",
                FIELD_COUNT, position
            )));
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        *slot = rest[..end].to_string();
        rest = rest[end..].trim_start();
    }

    Ok((fields, rest.to_string()))
}

/// Uppercases the field and applies each (name, value) substitution in table
/// order as a literal substring replacement.
fn replace_names(field: &str, table: &[(&str, u32)]) -> String {
    let mut out = field.to_uppercase();
    for (name, value) in table {
        out = out.replace(name, &value.to_string());
    }
    out
}

#[cfg(test)]
mod tests;
