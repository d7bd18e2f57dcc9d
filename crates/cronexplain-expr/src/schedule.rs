//! The parsed schedule type and the whole-expression parse entry point.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::expand::expand;
use crate::field::FieldKind;
use crate::normalize::normalize;

/// A crontab expression expanded into the concrete values each field
/// matches, plus the trailing command.
///
/// Constructed once by [`parse`] and immutable thereafter. Day-of-month and
/// day-of-week are OR-combined by cron only when both are restricted; when
/// exactly one of them is `*`, its set here is empty, meaning it contributes
/// no constraint. Applying the OR itself is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Minutes of the hour the schedule matches (0-59).
    pub minute: BTreeSet<u32>,
    /// Hours of the day the schedule matches (0-23).
    pub hour: BTreeSet<u32>,
    /// Days of the month the schedule matches (1-31).
    pub day_of_month: BTreeSet<u32>,
    /// Months of the year the schedule matches (1-12).
    pub month: BTreeSet<u32>,
    /// Days of the week the schedule matches (0-6, Sunday = 0).
    pub day_of_week: BTreeSet<u32>,
    /// The trailing command, empty if the expression had none.
    pub command: String,
}

impl Schedule {
    /// Returns the expanded set for a field by kind.
    pub fn field(&self, kind: FieldKind) -> &BTreeSet<u32> {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }
}

/// Parses a crontab expression into a [`Schedule`].
///
/// This is the sole entry point: it normalizes the raw line, expands each of
/// the five fields against its bounds, and then suppresses whichever day
/// field was left unrestricted while the other was constrained. The first
/// error aborts the whole parse.
pub fn parse(expression: &str) -> Result<Schedule, ParseError> {
    let normalized = normalize(expression)?;

    let mut sets: [BTreeSet<u32>; 5] = Default::default();
    for (slot, (field, kind)) in sets
        .iter_mut()
        .zip(normalized.fields.iter().zip(FieldKind::ALL))
    {
        *slot = expand(field, kind)?;
    }

    // The day-ambiguity rule compares the normalized field strings, so a `?`
    // rewritten to `*` counts as unrestricted.
    let day_of_month_is_star = normalized.fields[FieldKind::DayOfMonth as usize] == "*";
    let day_of_week_is_star = normalized.fields[FieldKind::DayOfWeek as usize] == "*";
    if day_of_month_is_star && !day_of_week_is_star {
        sets[FieldKind::DayOfMonth as usize].clear();
    } else if day_of_week_is_star && !day_of_month_is_star {
        sets[FieldKind::DayOfWeek as usize].clear();
    }

    let [minute, hour, day_of_month, month, day_of_week] = sets;
    Ok(Schedule {
        minute,
        hour,
        day_of_month,
        month,
        day_of_week,
        command: normalized.command,
    })
}
