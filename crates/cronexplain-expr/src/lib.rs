//! Crontab Expression Library
//!
//! This crate parses a five-field crontab expression (plus an optional
//! trailing command) into the concrete set of integer values each field
//! matches.
//!
//! # Overview
//!
//! Parsing happens in two passes:
//!
//! - **Normalization**: the raw line is split into five field strings plus
//!   the command, and symbolic aliases are canonicalized (`?` to `*`, day 7
//!   to 0, month and weekday names to numbers).
//! - **Expansion**: each field string is expanded against that field's
//!   bounds into a set of matching values, honoring ranges, steps, and
//!   wrap-around ranges. A final pass suppresses whichever day field was
//!   left unrestricted while the other was constrained, per cron's
//!   day-of-month/day-of-week OR convention.
//!
//! # Example
//!
//! ```
//! use cronexplain_expr::{parse, FieldKind};
//!
//! let schedule = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//!
//! assert_eq!(schedule.minute.iter().copied().collect::<Vec<_>>(), vec![0, 15, 30, 45]);
//! assert_eq!(schedule.field(FieldKind::DayOfMonth).len(), 2);
//! assert_eq!(schedule.command, "/usr/bin/find");
//! ```
//!
//! # Modules
//!
//! - [`error`]: The parse failure kinds
//! - [`field`]: Field kinds and their numeric bounds
//! - [`normalize`]: Splitting and alias canonicalization
//! - [`expand`]: Field-string to value-set expansion
//! - [`schedule`]: The parsed schedule type and the `parse` entry point

pub mod error;
pub mod expand;
pub mod field;
pub mod normalize;
pub mod schedule;

// Re-export commonly used items at the crate root
pub use error::ParseError;
pub use expand::expand;
pub use field::FieldKind;
pub use normalize::{normalize, Normalized, FIELD_COUNT};
pub use schedule::{parse, Schedule};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// The comma-union property: a comma list expands to the union of its
    /// parts, for whole expressions as well as single fields.
    #[test]
    fn test_comma_union_property() {
        let combined = expand("8,19,3-5", FieldKind::Hour).unwrap();
        let mut expected = expand("8", FieldKind::Hour).unwrap();
        expected.extend(expand("19", FieldKind::Hour).unwrap());
        expected.extend(expand("3-5", FieldKind::Hour).unwrap());
        assert_eq!(combined, expected);
    }

    /// Everything a parse produces stays inside the field bounds, except a
    /// day field forced empty by the ambiguity rule.
    #[test]
    fn test_bounds_containment() {
        let schedule = parse("*/7 3-9 1-31 * sat,sun backup").unwrap();
        for kind in FieldKind::ALL {
            let (min, max) = kind.bounds();
            assert!(
                schedule.field(kind).iter().all(|v| (min..=max).contains(v)),
                "{} escaped its bounds",
                kind
            );
        }
    }

    #[test]
    fn test_normalization_feeds_expansion() {
        // "FRI" normalizes to "5" before expansion, and "?" to "*".
        let schedule = parse("0 18 ? * FRI poweroff").unwrap();
        let friday: std::collections::BTreeSet<u32> = [5].into_iter().collect();
        assert_eq!(schedule.day_of_week, friday);
        assert!(schedule.day_of_month.is_empty());
    }

    #[test]
    fn test_error_kinds_are_part_of_the_contract() {
        assert!(matches!(
            parse("* * * *"),
            Err(ParseError::MalformedExpression { .. })
        ));
        assert!(matches!(
            parse("61 * * * *"),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse("*,5 * * * *"),
            Err(ParseError::InvalidWildcardCombination { .. })
        ));
        assert!(matches!(
            parse("%% * * * *"),
            Err(ParseError::UnrecognizedSymbol { .. })
        ));
    }
}
