//! Expansion of a normalized field string into the set of matching values.
//!
//! A field string is a comma-separated list of sub-expressions, each one of:
//! the wildcard `*`, a bare integer, a bounded range `a-b`, or any of those
//! with a `/step` suffix. A bare `n/step` is its own shape, meaning "start
//! at n and step up to the field's max".
//!
//! A range whose start is not below its end wraps around: `11-5` on a field
//! bounded (1, 14) means 11 through 14 followed by 1 through 5. A step on a
//! wrapped range strides the concatenated sequence by position, so
//! `10-5/2` on (5, 13) walks `[10, 11, 12, 13, 5]` and keeps `{10, 12, 5}`.

use std::collections::BTreeSet;

use crate::error::ParseError;
use crate::field::FieldKind;

/// Expands a normalized field string against the field's bounds.
///
/// The wildcard must stand alone: mixing `*` with comma-separated siblings
/// is rejected, since `*` already means the full range.
pub fn expand(field: &str, kind: FieldKind) -> Result<BTreeSet<u32>, ParseError> {
    let parts: Vec<&str> = field.split(',').collect();
    if parts.len() > 1 && parts.iter().any(|part| *part == "*") {
        return Err(ParseError::InvalidWildcardCombination { kind });
    }

    let mut values = BTreeSet::new();
    for part in parts {
        values.extend(expand_sub(part.trim(), kind)?);
    }
    Ok(values)
}

/// Expands a single trimmed sub-expression.
fn expand_sub(element: &str, kind: FieldKind) -> Result<BTreeSet<u32>, ParseError> {
    let (min, max) = kind.bounds();

    if element == "*" {
        return Ok((min..=max).collect());
    }

    if is_digits(element) {
        let value = parse_value(element, kind)?;
        if value < min || value > max {
            return Err(ParseError::out_of_range(element, kind));
        }
        return Ok(BTreeSet::from([value]));
    }

    if element.contains('-') || element.contains('/') {
        let (body, step) = match element.split_once('/') {
            Some((body, raw_step)) => (body, parse_step(raw_step, element)?),
            None => (element, 1),
        };

        let (prefix, suffix) = if body.contains('-') {
            let (prefix, suffix) = parse_endpoints(body, kind)?;
            // Only the outward-facing bounds are checked; a prefix above max
            // or a suffix below min flows into the wrap-around branch.
            if prefix < min || suffix > max {
                return Err(ParseError::out_of_range(element, kind));
            }
            (prefix, suffix)
        } else if is_digits(body) {
            // value/step: from the value to the field max. The start is not
            // bounds-checked; a start above max yields the empty set.
            let start = parse_value(body, kind)?;
            return Ok((start..=max).step_by(step as usize).collect());
        } else if body == "*" {
            (min, max)
        } else {
            return Err(ParseError::unrecognized(body, kind));
        };

        if prefix < suffix {
            return Ok((prefix..=suffix).step_by(step as usize).collect());
        }

        // Wrap-around range: ascend from prefix to max, then from min to
        // suffix, and stride the concatenation by position from index 0.
        return Ok((prefix..=max)
            .chain(min..=suffix)
            .step_by(step as usize)
            .collect());
    }

    Err(ParseError::unrecognized(element, kind))
}

/// True if the token is one or more ASCII digits.
fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a digit token. A value too large for u32 cannot be inside any
/// field's bounds, so overflow reports as out of range.
fn parse_value(token: &str, kind: FieldKind) -> Result<u32, ParseError> {
    token
        .parse::<u32>()
        .map_err(|_| ParseError::out_of_range(token, kind))
}

/// Parses the step suffix after `/` as a positive integer.
fn parse_step(raw_step: &str, element: &str) -> Result<u32, ParseError> {
    let step = raw_step.trim().parse::<u32>().map_err(|_| {
        ParseError::malformed(format!("invalid step {:?} in {:?}", raw_step, element))
    })?;
    if step == 0 {
        return Err(ParseError::malformed(format!(
            "step must be positive in {:?}",
            element
        )));
    }
    Ok(step)
}

/// Parses the two endpoints of a `prefix-suffix` body.
fn parse_endpoints(body: &str, kind: FieldKind) -> Result<(u32, u32), ParseError> {
    let endpoints: Vec<&str> = body.split('-').collect();
    let (prefix, suffix) = match endpoints.as_slice() {
        [prefix, suffix] => (prefix.trim(), suffix.trim()),
        _ => return Err(ParseError::unrecognized(body, kind)),
    };
    if !is_digits(prefix) || !is_digits(suffix) {
        return Err(ParseError::unrecognized(body, kind));
    }
    Ok((parse_value(prefix, kind)?, parse_value(suffix, kind)?))
}
