//! Error types for crontab expression parsing.

use thiserror::Error;

use crate::field::FieldKind;

/// The failure kinds a parse can surface.
///
/// Every variant aborts the whole parse; there is no partial result. The CLI
/// boundary is the only layer expected to catch these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression as a whole is not shaped like a crontab line: fewer
    /// than five whitespace-delimited fields, or a step suffix after `/`
    /// that is missing or not a positive integer.
    #[error("malformed expression: {detail}")]
    MalformedExpression {
        /// What was wrong with the expression.
        detail: String,
    },

    /// A bare value or range endpoint violates the field's inclusive bounds.
    #[error("{token:?} is outside the valid {kind} range {min}-{max}")]
    OutOfRange {
        /// The offending sub-expression as written.
        token: String,
        /// The field being expanded.
        kind: FieldKind,
        /// Inclusive lower bound of the field.
        min: u32,
        /// Inclusive upper bound of the field.
        max: u32,
    },

    /// `*` was combined with other comma-separated sub-expressions.
    #[error("\"*\" must stand alone in the {kind} field")]
    InvalidWildcardCombination {
        /// The field being expanded.
        kind: FieldKind,
    },

    /// A sub-expression matches none of the recognized shapes (wildcard,
    /// bare integer, range, or any of those with a step).
    #[error("unrecognized symbol {token:?} in the {kind} field")]
    UnrecognizedSymbol {
        /// The offending token as written.
        token: String,
        /// The field being expanded.
        kind: FieldKind,
    },
}

impl ParseError {
    /// Convenience constructor for [`ParseError::MalformedExpression`].
    pub fn malformed(detail: impl Into<String>) -> Self {
        ParseError::MalformedExpression {
            detail: detail.into(),
        }
    }

    /// Convenience constructor for [`ParseError::OutOfRange`] using the
    /// field's own bounds.
    pub fn out_of_range(token: impl Into<String>, kind: FieldKind) -> Self {
        let (min, max) = kind.bounds();
        ParseError::OutOfRange {
            token: token.into(),
            kind,
            min,
            max,
        }
    }

    /// Convenience constructor for [`ParseError::UnrecognizedSymbol`].
    pub fn unrecognized(token: impl Into<String>, kind: FieldKind) -> Self {
        ParseError::UnrecognizedSymbol {
            token: token.into(),
            kind,
        }
    }
}
