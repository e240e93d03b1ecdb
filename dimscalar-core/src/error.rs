//! Error types for the fallible operations of this crate.

use crate::kind::QuantityKind;
use thiserror::Error;

/// Result type for quantity operations.
pub type Result<T> = core::result::Result<T, QuantityError>;

/// Why a piece of text could not be read as a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The text was empty or only whitespace.
    #[error("empty input")]
    Empty,

    /// The text does not start with a number.
    #[error("no leading number")]
    MissingNumber,

    /// The text after the number matches none of the kind's units.
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
}

/// Error type for quantity operations.
///
/// Floating-point edge cases (division by zero, NaN, overflow to infinity) are never reported here; they propagate
/// as IEEE-754 values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    /// Text could not be parsed into a scalar of the requested kind.
    #[error("Error parsing {kind} from {text:?}: {reason}")]
    Parse {
        /// Kind the text was parsed as.
        kind: QuantityKind,
        /// The offending input.
        text: String,
        /// What went wrong.
        reason: ParseFailure,
    },

    /// The dispatch factory has no concrete scalar type for the unit's kind.
    #[error("Unrecognized unit `{unit}` of kind {kind}")]
    UnrecognizedUnit {
        /// Abbreviation of the unit.
        unit: String,
        /// Kind the unit reports.
        kind: QuantityKind,
    },

    /// Two quantity kinds met where only one is allowed.
    #[error("Incompatible quantity kinds: expected {expected}, found {found}")]
    IncompatibleKind {
        /// The kind required by the operation.
        expected: QuantityKind,
        /// The kind that was supplied.
        found: QuantityKind,
    },

    /// Display settings could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl QuantityError {
    pub(crate) fn parse(kind: QuantityKind, text: &str, reason: ParseFailure) -> Self {
        QuantityError::Parse {
            kind,
            text: text.to_string(),
            reason,
        }
    }

    pub(crate) fn incompatible(expected: QuantityKind, found: QuantityKind) -> Self {
        QuantityError::IncompatibleKind { expected, found }
    }
}
