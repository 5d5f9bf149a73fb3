//! Defines [`GeoShapeError`], representing all errors returned by this crate.

use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Every variant names the parameter or operand that caused it, so callers can point at the
/// offending input.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoShapeError {
    /// A required input (a sequence, WKT text or WKB bytes) was absent or empty.
    #[error("Required argument `{name}` is absent")]
    ArgumentNull {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// WKT text or WKB bytes did not parse, or parsed into an unexpected geometry type.
    #[error("Malformed input in `{name}`: {reason}")]
    MalformedInput {
        /// Name of the argument holding the malformed input.
        name: &'static str,
        /// What went wrong.
        reason: String,
    },

    /// A shape failed validation before an operation that requires a valid shape.
    #[error("Invalid shape state for `{operand}`: {reason}")]
    InvalidShapeState {
        /// Which operand was invalid (`self` or `other`).
        operand: &'static str,
        /// The validation diagnostic.
        reason: String,
    },

    /// Whenever an element count does not fit in the 4-byte count field of WKB.
    #[error("Overflow: element count does not fit in a WKB u32 field")]
    Overflow,

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [std::fmt::Error]
    #[error(transparent)]
    FmtError(#[from] std::fmt::Error),
}

impl GeoShapeError {
    pub(crate) fn malformed(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("rejecting malformed `{name}`: {reason}");
        Self::MalformedInput { name, reason }
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoShapeError>;
