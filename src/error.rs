//! Error types for pairing operations.
//!
//! Values are carried widened to `u128`, which holds every [`Natural`], so
//! the error type does not depend on the integer width of the pairing.
//!
//! [`Natural`]: crate::Natural

use thiserror::Error;

/// A violated precondition of a pairing operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PairingError {
    #[error("invalid arity: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("value {value} on axis {axis} is out of bounds for size {size}")]
    OutOfBounds { axis: usize, value: u128, size: u128 },

    #[error("code {code} is out of range {total}")]
    OutOfRange { code: u128, total: u128 },

    #[error("axis {axis} of a bounded pairing has size zero")]
    EmptyAxis { axis: usize },

    #[error("exponent {exponent} does not fit in a {bits}-bit code")]
    ExponentOverflow { exponent: u128, bits: u32 },

    #[error("no odd factor found for code {code}")]
    SearchExhausted { code: u128 },

    #[error("innermost pairing {pairing} bounds an axis; it must pair two unbounded axes")]
    BoundedInnermost { pairing: String },

    #[error("a composition needs at least 2 dimensions, got {got}")]
    TooFewDimensions { got: usize },

    #[error("combined size of dimensions {dims:?} does not fit in a {bits}-bit code")]
    TotalOverflow { dims: Vec<u128>, bits: u32 },
}

/// A specialized Result type for pairing operations.
pub type Result<T> = std::result::Result<T, PairingError>;
