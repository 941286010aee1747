//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced by code construction, encoding and decoding.
///
/// Decoding failure (`Unfixable`) is an expected outcome at high error
/// weight, not a bug; every other variant signals a caller mistake or an
/// internal invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested code parameters are inconsistent or unsupported.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// An input bit vector has the wrong length for this code.
    #[error("expected {expected} bits, got {actual}")]
    LengthMismatch {
        /// Length required by the code
        expected: usize,
        /// Length the caller supplied
        actual: usize,
    },

    /// The multiplicative inverse of zero was requested in GF(2^8).
    ///
    /// This never happens for well-formed syndromes; if it surfaces from
    /// the algebraic decoder it indicates an internal invariant violation.
    #[error("multiplicative inverse of zero in GF(2^8)")]
    DivisionByZero,

    /// The decoder could not certify a correction within the guaranteed
    /// distance of the code.
    #[error("error pattern is not correctable")]
    Unfixable,
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
