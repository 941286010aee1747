//! Decoding strategies for received BCH words.
//!
//! Two concrete strategies implement the common [`Decoder`] contract:
//!
//! - [`ShiftDecoder`] - the heuristic error-trapping decoder, which hunts
//!   for a cyclic rotation whose syndrome is light enough to subtract
//!   directly. Cheap, reliable for short bursts, and knowingly capable of
//!   silent miscorrection.
//! - [`AlgebraicDecoder`] - the full syndrome / Berlekamp-Massey / Chien
//!   pipeline, with the bounded-distance guarantee of the code.
//!
//! Every outcome is a typed value: the recovered message on success, or a
//! specific [`Error`](crate::error::Error) kind on failure. Callers choose
//! a strategy explicitly; nothing is inferred from panics or error
//! downcasting at the boundary.

pub mod algebraic;
pub mod shift;

pub use algebraic::AlgebraicDecoder;
pub use shift::ShiftDecoder;

use crate::error::Result;
use crate::poly::{BitPoly, BitPolySlice};

/// Common contract for decoding strategies.
pub trait Decoder {
    /// Attempt to recover the original `k`-bit message from a received
    /// `n`-bit word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`](crate::error::Error::LengthMismatch)
    /// for a word of the wrong length and
    /// [`Error::Unfixable`](crate::error::Error::Unfixable) when the error
    /// pattern cannot be corrected with certainty.
    fn decode(&self, received: &BitPolySlice) -> Result<BitPoly>;
}
