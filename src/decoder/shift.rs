//! Heuristic syndrome-shift (error-trapping) decoder.
//!
//! The decoder repeatedly rotates the received word one position to the
//! right, recomputing the syndrome after each rotation. As soon as the
//! syndrome weight drops to `t` or below, the syndrome is XORed into the
//! parity window and the accumulated rotations are undone. This traps any
//! error pattern whose image, after some cyclic rotation, lies entirely
//! within the `n - k` parity positions with weight at most `t` - which is
//! exactly the shape of a short burst.
//!
//! The acceptance rule checks local syndrome weight only, never global
//! distance, so scattered patterns beyond very low weight are unreliable
//! and the decoder can accept a rotation that "fixes" the word into the
//! wrong codeword. That weakness is intrinsic to the algorithm and is left
//! intact; the reliability harness exists to measure it.

use crate::code::BchCode;
use crate::decoder::Decoder;
use crate::error::{Error, Result};
use crate::poly::{self, BitPoly, BitPolySlice};
use log::trace;

/// Rotation-search decoder over a shared [`BchCode`] context.
#[derive(Debug, Clone, Copy)]
pub struct ShiftDecoder<'a> {
    code: &'a BchCode,
}

impl<'a> ShiftDecoder<'a> {
    /// Create a decoder borrowing the given code context.
    pub fn new(code: &'a BchCode) -> Self {
        ShiftDecoder { code }
    }

    /// Run the rotation search and return the full corrected codeword.
    ///
    /// The received word is copied once; rotations operate on the copy
    /// with an explicit shift counter bounded by `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] for a word of the wrong length
    /// and [`Error::Unfixable`] when no rotation within `n` steps yields
    /// an acceptable syndrome.
    pub fn correct(&self, received: &BitPolySlice) -> Result<BitPoly> {
        let n = self.code.code_length();
        if received.len() != n {
            return Err(Error::LengthMismatch {
                expected: n,
                actual: received.len(),
            });
        }

        let parity_len = n - self.code.data_length();
        let capability = self.code.error_correction_capability();
        let mut working = received.to_bitvec();

        for shifts in 0..n {
            let syndrome = poly::remainder(&working, self.code.generator());
            let weight = syndrome.count_ones();

            if weight <= capability {
                trace!(
                    "accepting after {} rotations with syndrome weight {}",
                    shifts,
                    weight
                );

                // Subtract the syndrome inside the parity window
                for i in syndrome.iter_ones() {
                    let index = n - parity_len + i;
                    let flipped = !working[index];
                    working.set(index, flipped);
                }

                // Undo the accumulated right-rotations
                working.rotate_left(shifts);
                return Ok(working);
            }

            // Last bit moves to the front
            working.rotate_right(1);
        }

        Err(Error::Unfixable)
    }
}

impl Decoder for ShiftDecoder<'_> {
    fn decode(&self, received: &BitPolySlice) -> Result<BitPoly> {
        let corrected = self.correct(received)?;
        self.code.recover(&corrected)
    }
}
