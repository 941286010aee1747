//! Algebraic decoder: syndromes, Berlekamp-Massey, Chien search.
//!
//! The full bounded-distance pipeline. Syndromes evaluate the received
//! polynomial at the consecutive powers `alpha^1 .. alpha^2t`;
//! Berlekamp-Massey solves the key equation for the minimal error locator
//! polynomial; Chien search walks every candidate position looking for
//! locator roots. Located bits are flipped and the syndromes are
//! recomputed as a final certificate - a nonzero recheck means the locator
//! pointed at the wrong positions (a would-be miscorrection) and the word
//! is rejected instead.
//!
//! Position convention, used identically at both ends of the pipeline: the
//! most-significant bit of the word has polynomial degree `n - 1`, an
//! error at degree `p` contributes `alpha^(p*i)` to syndrome `S_i`, and
//! the locator root `alpha^(-p)` identifies that error. Bit index and
//! degree are related by `index = n - 1 - p`.

use crate::code::BchCode;
use crate::decoder::Decoder;
use crate::error::{Error, Result};
use crate::field::FIELD_ORDER;
use crate::poly::{BitPoly, BitPolySlice};
use log::debug;

/// Bounded-distance decoder over a shared [`BchCode`] context.
#[derive(Debug, Clone, Copy)]
pub struct AlgebraicDecoder<'a> {
    code: &'a BchCode,
}

impl<'a> AlgebraicDecoder<'a> {
    /// Create a decoder borrowing the given code context.
    pub fn new(code: &'a BchCode) -> Self {
        AlgebraicDecoder { code }
    }

    /// Evaluate the received polynomial at `alpha^1 .. alpha^2t`.
    ///
    /// Returns the `2t` syndrome values `S_i = r(alpha^i)`. The vector is
    /// all zero exactly when the word is a true codeword.
    pub fn syndromes(&self, word: &BitPolySlice) -> Vec<u8> {
        let n = self.code.code_length();
        let field = self.code.field();
        let count = 2 * self.code.error_correction_capability();

        let mut syndromes = vec![0u8; count];
        for (i, syndrome) in syndromes.iter_mut().enumerate() {
            let exponent = i + 1;
            let mut acc = 0u8;
            for index in word.iter_ones() {
                let degree = n - 1 - index;
                acc ^= field.power(degree * exponent);
            }
            *syndrome = acc;
        }
        syndromes
    }

    /// Berlekamp-Massey over GF(2^8).
    ///
    /// Iteratively builds the minimal-degree error locator polynomial
    /// whose coefficients satisfy the key equations against the syndrome
    /// sequence. Returns the locator (constant term first, truncated to
    /// its degree) together with the degree `L`, which equals the number
    /// of errors whenever that number is within the design bound.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::DivisionByZero`] if the last nonzero
    /// discrepancy ever reads as zero - impossible for well-formed
    /// syndromes, so an escape here is an internal invariant violation.
    pub fn berlekamp_massey(&self, syndromes: &[u8]) -> Result<(Vec<u8>, usize)> {
        let field = self.code.field();
        let steps = syndromes.len();

        let mut locator = vec![0u8; steps + 1];
        locator[0] = 1;
        // Auxiliary polynomial B(x): the locator as of the last length change
        let mut auxiliary = vec![0u8; steps + 1];
        auxiliary[0] = 1;

        let mut degree = 0usize;
        let mut gap = 1usize;
        let mut last_discrepancy = 1u8;

        for i in 0..steps {
            let mut discrepancy = syndromes[i];
            for j in 1..=degree {
                discrepancy ^= field.multiply(locator[j], syndromes[i - j]);
            }

            if discrepancy == 0 {
                gap += 1;
                continue;
            }

            let snapshot = locator.clone();
            let scale = field.multiply(discrepancy, field.inverse(last_discrepancy)?);
            for j in 0..=steps - gap {
                if auxiliary[j] != 0 {
                    locator[j + gap] ^= field.multiply(scale, auxiliary[j]);
                }
            }

            if 2 * degree <= i {
                degree = i + 1 - degree;
                auxiliary = snapshot;
                last_discrepancy = discrepancy;
                gap = 1;
            } else {
                gap += 1;
            }
        }

        locator.truncate(degree + 1);
        Ok((locator, degree))
    }

    /// Find the error positions as roots of the locator polynomial.
    ///
    /// For every candidate degree position `p` in `[0, n)` the locator is
    /// evaluated at `alpha^(-p)`; a zero value marks an error there. The
    /// returned values are bit indices (`n - 1 - p`), sorted ascending.
    pub fn chien_search(&self, locator: &[u8]) -> Vec<usize> {
        let n = self.code.code_length();
        let field = self.code.field();

        let mut positions = Vec::new();
        for p in 0..n {
            let mut acc = 0u8;
            for (j, &coefficient) in locator.iter().enumerate() {
                if coefficient != 0 {
                    acc ^= field.multiply(coefficient, field.power((FIELD_ORDER - p) * j));
                }
            }
            if acc == 0 {
                positions.push(n - 1 - p);
            }
        }
        positions.sort_unstable();
        positions
    }
}

impl Decoder for AlgebraicDecoder<'_> {
    fn decode(&self, received: &BitPolySlice) -> Result<BitPoly> {
        let n = self.code.code_length();
        let k = self.code.data_length();
        let capability = self.code.error_correction_capability();

        if received.len() != n {
            return Err(Error::LengthMismatch {
                expected: n,
                actual: received.len(),
            });
        }

        let syndromes = self.syndromes(received);
        if syndromes.iter().all(|&s| s == 0) {
            return Ok(received[..k].to_bitvec());
        }

        let (locator, degree) = self.berlekamp_massey(&syndromes)?;
        let positions = self.chien_search(&locator);
        debug!(
            "locator degree {} with {} roots located",
            degree,
            positions.len()
        );

        if positions.len() > capability {
            return Err(Error::Unfixable);
        }

        let mut corrected = received.to_bitvec();
        for &index in &positions {
            let flipped = !corrected[index];
            corrected.set(index, flipped);
        }

        // Certify the correction; a residual syndrome means the locator
        // did not split over the candidate positions and flipping them
        // produced a non-codeword
        if self.syndromes(&corrected).iter().any(|&s| s != 0) {
            return Err(Error::Unfixable);
        }

        Ok(corrected[..k].to_bitvec())
    }
}
