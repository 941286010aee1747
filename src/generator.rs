//! Generator polynomial construction for binary BCH codes over GF(2^8).
//!
//! A BCH generator polynomial is the product of the minimal polynomials of
//! the consecutive odd powers `alpha^1, alpha^3, ..., alpha^(2t-1)`. Even
//! powers share a minimal polynomial with one of the odd ones (they are
//! conjugates), so the odd indices alone cover the full run of `2t`
//! consecutive roots required for a designed distance of `2t + 1`.
//!
//! The minimal polynomials are a fixed precomputed table for the field
//! defined by `x^8 + x^4 + x^3 + x^2 + 1`. The table covers the odd
//! indices 1 through 21, which is exactly what codes up to `t = 11` need.

use crate::poly::{self, BitPoly};
use bitvec::prelude::*;

/// Minimal polynomials of `alpha^i` over GF(2), most-significant
/// coefficient first. All entries have degree 8 except `m17`, whose
/// conjugacy class has only four members.
const MINIMAL_POLYNOMIALS: [(usize, &[u8]); 11] = [
    (1, &[1, 0, 0, 0, 1, 1, 1, 0, 1]),
    (3, &[1, 0, 1, 1, 1, 0, 1, 1, 1]),
    (5, &[1, 1, 1, 1, 1, 0, 0, 1, 1]),
    (7, &[1, 0, 1, 1, 0, 1, 0, 0, 1]),
    (9, &[1, 1, 0, 1, 1, 1, 1, 0, 1]),
    (11, &[1, 1, 1, 1, 0, 0, 1, 1, 1]),
    (13, &[1, 0, 0, 1, 0, 1, 0, 1, 1]),
    (15, &[1, 1, 1, 0, 1, 0, 1, 1, 1]),
    (17, &[1, 0, 0, 1, 1]),
    (19, &[1, 0, 1, 1, 0, 0, 1, 0, 1]),
    (21, &[1, 1, 0, 0, 0, 1, 0, 1, 1]),
];

/// Look up the minimal polynomial of `alpha^index`.
///
/// Returns `None` for indices outside the precomputed table.
pub fn minimal_polynomial(index: usize) -> Option<BitPoly> {
    MINIMAL_POLYNOMIALS
        .iter()
        .find(|(i, _)| *i == index)
        .map(|(_, coefficients)| coefficients.iter().map(|&c| c == 1).collect())
}

/// Build the generator polynomial for error correction capability `t`.
///
/// Computes `g(x)` as the product of the minimal polynomials of the odd
/// powers `alpha^1, alpha^3, ..., alpha^(2t-1)`. Odd indices missing from
/// the table are silently skipped, so callers must stay within the range
/// the table covers (`t <= 11`); larger values produce a generator that is
/// too short for the requested capability.
pub fn build(t: usize) -> BitPoly {
    let mut generator: BitPoly = bitvec![u8, Msb0; 1];
    for i in (1..2 * t).step_by(2) {
        if let Some(minimal) = minimal_polynomial(i) {
            generator = poly::multiply(&generator, &minimal);
        }
    }
    generator
}
