//! Polynomial arithmetic over GF(2) on bit vectors.
//!
//! Polynomials are stored most-significant coefficient first: index 0 holds
//! the highest-degree term and the vector length is `degree + 1`. Since the
//! coefficients are 0/1, multiplication is AND and coefficient addition is
//! XOR, so both operations reduce to bitwise loops.
//!
//! These routines carry the generator polynomial, messages, codewords and
//! syndromes for the whole crate.

use bitvec::prelude::*;

/// Bit-vector polynomial, most-significant coefficient first
pub type BitPoly = BitVec<u8, Msb0>;

/// Borrowed view of a bit-vector polynomial
pub type BitPolySlice = BitSlice<u8, Msb0>;

/// Multiply two GF(2) polynomials.
///
/// The result has length `p.len() + q.len() - 1`; coefficient `i` is the
/// XOR over all `j` of `p[j] AND q[i - j]`.
pub fn multiply(p: &BitPolySlice, q: &BitPolySlice) -> BitPoly {
    debug_assert!(!p.is_empty() && !q.is_empty());

    let mut result = bitvec![u8, Msb0; 0; p.len() + q.len() - 1];
    for i in p.iter_ones() {
        for j in q.iter_ones() {
            let flipped = !result[i + j];
            result.set(i + j, flipped);
        }
    }
    result
}

/// Remainder of GF(2) polynomial long division.
///
/// Classic shift-XOR division: wherever the leading coefficient of the
/// running dividend is 1, the divisor is XORed into the leading window,
/// then the leading coefficient is dropped. The returned remainder has
/// length `divisor.len() - 1`.
///
/// The divisor must be non-empty with leading coefficient 1; generator
/// polynomials satisfy this by construction.
pub fn remainder(dividend: &BitPolySlice, divisor: &BitPolySlice) -> BitPoly {
    debug_assert!(!divisor.is_empty() && divisor[0], "divisor must be monic");

    let dlen = divisor.len();
    if dividend.len() < dlen {
        return dividend.to_bitvec();
    }

    // Walking an offset forward is equivalent to repeatedly dropping the
    // leading coefficient, without the quadratic shuffling
    let mut work = dividend.to_bitvec();
    for offset in 0..=work.len() - dlen {
        if work[offset] {
            for j in 0..dlen {
                let flipped = work[offset + j] ^ divisor[j];
                work.set(offset + j, flipped);
            }
        }
    }

    work[work.len() - (dlen - 1)..].to_bitvec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(bits: &[u8]) -> BitPoly {
        bits.iter().map(|&b| b == 1).collect()
    }

    #[test]
    fn test_multiply_by_one() {
        let p = poly(&[1, 0, 1, 1]);
        let one = poly(&[1]);
        assert_eq!(multiply(&p, &one), p);
        assert_eq!(multiply(&one, &p), p);
    }

    #[test]
    fn test_multiply_known_product() {
        // (x + 1)(x + 1) = x^2 + 1 over GF(2)
        let p = poly(&[1, 1]);
        assert_eq!(multiply(&p, &p), poly(&[1, 0, 1]));

        // (x^2 + x + 1)(x + 1) = x^3 + 1
        let q = poly(&[1, 1, 1]);
        assert_eq!(multiply(&q, &p), poly(&[1, 0, 0, 1]));
    }

    #[test]
    fn test_multiply_result_length() {
        let p = poly(&[1, 0, 0, 1, 1]);
        let q = poly(&[1, 1, 0, 1]);
        assert_eq!(multiply(&p, &q).len(), p.len() + q.len() - 1);
    }

    #[test]
    fn test_remainder_exact_division() {
        // x^3 + 1 = (x + 1)(x^2 + x + 1), so the remainder is zero
        let dividend = poly(&[1, 0, 0, 1]);
        let divisor = poly(&[1, 1]);
        let rem = remainder(&dividend, &divisor);
        assert_eq!(rem.len(), divisor.len() - 1);
        assert!(rem.not_any());
    }

    #[test]
    fn test_remainder_known_value() {
        // x^4 + x + 1 divided by x^2 + 1:
        // x^4 + x + 1 = (x^2 + 1)(x^2 + 1) + x, remainder x
        let dividend = poly(&[1, 0, 0, 1, 1]);
        let divisor = poly(&[1, 0, 1]);
        assert_eq!(remainder(&dividend, &divisor), poly(&[1, 0]));
    }

    #[test]
    fn test_remainder_length_is_divisor_degree() {
        let dividend = poly(&[1, 1, 0, 1, 0, 0, 1, 1, 1, 0]);
        let divisor = poly(&[1, 0, 1, 1]);
        assert_eq!(remainder(&dividend, &divisor).len(), divisor.len() - 1);
    }

    #[test]
    fn test_remainder_of_zero_dividend() {
        let dividend = poly(&[0, 0, 0, 0, 0, 0]);
        let divisor = poly(&[1, 1, 1]);
        assert!(remainder(&dividend, &divisor).not_any());
    }

    #[test]
    fn test_remainder_short_dividend_passes_through() {
        let dividend = poly(&[1, 1]);
        let divisor = poly(&[1, 0, 1, 1]);
        assert_eq!(remainder(&dividend, &divisor), dividend);
    }
}
