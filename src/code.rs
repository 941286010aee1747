//! Systematic BCH encoding over the fixed GF(2^8) block length.
//!
//! [`BchCode`] bundles the immutable data every operation needs: the code
//! parameters, the GF(2^8) tables and the generator polynomial. It is built
//! once and passed by reference into the decoders, so there is no
//! module-level state and arbitrarily many encode/decode calls can share
//! one instance without locking.
//!
//! Encoding is systematic: the first `k` bits of every codeword are the
//! message, verbatim, followed by `n - k` parity bits computed as the
//! remainder of the zero-padded message modulo the generator polynomial.

use crate::error::{Error, Result};
use crate::field::GaloisField256;
use crate::generator;
use crate::poly::{self, BitPoly, BitPolySlice};
use std::fmt::{Display, Formatter};

/// Block length of a binary BCH code over GF(2^8)
const BLOCK_LENGTH: usize = 255;

/// A binary BCH code with its precomputed field and generator data.
#[derive(Debug, Clone)]
pub struct BchCode {
    /// Code length (n)
    code_length: usize,
    /// Number of message bits (k) per codeword
    data_length: usize,
    /// Maximum number of errors the code is designed to correct (t)
    error_correction_capability: usize,
    /// GF(2^8) log/antilog tables
    field: GaloisField256,
    /// Generator polynomial of degree n - k
    generator: BitPoly,
}

impl BchCode {
    /// Create a BCH code with the given parameters.
    ///
    /// # Arguments
    ///
    /// * `n` - Code length; must be 255, the block length over GF(2^8)
    /// * `k` - Message length in bits
    /// * `t` - Error correction capability
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] when the parameters are out of
    /// range or the generator polynomial built for `t` does not have
    /// degree `n - k` (for example when `t` exceeds the coverage of the
    /// minimal-polynomial table).
    pub fn new(n: usize, k: usize, t: usize) -> Result<Self> {
        if n != BLOCK_LENGTH {
            return Err(Error::InvalidParameters(format!(
                "code length must be {} for GF(2^8), got {}",
                BLOCK_LENGTH, n
            )));
        }

        if k == 0 || k >= n {
            return Err(Error::InvalidParameters(format!(
                "message length must be between 1 and {}, got {}",
                n - 1,
                k
            )));
        }

        if t == 0 {
            return Err(Error::InvalidParameters(
                "error correction capability must be positive".to_string(),
            ));
        }

        let generator = generator::build(t);
        let generator_degree = generator.len() - 1;
        if generator_degree != n - k {
            return Err(Error::InvalidParameters(format!(
                "generator degree {} does not match n - k = {}",
                generator_degree,
                n - k
            )));
        }

        Ok(BchCode {
            code_length: n,
            data_length: k,
            error_correction_capability: t,
            field: GaloisField256::new(),
            generator,
        })
    }

    /// Get the code length (n)
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Get the message length (k)
    pub fn data_length(&self) -> usize {
        self.data_length
    }

    /// Get the error correction capability (t)
    pub fn error_correction_capability(&self) -> usize {
        self.error_correction_capability
    }

    /// The generator polynomial, most-significant coefficient first
    pub fn generator(&self) -> &BitPolySlice {
        &self.generator
    }

    /// The GF(2^8) tables shared by the algebraic decoder
    pub fn field(&self) -> &GaloisField256 {
        &self.field
    }

    /// Encode a `k`-bit message into an `n`-bit systematic codeword.
    ///
    /// The message is padded with `n - k` zero bits, divided by the
    /// generator polynomial, and the remainder is appended as parity. The
    /// resulting codeword is an exact multiple of the generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when the message is not exactly
    /// `k` bits long.
    pub fn encode(&self, message: &BitPolySlice) -> Result<BitPoly> {
        if message.len() != self.data_length {
            return Err(Error::LengthMismatch {
                expected: self.data_length,
                actual: message.len(),
            });
        }

        let mut padded = message.to_bitvec();
        padded.resize(self.code_length, false);
        let parity = poly::remainder(&padded, &self.generator);

        let mut codeword = message.to_bitvec();
        codeword.extend_from_bitslice(&parity);
        Ok(codeword)
    }

    /// Check whether an `n`-bit word is a valid codeword.
    ///
    /// A word is a codeword exactly when it is divisible by the generator
    /// polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when the word is not exactly `n`
    /// bits long.
    pub fn validate(&self, codeword: &BitPolySlice) -> Result<bool> {
        if codeword.len() != self.code_length {
            return Err(Error::LengthMismatch {
                expected: self.code_length,
                actual: codeword.len(),
            });
        }

        Ok(poly::remainder(codeword, &self.generator).not_any())
    }

    /// Extract the original message from a corrected codeword.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] for a word of the wrong length
    /// and [`Error::Unfixable`] when the word is not a multiple of the
    /// generator polynomial, i.e. not a codeword at all.
    pub fn recover(&self, codeword: &BitPolySlice) -> Result<BitPoly> {
        if !self.validate(codeword)? {
            return Err(Error::Unfixable);
        }
        Ok(codeword[..self.data_length].to_bitvec())
    }
}

impl Display for BchCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BCH({},{},{}) over GF(2^8)",
            self.code_length, self.data_length, self.error_correction_capability
        )
    }
}

/// Create the BCH(255,171) code correcting up to 11 errors.
pub fn bch_255_171_11() -> Result<BchCode> {
    BchCode::new(255, 171, 11)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_message(rng: &mut StdRng, k: usize) -> BitPoly {
        (0..k).map(|_| rng.gen_bool(0.5)).collect()
    }

    #[test]
    fn test_code_creation() {
        let code = bch_255_171_11().unwrap();
        assert_eq!(code.code_length(), 255);
        assert_eq!(code.data_length(), 171);
        assert_eq!(code.error_correction_capability(), 11);
        assert_eq!(code.generator().len() - 1, 84);
        assert_eq!(code.to_string(), "BCH(255,171,11) over GF(2^8)");
    }

    #[test]
    fn test_invalid_parameters() {
        // Wrong block length for GF(2^8)
        assert!(matches!(
            BchCode::new(127, 64, 10),
            Err(Error::InvalidParameters(_))
        ));

        // Degenerate message lengths
        assert!(BchCode::new(255, 0, 11).is_err());
        assert!(BchCode::new(255, 255, 11).is_err());

        // Zero correction capability
        assert!(BchCode::new(255, 171, 0).is_err());

        // k inconsistent with the generator degree for t
        assert!(matches!(
            BchCode::new(255, 170, 11),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_encode_is_systematic() {
        let code = bch_255_171_11().unwrap();
        let message: BitPoly = bitvec![u8, Msb0; 1; 171];

        let codeword = code.encode(&message).unwrap();
        assert_eq!(codeword.len(), 255);
        assert_eq!(codeword[..171], message[..]);
    }

    #[test]
    fn test_encode_validate_round_trip() {
        let code = bch_255_171_11().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let message = random_message(&mut rng, code.data_length());
            let codeword = code.encode(&message).unwrap();
            assert!(code.validate(&codeword).unwrap());
        }
    }

    #[test]
    fn test_encode_rejects_wrong_length() {
        let code = bch_255_171_11().unwrap();
        let short: BitPoly = bitvec![u8, Msb0; 0; 170];
        assert_eq!(
            code.encode(&short),
            Err(Error::LengthMismatch {
                expected: 171,
                actual: 170
            })
        );
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        let code = bch_255_171_11().unwrap();
        let short: BitPoly = bitvec![u8, Msb0; 0; 254];
        assert!(matches!(
            code.validate(&short),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_detects_corruption() {
        let code = bch_255_171_11().unwrap();
        let message: BitPoly = bitvec![u8, Msb0; 1; 171];
        let mut codeword = code.encode(&message).unwrap();

        let flipped = !codeword[40];
        codeword.set(40, flipped);
        assert!(!code.validate(&codeword).unwrap());
    }

    #[test]
    fn test_linearity() {
        let code = bch_255_171_11().unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let m1 = random_message(&mut rng, code.data_length());
            let m2 = random_message(&mut rng, code.data_length());

            let mut sum = m1.clone();
            sum ^= m2.as_bitslice();

            let mut codeword_sum = code.encode(&m1).unwrap();
            codeword_sum ^= code.encode(&m2).unwrap().as_bitslice();

            assert_eq!(code.encode(&sum).unwrap(), codeword_sum);
        }
    }

    #[test]
    fn test_recover_round_trip() {
        let code = bch_255_171_11().unwrap();
        let mut rng = StdRng::seed_from_u64(23);

        let message = random_message(&mut rng, code.data_length());
        let codeword = code.encode(&message).unwrap();
        assert_eq!(code.recover(&codeword).unwrap(), message);
    }

    #[test]
    fn test_recover_rejects_non_codeword() {
        let code = bch_255_171_11().unwrap();
        let message: BitPoly = bitvec![u8, Msb0; 1; 171];
        let mut codeword = code.encode(&message).unwrap();

        let flipped = !codeword[0];
        codeword.set(0, flipped);
        assert_eq!(code.recover(&codeword), Err(Error::Unfixable));
    }
}
