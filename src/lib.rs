//! Binary BCH(255,171) error correction.
//!
//! BCH codes are cyclic error-correcting codes built from polynomials over
//! finite fields, named after Raj Bose, Dwijendra Kumar Chaudhuri and
//! Alexis Hocquenghem. This crate implements the binary BCH code of length
//! 255 with 171 message bits, which corrects up to 11 bit errors per
//! block.
//!
//! This implementation provides:
//! - GF(2^8) arithmetic over precomputed log/antilog tables
//! - GF(2) polynomial algebra on bit vectors
//! - Generator polynomial construction from a fixed minimal-polynomial table
//! - A systematic encoder and codeword validator
//! - A heuristic syndrome-shift decoder for burst errors
//! - A full algebraic decoder (syndromes, Berlekamp-Massey, Chien search)
//! - A reliability harness that injects error patterns and tallies outcomes
//!
//! # Examples
//!
//! ```
//! use bch255::{bch_255_171_11, AlgebraicDecoder, Decoder};
//! use bitvec::prelude::*;
//!
//! let code = bch_255_171_11().unwrap();
//! let message = bitvec![u8, Msb0; 1; 171];
//! let mut received = code.encode(&message).unwrap();
//!
//! // Flip a handful of bits in transit
//! for index in [3, 77, 241] {
//!     let flipped = !received[index];
//!     received.set(index, flipped);
//! }
//!
//! let decoder = AlgebraicDecoder::new(&code);
//! assert_eq!(decoder.decode(&received).unwrap(), message);
//! ```

pub mod code;
pub mod decoder;
pub mod error;
pub mod field;
pub mod generator;
pub mod harness;
pub mod poly;

pub use code::{bch_255_171_11, BchCode};
pub use decoder::{AlgebraicDecoder, Decoder, ShiftDecoder};
pub use error::{Error, Result};
pub use field::GaloisField256;
pub use harness::{ErrorInjector, ReliabilityHarness};
