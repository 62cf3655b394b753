//! Reed-Solomon Error Correction Module
//!
//! This module provides the Reed-Solomon codec shared by the 2-D symbologies.
//! QR Code, Aztec, Data Matrix and MaxiCode work over GF(2^m) fields built from
//! fixed primitive polynomials; PDF417 works over the prime field GF(929).
//!
//! Both families implement [`Field`], and [`Poly`], [`ReedSolomonEncoder`]
//! and [`ReedSolomonDecoder`] are generic over it.

pub mod batch;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod field;
pub mod galois;
pub mod modulus;
pub mod poly;

pub use batch::{decode_blocks, encode_blocks, CodewordBlock};
pub use decoder::ReedSolomonDecoder;
pub use encoder::ReedSolomonEncoder;
pub use error::{RsError, RsResult};
pub use field::Field;
pub use galois::GenericGf;
pub use modulus::ModulusGf;
pub use poly::Poly;
