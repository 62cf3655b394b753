//! Reed-Solomon error correction for 2-D barcode symbologies
//!
//! The codec generates parity codewords at encode time and locates and
//! repairs damaged codewords at decode time. Codeword placement, character
//! modes and image detection live outside this crate; it only sees flat
//! codeword buffers.
//!
//! ```
//! use barcode_ecc::reed_solomon::{galois, ReedSolomonDecoder, ReedSolomonEncoder};
//!
//! let field = galois::qr_code_field_256();
//! let parity = ReedSolomonEncoder::new(field).encode(&[1, 2, 3, 4], 2).unwrap();
//! assert_eq!(parity, vec![4, 0]);
//!
//! let mut received = vec![1, 2, 3, 9, 4, 0];
//! ReedSolomonDecoder::new(field).decode(&mut received, 2).unwrap();
//! assert_eq!(received, vec![1, 2, 3, 4, 4, 0]);
//! ```

pub mod args;
pub mod codewords;
pub mod config;
pub mod reed_solomon;
pub mod symbology;

pub use args::parse_args;
pub use config::CodecConfig;
pub use symbology::Symbology;
