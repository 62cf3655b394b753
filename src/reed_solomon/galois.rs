//! Characteristic-2 Galois fields GF(2^m) for the matrix symbologies
//!
//! ## Primitive polynomials
//!
//! Each field is generated by α = 2 reduced by a primitive polynomial. The
//! symbologies fix these polynomials and the generator base, so they are
//! exposed as process-wide instances built on first use:
//!
//! - **QR Code**: 0x11D (x⁸ + x⁴ + x³ + x² + 1), base 0
//! - **Data Matrix / Aztec 8-bit**: 0x12D (x⁸ + x⁵ + x³ + x² + 1), base 1
//! - **Aztec 12-bit**: 0x1069 (x¹² + x⁶ + x⁵ + x³ + 1), base 1
//! - **Aztec 10-bit**: 0x409 (x¹⁰ + x³ + 1), base 1
//! - **Aztec 6-bit / MaxiCode**: 0x43 (x⁶ + x + 1), base 1
//! - **Aztec mode message**: 0x13 (x⁴ + x + 1), base 1
//!
//! Addition and subtraction are both XOR. Multiplication and inversion go
//! through log/antilog tables sized to the field.

use super::error::{RsError, RsResult};
use super::field::Field;
use std::fmt;
use std::sync::OnceLock;

/// QR Code GF(256) primitive polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const QR_CODE_PRIMITIVE: u32 = 0x011D;

/// Data Matrix GF(256) primitive polynomial: 0x12D (x⁸ + x⁵ + x³ + x² + 1)
pub const DATA_MATRIX_PRIMITIVE: u32 = 0x012D;

/// Aztec 12-bit data word polynomial: 0x1069
pub const AZTEC_DATA_12_PRIMITIVE: u32 = 0x1069;

/// Aztec 10-bit data word polynomial: 0x409
pub const AZTEC_DATA_10_PRIMITIVE: u32 = 0x409;

/// Aztec 6-bit data word polynomial, shared with MaxiCode: 0x43
pub const AZTEC_DATA_6_PRIMITIVE: u32 = 0x43;

/// Aztec mode message polynomial: 0x13
pub const AZTEC_PARAM_PRIMITIVE: u32 = 0x13;

/// Largest field size the tables are built for
const MAX_SIZE: u32 = 1 << 16;

/// A characteristic-2 field with precomputed exp/log tables
pub struct GenericGf {
    exp_table: Vec<u32>,
    log_table: Vec<u32>,
    size: u32,
    primitive: u32,
    generator_base: u32,
}

impl GenericGf {
    /// Build a field from its primitive polynomial, size and generator base
    ///
    /// `primitive` must be a primitive polynomial of degree `log2(size)`,
    /// given as a bit mask (0x11D for x⁸ + x⁴ + x³ + x² + 1).
    pub fn new(primitive: u32, size: u32, generator_base: u32) -> RsResult<Self> {
        if !size.is_power_of_two() || !(4..=MAX_SIZE).contains(&size) {
            return Err(RsError::invalid(format!(
                "field size {size} is not a power of two between 4 and {MAX_SIZE}"
            )));
        }
        if primitive < size || primitive >= size << 1 {
            return Err(RsError::invalid(format!(
                "primitive polynomial {primitive:#x} does not have degree {}",
                size.trailing_zeros()
            )));
        }
        if generator_base >= size - 1 {
            return Err(RsError::invalid(format!(
                "generator base {generator_base} must be below {}",
                size - 1
            )));
        }

        let field = Self::from_parameters(primitive, size, generator_base);

        // α must cycle through every non-zero element before returning to 1
        let order = (size - 1) as usize;
        if field.exp_table[1..order].iter().any(|&v| v <= 1) {
            return Err(RsError::invalid(format!(
                "polynomial {primitive:#x} is not primitive over GF({size})"
            )));
        }

        Ok(field)
    }

    /// Build the tables without validating the parameters
    fn from_parameters(primitive: u32, size: u32, generator_base: u32) -> Self {
        let mut field = GenericGf {
            exp_table: vec![0; size as usize],
            log_table: vec![0; size as usize],
            size,
            primitive,
            generator_base,
        };
        field.build_tables();
        field
    }

    fn build_tables(&mut self) {
        let mut x = 1u32;

        for entry in self.exp_table.iter_mut() {
            *entry = x;

            x <<= 1;
            if x >= self.size {
                x ^= self.primitive;
                x &= self.size - 1;
            }
        }

        let order = (self.size - 1) as usize;
        for (l, &value) in self.exp_table.iter().enumerate().take(order) {
            self.log_table[value as usize] = l as u32;
        }

        // Sentinel: zero has no logarithm
        self.log_table[0] = self.size - 1;
    }

    /// The primitive polynomial as a bit mask
    pub fn primitive(&self) -> u32 {
        self.primitive
    }

    #[inline]
    fn order(&self) -> u32 {
        self.size - 1
    }
}

impl Field for GenericGf {
    fn size(&self) -> u32 {
        self.size
    }

    fn generator_base(&self) -> u32 {
        self.generator_base
    }

    // Addition (XOR in GF(2^m))
    #[inline]
    fn add(&self, a: u32, b: u32) -> u32 {
        debug_assert!(self.contains(a) && self.contains(b), "operand outside the field");
        a ^ b
    }

    // Subtraction (same as addition in GF(2^m))
    #[inline]
    fn subtract(&self, a: u32, b: u32) -> u32 {
        debug_assert!(self.contains(a) && self.contains(b), "operand outside the field");
        a ^ b
    }

    #[inline]
    fn multiply(&self, a: u32, b: u32) -> u32 {
        debug_assert!(self.contains(a) && self.contains(b), "operand outside the field");
        if a == 0 || b == 0 {
            return 0;
        }

        let log_sum = (self.log_table[a as usize] + self.log_table[b as usize]) % self.order();
        self.exp_table[log_sum as usize]
    }

    #[inline]
    fn exp(&self, a: u32) -> u32 {
        self.exp_table[(a % self.order()) as usize]
    }

    fn log(&self, a: u32) -> RsResult<u32> {
        if a == 0 || a >= self.size {
            return Err(RsError::invalid(format!("log({a}) is undefined in {self}")));
        }
        Ok(self.log_table[a as usize])
    }

    fn inverse(&self, a: u32) -> RsResult<u32> {
        if a == 0 {
            return Err(RsError::DivisionByZero);
        }
        let log = self.log(a)?;
        Ok(self.exp_table[((self.order() - log) % self.order()) as usize])
    }

    #[inline]
    fn integer_multiple(&self, a: u32, n: usize) -> u32 {
        if n % 2 == 1 {
            a
        } else {
            0
        }
    }
}

impl PartialEq for GenericGf {
    fn eq(&self, other: &Self) -> bool {
        self.primitive == other.primitive
            && self.size == other.size
            && self.generator_base == other.generator_base
    }
}

impl Eq for GenericGf {}

impl fmt::Debug for GenericGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericGf")
            .field("primitive", &format_args!("{:#x}", self.primitive))
            .field("size", &self.size)
            .field("generator_base", &self.generator_base)
            .finish()
    }
}

impl fmt::Display for GenericGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({:#06x},{})", self.primitive, self.size)
    }
}

fn cached(
    cell: &'static OnceLock<GenericGf>,
    primitive: u32,
    size: u32,
    generator_base: u32,
) -> &'static GenericGf {
    cell.get_or_init(|| GenericGf::from_parameters(primitive, size, generator_base))
}

/// GF(4096) for Aztec 12-bit data words
pub fn aztec_data_12() -> &'static GenericGf {
    static FIELD: OnceLock<GenericGf> = OnceLock::new();
    cached(&FIELD, AZTEC_DATA_12_PRIMITIVE, 4096, 1)
}

/// GF(1024) for Aztec 10-bit data words
pub fn aztec_data_10() -> &'static GenericGf {
    static FIELD: OnceLock<GenericGf> = OnceLock::new();
    cached(&FIELD, AZTEC_DATA_10_PRIMITIVE, 1024, 1)
}

/// GF(64) for Aztec 6-bit data words
pub fn aztec_data_6() -> &'static GenericGf {
    static FIELD: OnceLock<GenericGf> = OnceLock::new();
    cached(&FIELD, AZTEC_DATA_6_PRIMITIVE, 64, 1)
}

/// GF(16) for the Aztec mode message
pub fn aztec_param() -> &'static GenericGf {
    static FIELD: OnceLock<GenericGf> = OnceLock::new();
    cached(&FIELD, AZTEC_PARAM_PRIMITIVE, 16, 1)
}

/// GF(256) for QR Code
pub fn qr_code_field_256() -> &'static GenericGf {
    static FIELD: OnceLock<GenericGf> = OnceLock::new();
    cached(&FIELD, QR_CODE_PRIMITIVE, 256, 0)
}

/// GF(256) for Data Matrix
pub fn data_matrix_field_256() -> &'static GenericGf {
    static FIELD: OnceLock<GenericGf> = OnceLock::new();
    cached(&FIELD, DATA_MATRIX_PRIMITIVE, 256, 1)
}

/// GF(256) for Aztec 8-bit data words (the Data Matrix field)
pub fn aztec_data_8() -> &'static GenericGf {
    data_matrix_field_256()
}

/// GF(64) for MaxiCode (the Aztec 6-bit field)
pub fn maxicode_field_64() -> &'static GenericGf {
    aztec_data_6()
}
