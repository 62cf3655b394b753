//! Prime-modulus field GF(p) for PDF417
//!
//! PDF417 codewords are residues modulo 929 and its error correction runs in
//! GF(929) with generator 3. Unlike GF(2^m), addition and subtraction are
//! distinct here, which is why the codec never assumes XOR.

use super::error::{RsError, RsResult};
use super::field::Field;
use std::fmt;
use std::sync::OnceLock;

/// PDF417 codeword modulus
pub const PDF417_MODULUS: u32 = 929;

/// Primitive root used by PDF417
pub const PDF417_GENERATOR: u32 = 3;

/// Arithmetic modulo a prime with exp/log tables over a primitive root
pub struct ModulusGf {
    exp_table: Vec<u32>,
    log_table: Vec<u32>,
    modulus: u32,
    generator: u32,
    generator_base: u32,
}

impl ModulusGf {
    /// Build GF(`modulus`) generated by `generator`
    ///
    /// Fails unless `generator` is a primitive root, which also rules out
    /// composite moduli.
    pub fn new(modulus: u32, generator: u32, generator_base: u32) -> RsResult<Self> {
        if modulus < 3 || modulus > u32::from(u16::MAX) + 1 {
            return Err(RsError::invalid(format!(
                "modulus {modulus} is outside 3..=65536"
            )));
        }
        if generator < 2 || generator >= modulus {
            return Err(RsError::invalid(format!(
                "generator {generator} is outside 2..{modulus}"
            )));
        }
        if generator_base >= modulus - 1 {
            return Err(RsError::invalid(format!(
                "generator base {generator_base} must be below {}",
                modulus - 1
            )));
        }

        let field = Self::from_parameters(modulus, generator, generator_base);

        let order = (modulus - 1) as usize;
        if field.exp_table[1..order].iter().any(|&v| v <= 1) {
            return Err(RsError::invalid(format!(
                "{generator} is not a primitive root modulo {modulus}"
            )));
        }

        Ok(field)
    }

    fn from_parameters(modulus: u32, generator: u32, generator_base: u32) -> Self {
        let mut field = ModulusGf {
            exp_table: vec![0; modulus as usize],
            log_table: vec![0; modulus as usize],
            modulus,
            generator,
            generator_base,
        };
        field.build_tables();
        field
    }

    fn build_tables(&mut self) {
        let mut x = 1u64;
        for entry in self.exp_table.iter_mut() {
            *entry = x as u32;
            x = (x * u64::from(self.generator)) % u64::from(self.modulus);
        }

        let order = (self.modulus - 1) as usize;
        for (l, &value) in self.exp_table.iter().enumerate().take(order) {
            self.log_table[value as usize] = l as u32;
        }
        self.log_table[0] = self.modulus - 1;
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    pub fn generator(&self) -> u32 {
        self.generator
    }

    #[inline]
    fn order(&self) -> u32 {
        self.modulus - 1
    }
}

impl Field for ModulusGf {
    fn size(&self) -> u32 {
        self.modulus
    }

    fn generator_base(&self) -> u32 {
        self.generator_base
    }

    #[inline]
    fn add(&self, a: u32, b: u32) -> u32 {
        debug_assert!(self.contains(a) && self.contains(b), "operand outside the field");
        (a % self.modulus + b % self.modulus) % self.modulus
    }

    #[inline]
    fn subtract(&self, a: u32, b: u32) -> u32 {
        debug_assert!(self.contains(a) && self.contains(b), "operand outside the field");
        (self.modulus + a % self.modulus - b % self.modulus) % self.modulus
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
        if a == 0 || a >= self.modulus {
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

    fn integer_multiple(&self, a: u32, n: usize) -> u32 {
        let n = (n % self.modulus as usize) as u64;
        ((u64::from(a) * n) % u64::from(self.modulus)) as u32
    }
}

impl PartialEq for ModulusGf {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus
            && self.generator == other.generator
            && self.generator_base == other.generator_base
    }
}

impl Eq for ModulusGf {}

impl fmt::Debug for ModulusGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModulusGf")
            .field("modulus", &self.modulus)
            .field("generator", &self.generator)
            .field("generator_base", &self.generator_base)
            .finish()
    }
}

impl fmt::Display for ModulusGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}

/// GF(929) with generator 3, roots starting at α¹
pub fn pdf417() -> &'static ModulusGf {
    static FIELD: OnceLock<ModulusGf> = OnceLock::new();
    FIELD.get_or_init(|| ModulusGf::from_parameters(PDF417_MODULUS, PDF417_GENERATOR, 1))
}
