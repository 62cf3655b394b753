//! The arithmetic contract shared by every field the codec runs over
//!
//! Two families implement it: [`GenericGf`](super::GenericGf), a
//! characteristic-2 field built from a primitive polynomial, and
//! [`ModulusGf`](super::ModulusGf), arithmetic modulo a prime (929 for PDF417).
//! [`Poly`], the encoder and the decoder are written once against this trait.

use super::error::RsResult;
use super::poly::Poly;
use std::fmt;

/// Finite field arithmetic over elements `0..size()`
///
/// Elements are plain `u32` codeword values. Callers must always go through
/// `add`/`subtract` rather than assuming XOR: only the characteristic-2
/// family has `add == subtract`.
///
/// The arithmetic methods take operands that already satisfy
/// [`contains`](Field::contains). Out-of-range operands trip a debug
/// assertion; release builds may panic or return a meaningless value.
pub trait Field: fmt::Debug + Send + Sync {
    /// Number of elements in the field
    fn size(&self) -> u32;

    /// Power of α at which the generator polynomial's first root sits
    fn generator_base(&self) -> u32;

    fn add(&self, a: u32, b: u32) -> u32;

    fn subtract(&self, a: u32, b: u32) -> u32;

    fn multiply(&self, a: u32, b: u32) -> u32;

    /// α raised to `a`, with `a` taken modulo the multiplicative order
    fn exp(&self, a: u32) -> u32;

    /// Discrete logarithm base α; fails for zero
    fn log(&self, a: u32) -> RsResult<u32>;

    /// Multiplicative inverse; fails with `DivisionByZero` for zero
    fn inverse(&self, a: u32) -> RsResult<u32>;

    /// `a` added to itself `n` times
    fn integer_multiple(&self, a: u32, n: usize) -> u32;

    /// Additive inverse
    fn negate(&self, a: u32) -> u32 {
        self.subtract(0, a)
    }

    /// `a` raised to a (possibly negative) exponent
    fn pow(&self, a: u32, exponent: i64) -> u32 {
        match self.log(a) {
            Ok(log) => {
                let order = i64::from(self.size() - 1);
                self.exp((i64::from(log) * exponent).rem_euclid(order) as u32)
            }
            Err(_) if exponent == 0 => 1,
            Err(_) => 0,
        }
    }

    /// Whether `a` is a valid element of this field
    fn contains(&self, a: u32) -> bool {
        a < self.size()
    }

    /// `coefficient * x^degree`; fails when `coefficient` is not an element
    fn build_monomial(&self, degree: usize, coefficient: u32) -> RsResult<Poly<'_, Self>>
    where
        Self: Sized,
    {
        Poly::monomial(self, degree, coefficient)
    }

    /// The zero polynomial
    ///
    /// Built on each call rather than stored in the field, so `Field` stays
    /// object-safe and needs no self-referential storage.
    fn zero(&self) -> Poly<'_, Self>
    where
        Self: Sized,
    {
        Poly::zero(self)
    }

    /// The constant polynomial `1`, built on each call like [`zero`](Field::zero)
    fn one(&self) -> Poly<'_, Self>
    where
        Self: Sized,
    {
        Poly::one(self)
    }
}
