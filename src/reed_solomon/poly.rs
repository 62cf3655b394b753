//! Immutable polynomials over a [`Field`]
//!
//! Coefficients are stored highest degree first. The zero polynomial is the
//! single coefficient `[0]`; every other polynomial has a non-zero leading
//! coefficient. Arithmetic never mutates its operands, so a cached generator
//! can be shared by any number of encode calls.

use super::error::{RsError, RsResult};
use super::field::Field;
use std::fmt;

/// A polynomial whose coefficients are elements of `F`
pub struct Poly<'f, F: Field + ?Sized> {
    field: &'f F,
    coefficients: Vec<u32>,
}

impl<'f, F: Field + ?Sized> Poly<'f, F> {
    /// Build a polynomial from coefficients ordered highest degree first
    ///
    /// Leading zeros are stripped. Fails on an empty slice or on a value
    /// that is not an element of `field`.
    pub fn new(field: &'f F, coefficients: Vec<u32>) -> RsResult<Self> {
        if coefficients.is_empty() {
            return Err(RsError::invalid("polynomial needs at least one coefficient"));
        }
        if let Some(&bad) = coefficients.iter().find(|&&c| !field.contains(c)) {
            return Err(RsError::invalid(format!(
                "coefficient {bad} is not an element of a field of size {}",
                field.size()
            )));
        }
        Ok(Self::normalized(field, coefficients))
    }

    /// Strip leading zeros down to the canonical form
    fn normalized(field: &'f F, mut coefficients: Vec<u32>) -> Self {
        match coefficients.iter().position(|&c| c != 0) {
            Some(0) => {}
            Some(first) => {
                coefficients.drain(..first);
            }
            None => {
                coefficients.clear();
                coefficients.push(0);
            }
        }
        Self {
            field,
            coefficients,
        }
    }

    pub fn zero(field: &'f F) -> Self {
        Self {
            field,
            coefficients: vec![0],
        }
    }

    pub fn one(field: &'f F) -> Self {
        Self {
            field,
            coefficients: vec![1],
        }
    }

    /// `coefficient * x^degree`; fails when `coefficient` is not in `field`
    pub fn monomial(field: &'f F, degree: usize, coefficient: u32) -> RsResult<Self> {
        if !field.contains(coefficient) {
            return Err(RsError::invalid(format!(
                "coefficient {coefficient} is not an element of a field of size {}",
                field.size()
            )));
        }
        if coefficient == 0 {
            return Ok(Self::zero(field));
        }
        let mut coefficients = vec![0; degree + 1];
        coefficients[0] = coefficient;
        Ok(Self {
            field,
            coefficients,
        })
    }

    pub fn field(&self) -> &'f F {
        self.field
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u32] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients[0] == 0
    }

    /// Coefficient of `x^degree`, zero past the polynomial's degree
    pub fn coefficient(&self, degree: usize) -> u32 {
        match self.degree().checked_sub(degree) {
            Some(index) => self.coefficients[index],
            None => 0,
        }
    }

    pub fn leading_coefficient(&self) -> u32 {
        self.coefficients[0]
    }

    /// Value of the polynomial at `a` (Horner's rule)
    pub fn evaluate_at(&self, a: u32) -> u32 {
        if a == 0 {
            return self.coefficient(0);
        }
        let field = self.field;
        self.coefficients
            .iter()
            .fold(0, |acc, &c| field.add(field.multiply(acc, a), c))
    }

    fn check_same_field(&self, other: &Self) -> RsResult<()> {
        if std::ptr::addr_eq(self.field, other.field) {
            Ok(())
        } else {
            Err(RsError::invalid("polynomials belong to different fields"))
        }
    }

    /// Apply `op` to aligned coefficients, zero-padding the shorter operand
    fn combine(&self, other: &Self, op: impl Fn(u32, u32) -> u32) -> Self {
        let (a, b) = (self.coefficients.as_slice(), other.coefficients.as_slice());
        let len = a.len().max(b.len());
        let at = |c: &[u32], i: usize| (i + c.len()).checked_sub(len).map_or(0, |j| c[j]);

        let combined = (0..len).map(|i| op(at(a, i), at(b, i))).collect();
        Self::normalized(self.field, combined)
    }

    pub fn add(&self, other: &Self) -> RsResult<Self> {
        self.check_same_field(other)?;
        if self.is_zero() {
            return Ok(other.clone());
        }
        if other.is_zero() {
            return Ok(self.clone());
        }
        Ok(self.combine(other, |a, b| self.field.add(a, b)))
    }

    pub fn subtract(&self, other: &Self) -> RsResult<Self> {
        self.check_same_field(other)?;
        if other.is_zero() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(other.negative());
        }
        Ok(self.combine(other, |a, b| self.field.subtract(a, b)))
    }

    pub fn negative(&self) -> Self {
        let field = self.field;
        let negated = self.coefficients.iter().map(|&c| field.negate(c)).collect();
        Self::normalized(field, negated)
    }

    pub fn multiply(&self, other: &Self) -> RsResult<Self> {
        self.check_same_field(other)?;
        let field = self.field;
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero(field));
        }

        let (a, b) = (&self.coefficients, &other.coefficients);
        let mut product = vec![0; a.len() + b.len() - 1];
        for (i, &a_coeff) in a.iter().enumerate() {
            for (j, &b_coeff) in b.iter().enumerate() {
                product[i + j] = field.add(product[i + j], field.multiply(a_coeff, b_coeff));
            }
        }
        Ok(Self::normalized(field, product))
    }

    pub fn multiply_scalar(&self, scalar: u32) -> Self {
        let field = self.field;
        match scalar {
            0 => Self::zero(field),
            1 => self.clone(),
            _ => {
                let scaled = self
                    .coefficients
                    .iter()
                    .map(|&c| field.multiply(c, scalar))
                    .collect();
                Self::normalized(field, scaled)
            }
        }
    }

    /// `self * coefficient * x^degree`
    pub fn multiply_by_monomial(&self, degree: usize, coefficient: u32) -> Self {
        let field = self.field;
        if coefficient == 0 || self.is_zero() {
            return Self::zero(field);
        }
        let mut product = Vec::with_capacity(self.coefficients.len() + degree);
        product.extend(self.coefficients.iter().map(|&c| field.multiply(c, coefficient)));
        product.resize(self.coefficients.len() + degree, 0);
        Self::normalized(field, product)
    }

    /// Long division, returning `(quotient, remainder)`
    pub fn divide(&self, other: &Self) -> RsResult<(Self, Self)> {
        self.check_same_field(other)?;
        if other.is_zero() {
            return Err(RsError::DivisionByZero);
        }

        let field = self.field;
        let mut quotient = Self::zero(field);
        let mut remainder = self.clone();

        let inverse_leading = field.inverse(other.leading_coefficient())?;

        while remainder.degree() >= other.degree() && !remainder.is_zero() {
            let degree_difference = remainder.degree() - other.degree();
            let scale = field.multiply(remainder.leading_coefficient(), inverse_leading);
            let term = other.multiply_by_monomial(degree_difference, scale);
            let iteration_quotient = Self::monomial(field, degree_difference, scale)?;
            quotient = quotient.add(&iteration_quotient)?;
            remainder = remainder.subtract(&term)?;
        }

        Ok((quotient, remainder))
    }

    /// Formal derivative: `c·x^i` becomes `(i·c)·x^(i-1)`
    pub fn formal_derivative(&self) -> Self {
        let field = self.field;
        let degree = self.degree();
        if degree == 0 {
            return Self::zero(field);
        }
        let derived = (1..=degree)
            .rev()
            .map(|i| field.integer_multiple(self.coefficient(i), i))
            .collect();
        Self::normalized(field, derived)
    }

    /// The terms of degree below `n`, i.e. `self mod x^n`
    pub fn low_terms(&self, n: usize) -> Self {
        if n == 0 {
            return Self::zero(self.field);
        }
        let len = self.coefficients.len();
        if len <= n {
            return self.clone();
        }
        Self::normalized(self.field, self.coefficients[len - n..].to_vec())
    }
}

impl<F: Field + ?Sized> Clone for Poly<'_, F> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            coefficients: self.coefficients.clone(),
        }
    }
}

impl<F: Field + ?Sized> PartialEq for Poly<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.field, other.field) && self.coefficients == other.coefficients
    }
}

impl<F: Field + ?Sized> Eq for Poly<'_, F> {}

impl<F: Field + ?Sized> fmt::Debug for Poly<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poly")
            .field("field", &self.field)
            .field("coefficients", &self.coefficients)
            .finish()
    }
}

impl<F: Field + ?Sized> fmt::Display for Poly<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for degree in (0..=self.degree()).rev() {
            let coefficient = self.coefficient(degree);
            if coefficient == 0 {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            if coefficient != 1 || degree == 0 {
                write!(f, "{coefficient}")?;
            }
            match degree {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{degree}")?,
            }
        }
        Ok(())
    }
}
