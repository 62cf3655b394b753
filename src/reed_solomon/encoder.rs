//! Systematic Reed-Solomon encoding
//!
//! Parity codewords are the negated remainder of `data(x)·x^ec` divided by
//! the generator `g(x) = Π (x - α^(i + base))`, so that `data ++ parity` is a
//! multiple of `g`. In GF(2^m) the negation is a no-op.

use super::error::{RsError, RsResult};
use super::field::Field;
use super::poly::Poly;
use log::trace;
use rustc_hash::FxHashMap as HashMap;
use std::sync::{Mutex, PoisonError};

/// Reed-Solomon encoder bound to one field
///
/// Generator polynomials are cached per parity length; the cache is the only
/// mutable state and sits behind a mutex, so one encoder can serve many
/// threads.
pub struct ReedSolomonEncoder<'f, F: Field + ?Sized> {
    field: &'f F,
    cached_generators: Mutex<HashMap<usize, Poly<'f, F>>>,
}

impl<'f, F: Field + ?Sized> ReedSolomonEncoder<'f, F> {
    pub fn new(field: &'f F) -> Self {
        Self {
            field,
            cached_generators: Mutex::new(HashMap::default()),
        }
    }

    pub fn field(&self) -> &'f F {
        self.field
    }

    /// Generator polynomial with `degree` consecutive roots starting at α^base
    pub fn generator(&self, degree: usize) -> RsResult<Poly<'f, F>> {
        if degree == 0 {
            return Err(RsError::invalid("generator degree must be positive"));
        }
        let max_degree = (self.field.size() - 1) as usize;
        if degree > max_degree {
            return Err(RsError::invalid(format!(
                "generator degree {degree} exceeds the {max_degree} distinct roots of the field"
            )));
        }

        // Only complete generators are ever inserted, so a poisoned lock is still usable
        let mut cache = self
            .cached_generators
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(generator) = cache.get(&degree) {
            return Ok(generator.clone());
        }

        // Extend the largest cached generator below the requested degree
        let field = self.field;
        let (start, mut generator) = cache
            .iter()
            .filter(|&(&d, _)| d < degree)
            .max_by_key(|&(&d, _)| d)
            .map(|(&d, g)| (d, g.clone()))
            .unwrap_or_else(|| (0, Poly::one(field)));

        for d in start..degree {
            let root = field.exp(d as u32 + field.generator_base());
            let factor = Poly::new(field, vec![1, field.negate(root)])?;
            generator = generator.multiply(&factor)?;
        }

        cache.insert(degree, generator.clone());
        Ok(generator)
    }

    /// Compute `ec_count` parity codewords for `data`
    pub fn encode(&self, data: &[u32], ec_count: usize) -> RsResult<Vec<u32>> {
        if ec_count == 0 {
            return Err(RsError::invalid("no error correction codewords requested"));
        }
        if data.is_empty() {
            return Err(RsError::invalid("no data codewords provided"));
        }
        let max_len = (self.field.size() - 1) as usize;
        if data.len() + ec_count > max_len {
            return Err(RsError::invalid(format!(
                "{} data + {} parity codewords exceed the {} codeword limit of the field",
                data.len(),
                ec_count,
                max_len
            )));
        }

        let field = self.field;
        let generator = self.generator(ec_count)?;
        let info = Poly::new(field, data.to_vec())?.multiply_by_monomial(ec_count, 1);
        let (_, remainder) = info.divide(&generator)?;

        let coefficients = remainder.coefficients();
        let mut parity = vec![0; ec_count];
        let offset = ec_count - coefficients.len();
        for (slot, &c) in parity[offset..].iter_mut().zip(coefficients) {
            *slot = field.negate(c);
        }

        trace!(
            "encoded {} data codewords into {} parity codewords",
            data.len(),
            ec_count
        );
        Ok(parity)
    }

    /// Fill the last `ec_count` slots of `codewords` with parity for the rest
    pub fn encode_in_place(&self, codewords: &mut [u32], ec_count: usize) -> RsResult<()> {
        let data_len = codewords.len().checked_sub(ec_count).ok_or_else(|| {
            RsError::invalid(format!(
                "buffer of {} codewords cannot hold {} parity codewords",
                codewords.len(),
                ec_count
            ))
        })?;

        let parity = self.encode(&codewords[..data_len], ec_count)?;
        codewords[data_len..].copy_from_slice(&parity);
        Ok(())
    }
}
