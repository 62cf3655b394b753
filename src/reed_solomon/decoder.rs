//! Reed-Solomon decoding: syndromes, extended Euclid, root search, Forney
//!
//! ## Pipeline
//!
//! ```text
//! syndromes ── all zero ──────────────────────────────→ clean, Ok(0)
//!     │
//!     └─ erasure locator Γ, T = Γ·S mod x^ec
//!          ↓
//!        Euclid(x^ec, T) → σ, Ω        (Ψ = σ·Γ is the errata locator)
//!          ↓
//!        root search over every non-zero element → error locations
//!          ↓
//!        Forney: e = -X^(1-b) Ω(X⁻¹) / Ψ'(X⁻¹)
//!          ↓
//!        subtract magnitudes, re-check syndromes → Ok(corrected)
//! ```
//!
//! Any inconsistency along the way is reported as
//! [`RsError::TooManyErrors`] and the buffer is left exactly as received.

use super::error::{RsError, RsResult};
use super::field::Field;
use super::poly::Poly;
use crate::config::CodecConfig;
use log::{debug, trace};
use smallvec::SmallVec;

/// Error locations or magnitudes; blocks rarely carry more than 16 errata
type Errata = SmallVec<[u32; 16]>;

/// Reed-Solomon decoder bound to one field
#[derive(Debug)]
pub struct ReedSolomonDecoder<'f, F: Field + ?Sized> {
    field: &'f F,
    verify_corrections: bool,
}

impl<F: Field + ?Sized> Clone for ReedSolomonDecoder<'_, F> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            verify_corrections: self.verify_corrections,
        }
    }
}

impl<'f, F: Field + ?Sized> ReedSolomonDecoder<'f, F> {
    pub fn new(field: &'f F) -> Self {
        Self {
            field,
            verify_corrections: true,
        }
    }

    pub fn with_config(field: &'f F, config: &CodecConfig) -> Self {
        Self::new(field).with_verification(config.verify_corrections)
    }

    /// Toggle the post-correction syndrome check
    ///
    /// With the check off, a block damaged beyond capacity can come back as
    /// `Ok` holding a buffer that is not a codeword. The root-count check
    /// still runs either way.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify_corrections = verify;
        self
    }

    pub fn field(&self) -> &'f F {
        self.field
    }

    /// Whether `received` is a valid codeword, without attempting correction
    pub fn is_valid(&self, received: &[u32], ec_count: usize) -> RsResult<bool> {
        self.validate(received, ec_count)?;
        Ok(self.syndromes(received, ec_count)?.is_none())
    }

    /// Correct `received` in place, returning the number of codewords changed
    pub fn decode(&self, received: &mut [u32], ec_count: usize) -> RsResult<usize> {
        self.decode_with_erasures(received, ec_count, &[])
    }

    /// Correct `received` in place given positions known to be unreliable
    ///
    /// Each erasure costs one parity codeword and each unknown error two, so
    /// `2·errors + erasures <= ec_count` blocks are always repaired.
    pub fn decode_with_erasures(
        &self,
        received: &mut [u32],
        ec_count: usize,
        erasures: &[usize],
    ) -> RsResult<usize> {
        self.validate(received, ec_count)?;
        let erasures = erasure_positions(received.len(), erasures)?;

        let syndrome = match self.syndromes(received, ec_count)? {
            Some(syndrome) => syndrome,
            None => {
                trace!("syndromes are zero, block of {} is clean", received.len());
                return Ok(0);
            }
        };
        debug!(
            "block of {} codewords has non-zero syndromes ({} parity, {} erasures)",
            received.len(),
            ec_count,
            erasures.len()
        );

        if erasures.len() > ec_count {
            return Err(RsError::TooManyErrors(
                "more erasures than parity codewords",
            ));
        }

        let field = self.field;
        let n = received.len();
        let erasure_locator = self.erasure_locator(n, &erasures)?;
        let modified_syndrome = erasure_locator.multiply(&syndrome)?.low_terms(ec_count);

        let (sigma, omega) = self.run_euclidean_algorithm(
            Poly::monomial(field, ec_count, 1)?,
            modified_syndrome,
            ec_count + erasures.len(),
        )?;
        let locator = sigma.multiply(&erasure_locator)?;
        if locator.degree() == 0 {
            return Err(RsError::TooManyErrors(
                "error locator has no roots although syndromes are non-zero",
            ));
        }

        let locations = self.find_error_locations(&locator)?;
        let magnitudes = self.find_error_magnitudes(&omega, &locator, &locations)?;

        let mut positions = Vec::with_capacity(locations.len());
        for &location in &locations {
            let log = field.log(location)? as usize;
            if log >= n {
                return Err(RsError::TooManyErrors(
                    "error location lies outside the codeword block",
                ));
            }
            positions.push(n - 1 - log);
        }

        // Work on a copy so a failed check leaves the caller's block as received
        let mut repaired = received.to_vec();
        let mut corrected = 0;
        for (&position, &magnitude) in positions.iter().zip(&magnitudes) {
            trace!("position {position}: magnitude {magnitude}");
            if magnitude != 0 {
                repaired[position] = field.subtract(repaired[position], magnitude);
                corrected += 1;
            }
        }

        if self.verify_corrections && self.syndromes(&repaired, ec_count)?.is_some() {
            return Err(RsError::TooManyErrors(
                "corrected block still has non-zero syndromes",
            ));
        }
        received.copy_from_slice(&repaired);

        debug!("corrected {corrected} codewords at {positions:?}");
        Ok(corrected)
    }

    fn validate(&self, received: &[u32], ec_count: usize) -> RsResult<()> {
        if ec_count == 0 {
            return Err(RsError::invalid("no error correction codewords to check"));
        }
        if received.len() < ec_count {
            return Err(RsError::invalid(format!(
                "block of {} codewords is shorter than its {} parity codewords",
                received.len(),
                ec_count
            )));
        }
        let max_len = (self.field.size() - 1) as usize;
        if received.len() > max_len {
            return Err(RsError::invalid(format!(
                "block of {} codewords exceeds the {} codeword limit of the field",
                received.len(),
                max_len
            )));
        }
        Ok(())
    }

    /// Syndrome polynomial `Σ S_i x^i`, or `None` when every syndrome is zero
    fn syndromes(&self, received: &[u32], ec_count: usize) -> RsResult<Option<Poly<'f, F>>> {
        let field = self.field;
        let poly = Poly::new(field, received.to_vec())?;

        let mut coefficients = vec![0; ec_count];
        let mut clean = true;
        for i in 0..ec_count {
            let eval = poly.evaluate_at(field.exp(i as u32 + field.generator_base()));
            coefficients[ec_count - 1 - i] = eval;
            clean &= eval == 0;
        }

        if clean {
            Ok(None)
        } else {
            Poly::new(field, coefficients).map(Some)
        }
    }

    /// `Γ(x) = Π (1 - X_j x)` over the erased positions
    fn erasure_locator(&self, n: usize, erasures: &[usize]) -> RsResult<Poly<'f, F>> {
        let field = self.field;
        let mut locator = Poly::one(field);
        for &position in erasures {
            let x = field.exp((n - 1 - position) as u32);
            locator = locator.multiply(&Poly::new(field, vec![field.negate(x), 1])?)?;
        }
        Ok(locator)
    }

    /// Extended Euclid on `(a, b)` until `2·deg(r) < bound`
    ///
    /// Returns `(σ, Ω)` scaled so that `σ(0) = 1`.
    fn run_euclidean_algorithm(
        &self,
        a: Poly<'f, F>,
        b: Poly<'f, F>,
        bound: usize,
    ) -> RsResult<(Poly<'f, F>, Poly<'f, F>)> {
        let field = self.field;
        let (mut r_last, mut r) = if a.degree() < b.degree() { (b, a) } else { (a, b) };
        let mut t_last = Poly::zero(field);
        let mut t = Poly::one(field);

        while 2 * r.degree() >= bound {
            let r_last_last = r_last;
            let t_last_last = t_last;
            r_last = r;
            t_last = t;

            if r_last.is_zero() {
                return Err(RsError::TooManyErrors(
                    "remainder vanished before the error locator was found",
                ));
            }

            let mut remainder = r_last_last;
            let mut quotient = Poly::zero(field);
            let dlt_inverse = field.inverse(r_last.leading_coefficient())?;
            while remainder.degree() >= r_last.degree() && !remainder.is_zero() {
                let degree_diff = remainder.degree() - r_last.degree();
                let scale = field.multiply(remainder.leading_coefficient(), dlt_inverse);
                quotient = quotient.add(&Poly::monomial(field, degree_diff, scale)?)?;
                remainder = remainder.subtract(&r_last.multiply_by_monomial(degree_diff, scale))?;
            }

            t = t_last_last.subtract(&quotient.multiply(&t_last)?)?;

            if !remainder.is_zero() && remainder.degree() >= r_last.degree() {
                return Err(RsError::TooManyErrors(
                    "division failed to reduce the remainder degree",
                ));
            }
            r = remainder;
        }

        let sigma_tilde_at_zero = t.coefficient(0);
        if sigma_tilde_at_zero == 0 {
            return Err(RsError::TooManyErrors("sigma(0) was zero"));
        }

        let inverse = field.inverse(sigma_tilde_at_zero)?;
        Ok((t.multiply_scalar(inverse), r.multiply_scalar(inverse)))
    }

    /// Brute-force root search; returns `X = 1/root` for every root
    fn find_error_locations(&self, locator: &Poly<'f, F>) -> RsResult<Errata> {
        let field = self.field;
        let num_errors = locator.degree();
        let mut locations = Errata::new();

        for i in 1..field.size() {
            if locations.len() == num_errors {
                break;
            }
            if locator.evaluate_at(i) == 0 {
                locations.push(field.inverse(i)?);
            }
        }

        if locations.len() != num_errors {
            return Err(RsError::TooManyErrors(
                "error locator degree does not match number of roots",
            ));
        }
        Ok(locations)
    }

    /// Forney: `e = -X^(1-b) · Ω(X⁻¹) / Ψ'(X⁻¹)`
    fn find_error_magnitudes(
        &self,
        evaluator: &Poly<'f, F>,
        locator: &Poly<'f, F>,
        locations: &[u32],
    ) -> RsResult<Errata> {
        let field = self.field;
        let derivative = locator.formal_derivative();
        let power = 1 - i64::from(field.generator_base());

        locations
            .iter()
            .map(|&x| {
                let x_inverse = field.inverse(x)?;
                let denominator = derivative.evaluate_at(x_inverse);
                if denominator == 0 {
                    return Err(RsError::TooManyErrors(
                        "error locator derivative vanishes at a root",
                    ));
                }
                let ratio = field.multiply(
                    evaluator.evaluate_at(x_inverse),
                    field.inverse(denominator)?,
                );
                Ok(field.negate(field.multiply(ratio, field.pow(x, power))))
            })
            .collect()
    }
}

/// Sorted, de-duplicated erasure positions, all inside the block
fn erasure_positions(len: usize, erasures: &[usize]) -> RsResult<Vec<usize>> {
    let mut positions = erasures.to_vec();
    positions.sort_unstable();
    positions.dedup();
    if let Some(&last) = positions.last() {
        if last >= len {
            return Err(RsError::invalid(format!(
                "erasure position {last} is outside a block of {len} codewords"
            )));
        }
    }
    Ok(positions)
}
