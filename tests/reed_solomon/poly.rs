//! Polynomial Arithmetic Tests
//!
//! Polynomials hold coefficients highest degree first and are always kept in
//! canonical form (no leading zeros except for the zero polynomial).

use barcode_ecc::reed_solomon::{galois, modulus, Poly, RsError};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_leading_zeros_are_stripped() {
    let field = galois::qr_code_field_256();
    let p = Poly::new(field, vec![0, 0, 3, 0, 1]).unwrap();
    assert_eq!(p.coefficients(), &[3, 0, 1]);
    assert_eq!(p.degree(), 2);
    assert_eq!(p.leading_coefficient(), 3);
    assert_eq!(p.coefficient(0), 1);
    assert_eq!(p.coefficient(1), 0);
    assert_eq!(p.coefficient(9), 0);
}

#[test]
fn test_all_zero_is_zero_polynomial() {
    let field = galois::qr_code_field_256();
    let p = Poly::new(field, vec![0, 0, 0]).unwrap();
    assert!(p.is_zero());
    assert_eq!(p.degree(), 0);
    assert_eq!(p, Poly::zero(field));
}

#[test]
fn test_invalid_coefficients_rejected() {
    let field = galois::aztec_param();
    assert!(matches!(
        Poly::new(field, vec![]),
        Err(RsError::InvalidArgument(_))
    ));
    assert!(matches!(
        Poly::new(field, vec![1, 16]),
        Err(RsError::InvalidArgument(_))
    ));
}

#[test]
fn test_monomial() {
    let field = galois::qr_code_field_256();
    let m = Poly::monomial(field, 3, 7).unwrap();
    assert_eq!(m.coefficients(), &[7, 0, 0, 0]);
    assert!(Poly::monomial(field, 5, 0).unwrap().is_zero());
}

#[test]
fn test_monomial_rejects_coefficient_outside_field() {
    assert!(matches!(
        Poly::monomial(galois::aztec_param(), 2, 16),
        Err(RsError::InvalidArgument(_))
    ));
    assert!(matches!(
        Poly::monomial(modulus::pdf417(), 0, 929),
        Err(RsError::InvalidArgument(_))
    ));
    assert_eq!(
        Poly::monomial(modulus::pdf417(), 1, 928).unwrap().coefficients(),
        &[928, 0]
    );
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_evaluate_at() {
    let field = galois::qr_code_field_256();
    // x^2 + 3x + 2 = (x + 1)(x + 2)
    let p = Poly::new(field, vec![1, 3, 2]).unwrap();
    assert_eq!(p.evaluate_at(0), 2);
    assert_eq!(p.evaluate_at(1), 0);
    assert_eq!(p.evaluate_at(2), 0);
    assert_eq!(p.evaluate_at(3), 2);
}

#[test]
fn test_evaluate_at_in_prime_field() {
    let field = modulus::pdf417();
    // x^2 + 917x + 27 = (x - 3)(x - 9)
    let p = Poly::new(field, vec![1, 917, 27]).unwrap();
    assert_eq!(p.evaluate_at(3), 0);
    assert_eq!(p.evaluate_at(9), 0);
    assert_eq!(p.evaluate_at(0), 27);
    assert_eq!(p.evaluate_at(1), 16);
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_add_cancels_in_characteristic_two() {
    let field = galois::qr_code_field_256();
    let p = Poly::new(field, vec![5, 6, 7]).unwrap();
    assert!(p.add(&p).unwrap().is_zero());
    assert!(p.subtract(&p).unwrap().is_zero());
}

#[test]
fn test_add_different_degrees() {
    let field = modulus::pdf417();
    let a = Poly::new(field, vec![1, 0, 928]).unwrap();
    let b = Poly::new(field, vec![5, 2]).unwrap();
    assert_eq!(a.add(&b).unwrap().coefficients(), &[1, 5, 1]);
    assert_eq!(b.subtract(&a).unwrap().coefficients(), &[928, 5, 3]);
    assert_eq!(a.negative().coefficients(), &[928, 0, 1]);
}

#[test]
fn test_multiply() {
    let field = galois::qr_code_field_256();
    let a = Poly::new(field, vec![1, 1]).unwrap();
    let b = Poly::new(field, vec![1, 2]).unwrap();
    let product = a.multiply(&b).unwrap();
    assert_eq!(product.coefficients(), &[1, 3, 2]);
    assert!(product.multiply(&Poly::zero(field)).unwrap().is_zero());
    assert_eq!(product.multiply_scalar(1), product);
    assert!(product.multiply_scalar(0).is_zero());
    assert_eq!(
        product.multiply_by_monomial(2, 2).coefficients(),
        &[2, 6, 4, 0, 0]
    );
}

#[test]
fn test_divide() {
    let field = galois::qr_code_field_256();
    // (x^2 + 3x + 2 + 5) / (x + 1) = (x + 2) rem 5
    let dividend = Poly::new(field, vec![1, 3, 7]).unwrap();
    let divisor = Poly::new(field, vec![1, 1]).unwrap();
    let (quotient, remainder) = dividend.divide(&divisor).unwrap();
    assert_eq!(quotient.coefficients(), &[1, 2]);
    assert_eq!(remainder.coefficients(), &[5]);

    let rebuilt = quotient.multiply(&divisor).unwrap().add(&remainder).unwrap();
    assert_eq!(rebuilt, dividend);
}

#[test]
fn test_divide_by_larger_degree() {
    let field = modulus::pdf417();
    let small = Poly::new(field, vec![4, 2]).unwrap();
    let big = Poly::new(field, vec![1, 0, 0]).unwrap();
    let (quotient, remainder) = small.divide(&big).unwrap();
    assert!(quotient.is_zero());
    assert_eq!(remainder, small);
}

#[test]
fn test_divide_by_zero() {
    let field = galois::qr_code_field_256();
    let p = Poly::new(field, vec![1, 2]).unwrap();
    assert_eq!(
        p.divide(&Poly::zero(field)).unwrap_err(),
        RsError::DivisionByZero
    );
}

#[test]
fn test_mixing_fields_is_rejected() {
    let qr = galois::qr_code_field_256();
    let dm = galois::data_matrix_field_256();
    let a = Poly::new(qr, vec![1, 2]).unwrap();
    let b = Poly::new(dm, vec![1, 2]).unwrap();
    assert!(matches!(a.add(&b), Err(RsError::InvalidArgument(_))));
    assert!(matches!(a.multiply(&b), Err(RsError::InvalidArgument(_))));
    assert!(matches!(a.divide(&b), Err(RsError::InvalidArgument(_))));
}

#[test]
fn test_formal_derivative() {
    let gf = galois::qr_code_field_256();
    // d/dx (x^3 + 5x^2 + 7x + 9) = 3x^2 + 10x + 7 = x^2 + 7 in characteristic 2
    let p = Poly::new(gf, vec![1, 5, 7, 9]).unwrap();
    assert_eq!(p.formal_derivative().coefficients(), &[1, 0, 7]);

    let pf = modulus::pdf417();
    let q = Poly::new(pf, vec![1, 5, 7, 9]).unwrap();
    assert_eq!(q.formal_derivative().coefficients(), &[3, 10, 7]);
    assert!(Poly::new(pf, vec![9]).unwrap().formal_derivative().is_zero());
}

#[test]
fn test_low_terms() {
    let field = galois::qr_code_field_256();
    let p = Poly::new(field, vec![9, 8, 0, 6]).unwrap();
    assert_eq!(p.low_terms(2).coefficients(), &[6]);
    assert_eq!(p.low_terms(3).coefficients(), &[8, 0, 6]);
    assert_eq!(p.low_terms(10), p);
    assert!(p.low_terms(0).is_zero());
}

#[test]
fn test_display() {
    let field = galois::qr_code_field_256();
    let p = Poly::new(field, vec![1, 3, 2]).unwrap();
    assert_eq!(p.to_string(), "x^2 + 3x + 2");
    assert_eq!(Poly::zero(field).to_string(), "0");
    assert_eq!(Poly::new(field, vec![4, 0, 1]).unwrap().to_string(), "4x^2 + 1");
}
