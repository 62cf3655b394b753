//! GF(929) Arithmetic Tests
//!
//! PDF417 corrects errors modulo the prime 929; unlike the GF(2^m) fields,
//! addition and subtraction differ and negation is not the identity.

use barcode_ecc::reed_solomon::modulus::{self, ModulusGf, PDF417_GENERATOR, PDF417_MODULUS};
use barcode_ecc::reed_solomon::{Field, RsError};

#[test]
fn test_pdf417_parameters() {
    let field = modulus::pdf417();
    assert_eq!(field.modulus(), PDF417_MODULUS);
    assert_eq!(field.generator(), PDF417_GENERATOR);
    assert_eq!(field.size(), 929);
    assert_eq!(field.generator_base(), 1);
    assert_eq!(field.to_string(), "GF(929)");
}

#[test]
fn test_powers_of_three() {
    let field = modulus::pdf417();
    assert_eq!(field.exp(0), 1);
    assert_eq!(field.exp(1), 3);
    assert_eq!(field.exp(2), 9);
    assert_eq!(field.exp(928), 1);
    assert_eq!(field.log(3).unwrap(), 1);
}

#[test]
fn test_add_is_not_subtract() {
    let field = modulus::pdf417();
    assert_eq!(field.add(500, 500), 71);
    assert_eq!(field.subtract(500, 501), 928);
    assert_ne!(field.add(7, 3), field.subtract(7, 3));
}

#[test]
fn test_multiply_and_inverse() {
    let field = modulus::pdf417();
    assert_eq!(field.multiply(3, 310), 1);
    assert_eq!(field.inverse(3).unwrap(), 310);
    assert_eq!(field.multiply(928, 928), 1);
    for a in 1..929 {
        let inv = field.inverse(a).unwrap();
        assert_eq!(field.multiply(a, inv), 1, "{a} * {inv}");
    }
    assert_eq!(field.inverse(0), Err(RsError::DivisionByZero));
}

#[test]
fn test_integer_multiple_is_plain_product() {
    let field = modulus::pdf417();
    assert_eq!(field.integer_multiple(5, 3), 15);
    assert_eq!(field.integer_multiple(500, 2), 71);
    assert_eq!(field.integer_multiple(17, 929), 0);
}

#[test]
fn test_new_validates_generator() {
    assert_eq!(ModulusGf::new(929, 3, 1).unwrap(), *modulus::pdf417());
    // 2 only has order 464 modulo 929
    assert!(matches!(
        ModulusGf::new(929, 2, 1),
        Err(RsError::InvalidArgument(_))
    ));
    assert!(ModulusGf::new(929, 929, 1).is_err());
    assert!(ModulusGf::new(2, 1, 0).is_err());
    assert!(ModulusGf::new(15, 2, 1).is_err());
}

#[test]
fn test_small_prime_field() {
    let field = ModulusGf::new(7, 3, 0).unwrap();
    let powers: Vec<u32> = (0..6).map(|i| field.exp(i)).collect();
    assert_eq!(powers, vec![1, 3, 2, 6, 4, 5]);
    assert_eq!(field.negate(2), 5);
}
