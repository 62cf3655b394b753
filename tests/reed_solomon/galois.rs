//! GF(2^m) Field Arithmetic Tests
//!
//! Tests for the standard barcode fields: table contents, multiplication,
//! inverses, powers and parameter validation.

use barcode_ecc::reed_solomon::galois::{self, GenericGf};
use barcode_ecc::reed_solomon::{Field, RsError};

// ============================================================================
// Standard Fields
// ============================================================================

#[test]
fn test_standard_field_parameters() {
    let cases: [(&GenericGf, u32, u32, u32); 6] = [
        (galois::qr_code_field_256(), 0x11D, 256, 0),
        (galois::data_matrix_field_256(), 0x12D, 256, 1),
        (galois::aztec_data_12(), 0x1069, 4096, 1),
        (galois::aztec_data_10(), 0x409, 1024, 1),
        (galois::aztec_data_6(), 0x43, 64, 1),
        (galois::aztec_param(), 0x13, 16, 1),
    ];

    for (field, primitive, size, base) in cases {
        assert_eq!(field.primitive(), primitive);
        assert_eq!(field.size(), size);
        assert_eq!(field.generator_base(), base);
    }
}

#[test]
fn test_shared_instances() {
    // Aztec 8-bit words and Data Matrix use the same field
    assert!(std::ptr::eq(
        galois::aztec_data_8(),
        galois::data_matrix_field_256()
    ));
    assert!(std::ptr::eq(galois::maxicode_field_64(), galois::aztec_data_6()));
    assert!(std::ptr::eq(
        galois::qr_code_field_256(),
        galois::qr_code_field_256()
    ));
}

#[test]
fn test_alpha_wraps_through_primitive() {
    // α^m is the primitive polynomial with the top bit removed
    assert_eq!(galois::qr_code_field_256().exp(8), 0x1D);
    assert_eq!(galois::data_matrix_field_256().exp(8), 0x2D);
    assert_eq!(galois::aztec_data_12().exp(12), 0x069);
    assert_eq!(galois::aztec_data_10().exp(10), 0x009);
    assert_eq!(galois::aztec_data_6().exp(6), 0x03);
    assert_eq!(galois::aztec_param().exp(4), 0x3);
}

#[test]
fn test_gf16_exp_table() {
    let field = galois::aztec_param();
    let powers: Vec<u32> = (0..16).map(|i| field.exp(i)).collect();
    assert_eq!(
        powers,
        vec![1, 2, 4, 8, 3, 6, 12, 11, 5, 10, 7, 14, 15, 13, 9, 1]
    );
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_add_and_subtract_are_xor() {
    let field = galois::qr_code_field_256();
    assert_eq!(field.add(5, 3), 6);
    assert_eq!(field.subtract(5, 3), 6);
    assert_eq!(field.negate(77), 77);
}

#[test]
fn test_multiply_reduces_by_primitive() {
    assert_eq!(galois::qr_code_field_256().multiply(2, 128), 29);
    assert_eq!(galois::data_matrix_field_256().multiply(2, 128), 45);
    assert_eq!(galois::qr_code_field_256().multiply(0, 200), 0);
    assert_eq!(galois::qr_code_field_256().multiply(200, 1), 200);
}

#[test]
fn test_log_exp_inverse_of_each_other() {
    for field in [
        galois::qr_code_field_256(),
        galois::aztec_data_10(),
        galois::aztec_param(),
    ] {
        for a in 1..field.size() {
            let log = field.log(a).unwrap();
            assert_eq!(field.exp(log), a, "{field}: exp(log({a}))");
        }
    }
}

#[test]
fn test_every_nonzero_element_has_inverse() {
    for field in [galois::data_matrix_field_256(), galois::aztec_data_6()] {
        for a in 1..field.size() {
            let inv = field.inverse(a).unwrap();
            assert_eq!(field.multiply(a, inv), 1, "{field}: {a} * {inv}");
        }
    }
}

#[test]
fn test_zero_has_no_log_or_inverse() {
    let field = galois::qr_code_field_256();
    assert!(matches!(field.log(0), Err(RsError::InvalidArgument(_))));
    assert_eq!(field.inverse(0), Err(RsError::DivisionByZero));
}

#[test]
fn test_exp_reduces_exponent_mod_order() {
    let field = galois::qr_code_field_256();
    assert_eq!(field.exp(255), 1);
    assert_eq!(field.exp(256), 2);
    assert_eq!(field.exp(255 * 3 + 8), field.exp(8));
}

#[test]
fn test_pow_handles_negative_exponents() {
    let field = galois::qr_code_field_256();
    assert_eq!(field.pow(2, 0), 1);
    assert_eq!(field.pow(2, 8), 29);
    assert_eq!(field.pow(2, -1), field.inverse(2).unwrap());
    assert_eq!(field.pow(0, 5), 0);
    assert_eq!(field.pow(0, 0), 1);
}

#[test]
fn test_integer_multiple_in_characteristic_two() {
    let field = galois::aztec_data_10();
    assert_eq!(field.integer_multiple(700, 1), 700);
    assert_eq!(field.integer_multiple(700, 2), 0);
    assert_eq!(field.integer_multiple(700, 7), 700);
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_custom_field_matches_standard() {
    let field = GenericGf::new(0x11D, 256, 0).unwrap();
    assert_eq!(&field, galois::qr_code_field_256());
    assert_ne!(&field, galois::data_matrix_field_256());
}

#[test]
fn test_rejects_non_primitive_polynomial() {
    // x^8 + x^4 + x^3 + x + 1 is irreducible but x has order 51
    assert!(matches!(
        GenericGf::new(0x11B, 256, 0),
        Err(RsError::InvalidArgument(_))
    ));
}

#[test]
fn test_rejects_bad_parameters() {
    assert!(GenericGf::new(0x11D, 200, 0).is_err());
    assert!(GenericGf::new(0x43, 256, 0).is_err());
    assert!(GenericGf::new(0x11D, 256, 255).is_err());
    assert!(GenericGf::new(0x3, 2, 0).is_err());
}

#[test]
fn test_display() {
    assert_eq!(galois::qr_code_field_256().to_string(), "GF(0x011d,256)");
}
