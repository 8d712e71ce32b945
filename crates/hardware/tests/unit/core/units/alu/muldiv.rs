//! Multiply and divide tests.
//!
//! Products are checked against a 64-bit host reference; division follows
//! truncation toward zero with the remainder taking the dividend's sign.

use mipsim_core::common::{ArithmeticFault, Trap};
use mipsim_core::core::units::alu::arithmetic::{divide, multiply};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const DIV0: Trap = Trap::ArithmeticEdgeCase(ArithmeticFault::DivideByZero);

#[test]
fn mult_negative_times_positive() {
    // -2 * 3 = -6 = 0xFFFF_FFFF_FFFF_FFFA
    assert_eq!(multiply(-2i32 as u32, 3, true), (0xFFFF_FFFF, 0xFFFF_FFFA));
}

#[test]
fn multu_treats_operands_unsigned() {
    // 0xFFFF_FFFF * 2 = 0x1_FFFF_FFFE
    assert_eq!(multiply(0xFFFF_FFFF, 2, false), (0x0000_0001, 0xFFFF_FFFE));
    assert_eq!(multiply(0xFFFF_FFFF, 0xFFFF_FFFF, false), (0xFFFF_FFFE, 0x0000_0001));
}

#[test]
fn mult_min_times_min() {
    // 2^62
    assert_eq!(multiply(0x8000_0000, 0x8000_0000, true), (0x4000_0000, 0));
}

#[test]
fn div_truncates_toward_zero() {
    // (hi, lo) = (remainder, quotient)
    assert_eq!(divide(7, 2, true), Ok((1, 3)));
    assert_eq!(divide(-7i32 as u32, 2, true), Ok((-1i32 as u32, -3i32 as u32)));
    assert_eq!(divide(7, -2i32 as u32, true), Ok((1, -3i32 as u32)));
    assert_eq!(divide(-7i32 as u32, -2i32 as u32, true), Ok((-1i32 as u32, 3)));
}

#[test]
fn divu_treats_operands_unsigned() {
    assert_eq!(divide(0xFFFF_FFFF, 2, false), Ok((1, 0x7FFF_FFFF)));
}

#[test]
fn div_min_by_minus_one_does_not_panic() {
    assert_eq!(divide(0x8000_0000, 0xFFFF_FFFF, true), Ok((0, 0x8000_0000)));
}

#[test]
fn divide_by_zero_is_an_edge_case() {
    assert_eq!(divide(1, 0, true), Err(DIV0));
    assert_eq!(divide(1, 0, false), Err(DIV0));
    assert_eq!(divide(0, 0, true), Err(DIV0));
}

proptest! {
    #[test]
    fn mult_matches_i64_reference(a in any::<i32>(), b in any::<i32>()) {
        let product = i64::from(a) * i64::from(b);
        let (hi, lo) = multiply(a as u32, b as u32, true);
        prop_assert_eq!((u64::from(hi) << 32) | u64::from(lo), product as u64);
    }

    #[test]
    fn multu_matches_u64_reference(a in any::<u32>(), b in any::<u32>()) {
        let product = u64::from(a) * u64::from(b);
        let (hi, lo) = multiply(a, b, false);
        prop_assert_eq!((u64::from(hi) << 32) | u64::from(lo), product);
    }

    #[test]
    fn div_reconstructs_dividend(a in any::<i32>(), b in any::<i32>().prop_filter("nonzero", |b| *b != 0)) {
        let (hi, lo) = divide(a as u32, b as u32, true).unwrap();
        let (q, r) = (lo as i32, hi as i32);
        prop_assert_eq!(q.wrapping_mul(b).wrapping_add(r), a);
        prop_assert!(r == 0 || (r < 0) == (a < 0));
    }
}
