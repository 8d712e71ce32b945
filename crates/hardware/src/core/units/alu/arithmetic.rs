//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction (wrapping and overflow-checked)
//! and the multiply/divide family that produces a HI/LO pair.

use crate::common::error::{ArithmeticFault, Trap};

/// Number of bits in a word (used to split 64-bit products).
const WORD_BITS: u32 = 32;

/// Add/subtract selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
}

/// Executes a wrapping add or subtract.
pub fn execute(op: ArithOp, a: u32, b: u32) -> u32 {
    match op {
        ArithOp::Add => a.wrapping_add(b),
        ArithOp::Sub => a.wrapping_sub(b),
    }
}

/// Signed add or subtract that reports two's-complement overflow.
///
/// # Errors
///
/// `Trap::ArithmeticEdgeCase(Overflow)` when the signed result does not fit
/// in 32 bits.
pub fn execute_checked(op: ArithOp, a: u32, b: u32) -> Result<u32, Trap> {
    let (a, b) = (a as i32, b as i32);
    let result = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
    };
    result
        .map(|v| v as u32)
        .ok_or(Trap::ArithmeticEdgeCase(ArithmeticFault::Overflow))
}

/// Full 64-bit product of two words.
///
/// # Returns
///
/// `(hi, lo)`: the upper and lower halves of the product.
pub fn multiply(a: u32, b: u32, signed: bool) -> (u32, u32) {
    let product = if signed {
        (i64::from(a as i32) * i64::from(b as i32)) as u64
    } else {
        u64::from(a) * u64::from(b)
    };
    ((product >> WORD_BITS) as u32, product as u32)
}

/// Quotient and remainder of `a / b`.
///
/// Signed division truncates toward zero, so the remainder carries the sign
/// of the dividend. `i32::MIN / -1` wraps to `(0, i32::MIN)`.
///
/// # Returns
///
/// `(hi, lo)`: remainder and quotient.
///
/// # Errors
///
/// `Trap::ArithmeticEdgeCase(DivideByZero)` when `b` is zero.
pub fn divide(a: u32, b: u32, signed: bool) -> Result<(u32, u32), Trap> {
    if b == 0 {
        return Err(Trap::ArithmeticEdgeCase(ArithmeticFault::DivideByZero));
    }
    if signed {
        let (a, b) = (a as i32, b as i32);
        Ok((a.wrapping_rem(b) as u32, a.wrapping_div(b) as u32))
    } else {
        Ok((a % b, a / b))
    }
}
