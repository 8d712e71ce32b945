//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). The shift amount is the low 5 bits of the
//! second operand, for both the constant and the variable forms.

use crate::common::constants::SHAMT_MASK;

/// Shift operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    /// Logical shift left.
    Sll,
    /// Logical shift right.
    Srl,
    /// Arithmetic shift right.
    Sra,
}

/// Shifts `a` by the low 5 bits of `b`.
pub fn execute(op: ShiftOp, a: u32, b: u32) -> u32 {
    let sh = b & SHAMT_MASK;
    match op {
        ShiftOp::Sll => a << sh,
        ShiftOp::Srl => a >> sh,
        ShiftOp::Sra => ((a as i32) >> sh) as u32,
    }
}
