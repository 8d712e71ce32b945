//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, NOR, and set-less-than (signed and
//! unsigned). Comparison results are always 0 or 1.

/// Logical and comparison operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicOp {
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Signed set-less-than.
    Slt,
    /// Unsigned set-less-than.
    Sltu,
}

/// Executes a logical or comparison operation.
pub fn execute(op: LogicOp, a: u32, b: u32) -> u32 {
    match op {
        LogicOp::And => a & b,
        LogicOp::Or => a | b,
        LogicOp::Xor => a ^ b,
        LogicOp::Nor => !(a | b),
        LogicOp::Slt => u32::from((a as i32) < (b as i32)),
        LogicOp::Sltu => u32::from(a < b),
    }
}
