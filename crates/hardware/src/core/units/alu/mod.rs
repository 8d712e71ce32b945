//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the execution unit.
//! It handles arithmetic, logical operations, comparisons and shifts, plus
//! the multiply/divide unit that writes the HI/LO accumulators.
//!
//! Operations are organized into submodules by category, each with its own
//! operation selector:
//! - [`arithmetic`]: [`ArithOp`] (Add, Sub), plus Mult, Multu, Div, Divu
//! - [`logic`]:      [`LogicOp`] (And, Or, Xor, Nor, Slt, Sltu)
//! - [`shifts`]:     [`ShiftOp`] (Sll, Srl, Sra)

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

pub use arithmetic::ArithOp;
pub use logic::LogicOp;
pub use shifts::ShiftOp;

/// Two-operand ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
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
    /// Logical shift left.
    Sll,
    /// Logical shift right.
    Srl,
    /// Arithmetic shift right.
    Sra,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Stateless: every operation is a pure function of its operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand (the value shifted, for shifts).
    /// * `b`  - Second operand (the shift amount, for shifts; only the low 5 bits are used).
    ///
    /// # Returns
    ///
    /// The 32-bit result. Additions and subtractions wrap; comparisons yield 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu, -5_i32 as u32, 10), 0);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => arithmetic::execute(ArithOp::Add, a, b),
            AluOp::Sub => arithmetic::execute(ArithOp::Sub, a, b),
            AluOp::And => logic::execute(LogicOp::And, a, b),
            AluOp::Or => logic::execute(LogicOp::Or, a, b),
            AluOp::Xor => logic::execute(LogicOp::Xor, a, b),
            AluOp::Nor => logic::execute(LogicOp::Nor, a, b),
            AluOp::Slt => logic::execute(LogicOp::Slt, a, b),
            AluOp::Sltu => logic::execute(LogicOp::Sltu, a, b),
            AluOp::Sll => shifts::execute(ShiftOp::Sll, a, b),
            AluOp::Srl => shifts::execute(ShiftOp::Srl, a, b),
            AluOp::Sra => shifts::execute(ShiftOp::Sra, a, b),
        }
    }
}

impl From<ArithOp> for AluOp {
    fn from(op: ArithOp) -> Self {
        match op {
            ArithOp::Add => Self::Add,
            ArithOp::Sub => Self::Sub,
        }
    }
}
