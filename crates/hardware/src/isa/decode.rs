//! MIPS Instruction Decoder.
//!
//! This module classifies a 32-bit instruction word into one of the three MIPS
//! operand-record shapes. Classification looks only at the opcode field:
//! opcode 0 is R-type, opcodes 2 and 3 are J-type, everything else is I-type.
//! Decoding is total; whether a combination means anything is decided when the
//! record is lowered to an [`Op`](crate::isa::op::Op).

use crate::isa::instruction::{Decoded, IType, InstructionBits, JType, RType};
use crate::isa::mips32::opcodes;

/// Decodes a MIPS instruction word into its operand record.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction word.
///
/// # Returns
///
/// The R-, I-, or J-shaped record holding every field of that format.
pub fn decode(inst: u32) -> Decoded {
    match inst.opcode() {
        opcodes::OP_SPECIAL => Decoded::R(RType {
            opcode: opcodes::OP_SPECIAL,
            rs: inst.rs(),
            rt: inst.rt(),
            rd: inst.rd(),
            shamt: inst.shamt(),
            funct: inst.funct(),
        }),
        opcode @ (opcodes::OP_J | opcodes::OP_JAL) => Decoded::J(JType {
            opcode,
            target: inst.target26(),
        }),
        opcode => Decoded::I(IType {
            opcode,
            rs: inst.rs(),
            rt: inst.rt(),
            imm: inst.imm16(),
        }),
    }
}
