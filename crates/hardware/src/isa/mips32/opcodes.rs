//! MIPS32 Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) for the integer instruction set.

/// R-type instructions; operation selected by `funct`.
pub const OP_SPECIAL: u32 = 0x00;
/// Register-immediate branches; operation selected by `rt`.
pub const OP_REGIMM: u32 = 0x01;
/// Jump (J).
pub const OP_J: u32 = 0x02;
/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0x03;
/// Branch on Equal.
pub const OP_BEQ: u32 = 0x04;
/// Branch on Not Equal.
pub const OP_BNE: u32 = 0x05;
/// Branch on Less Than or Equal to Zero.
pub const OP_BLEZ: u32 = 0x06;
/// Branch on Greater Than Zero.
pub const OP_BGTZ: u32 = 0x07;
/// Add Immediate (overflow-checked on real hardware).
pub const OP_ADDI: u32 = 0x08;
/// Add Immediate Unsigned (no overflow check).
pub const OP_ADDIU: u32 = 0x09;
/// Set on Less Than Immediate.
pub const OP_SLTI: u32 = 0x0A;
/// Set on Less Than Immediate Unsigned.
pub const OP_SLTIU: u32 = 0x0B;
/// AND Immediate.
pub const OP_ANDI: u32 = 0x0C;
/// OR Immediate.
pub const OP_ORI: u32 = 0x0D;
/// XOR Immediate.
pub const OP_XORI: u32 = 0x0E;
/// Load Upper Immediate.
pub const OP_LUI: u32 = 0x0F;
/// Load Byte.
pub const OP_LB: u32 = 0x20;
/// Load Halfword.
pub const OP_LH: u32 = 0x21;
/// Load Word Left.
pub const OP_LWL: u32 = 0x22;
/// Load Word.
pub const OP_LW: u32 = 0x23;
/// Load Byte Unsigned.
pub const OP_LBU: u32 = 0x24;
/// Load Halfword Unsigned.
pub const OP_LHU: u32 = 0x25;
/// Load Word Right.
pub const OP_LWR: u32 = 0x26;
/// Store Byte.
pub const OP_SB: u32 = 0x28;
/// Store Halfword.
pub const OP_SH: u32 = 0x29;
/// Store Word Left.
pub const OP_SWL: u32 = 0x2A;
/// Store Word.
pub const OP_SW: u32 = 0x2B;
/// Store Word Right.
pub const OP_SWR: u32 = 0x2E;
