//! MIPS32 REGIMM Selectors.
//!
//! For opcode 1 the `rt` field (bits 20-16) picks the compare-against-zero branch.

/// Branch on Less Than Zero.
pub const BLTZ: usize = 0x00;
/// Branch on Greater Than or Equal to Zero.
pub const BGEZ: usize = 0x01;
/// Branch on Less Than Zero And Link.
pub const BLTZAL: usize = 0x10;
/// Branch on Greater Than or Equal to Zero And Link.
pub const BGEZAL: usize = 0x11;
