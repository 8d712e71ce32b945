//! MIPS32 Base Integer Instruction Set (MIPS I subset).
//!
//! Defines the numeric encodings the decoder and `Op` lowering match against.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: SPECIAL (opcode 0) function codes (bits 5-0).
//! - `regimm`: REGIMM (opcode 1) branch selectors carried in the `rt` field.

/// SPECIAL function codes.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;

/// REGIMM `rt` selectors.
pub mod regimm;
