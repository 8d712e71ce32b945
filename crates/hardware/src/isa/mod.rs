//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for
//! the MIPS32 integer instruction set (MIPS I user-mode subset).
//!
//! # Layers
//!
//! * `instruction`: Field extraction and the R/I/J operand records.
//! * `decode`: Word → operand record classification.
//! * `op`: Operand record → one variant per instruction kind.
//! * `disasm`: Human-readable rendering for traces.

/// o32 ABI register name mappings.
pub mod abi;

/// Instruction classification into R/I/J operand records.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode, function-code and REGIMM constants.
pub mod mips32;

/// Semantic instruction enum produced from decoded records.
pub mod op;
