//! Global Interpreter Constants.
//!
//! This module defines system-wide constants used across the interpreter. It includes:
//! 1. **Memory Constants:** Page sizes, masks, and shifts for the sparse address space.
//! 2. **Instruction Constants:** Instruction width and jump-region masks.
//! 3. **Process Layout Constants:** Default stack placement for loaded images.

/// Page size in bytes (4KB).
pub const PAGE_SIZE: usize = 4096;

/// Number of bits to shift to convert between bytes and pages.
pub const PAGE_SHIFT: u32 = 12;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u32 = (PAGE_SIZE as u32) - 1;

/// Size of a MIPS instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Upper address bits preserved by absolute `j`/`jal` targets (the 256 MiB region).
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Mask for the low five bits of a register used as a variable shift amount.
pub const SHAMT_MASK: u32 = 0x1F;

/// Default initial stack pointer for loaded programs.
pub const DEFAULT_STACK_TOP: u32 = 0x7FFF_EFFC;

/// Default size of the stack region mapped below the initial stack pointer (1 MiB).
pub const DEFAULT_STACK_SIZE: u32 = 0x10_0000;
