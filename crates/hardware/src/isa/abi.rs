//! MIPS o32 Application Binary Interface (ABI) register name constants.
//!
//! Defines the o32 register names and their indices for use in system calls,
//! the loader's boot sequence, and the disassembler.

/// Register $0 (hardwired zero).
pub const REG_ZERO: usize = 0;
/// Register $1 (assembler temporary, at).
pub const REG_AT: usize = 1;
/// Register $2 (syscall number / first return value, v0).
pub const REG_V0: usize = 2;
/// Register $3 (second return value, v1).
pub const REG_V1: usize = 3;
/// Register $4 (first argument, a0).
pub const REG_A0: usize = 4;
/// Register $5 (second argument, a1).
pub const REG_A1: usize = 5;
/// Register $6 (third argument, a2).
pub const REG_A2: usize = 6;
/// Register $7 (fourth argument / syscall error flag, a3).
pub const REG_A3: usize = 7;
/// Register $8 (temporary, t0).
pub const REG_T0: usize = 8;
/// Register $9 (temporary, t1).
pub const REG_T1: usize = 9;
/// Register $10 (temporary, t2).
pub const REG_T2: usize = 10;
/// Register $11 (temporary, t3).
pub const REG_T3: usize = 11;
/// Register $16 (callee-saved, s0).
pub const REG_S0: usize = 16;
/// Register $17 (callee-saved, s1).
pub const REG_S1: usize = 17;
/// Register $25 (temporary / PIC call target, t9).
pub const REG_T9: usize = 25;
/// Register $28 (global pointer, gp).
pub const REG_GP: usize = 28;
/// Register $29 (stack pointer, sp).
pub const REG_SP: usize = 29;
/// Register $30 (frame pointer, fp).
pub const REG_FP: usize = 30;
/// Register $31 (return address, ra).
pub const REG_RA: usize = 31;

/// o32 names for `$0`-`$31`, followed by the accumulators.
const NAMES: [&str; 34] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra", "hi", "lo",
];

/// Returns the ABI name for a register slot, or `"??"` when out of range.
pub fn name(idx: usize) -> &'static str {
    NAMES.get(idx).copied().unwrap_or("??")
}
