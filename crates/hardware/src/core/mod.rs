//! Core processor implementation.
//!
//! This module contains the CPU implementation: architectural register
//! storage, the stateless execution units, and the `Cpu` aggregate that
//! fetches, decodes and executes instructions.

/// Architecture-specific components (register storage).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU, BRU, LSU).
pub mod units;

pub use self::cpu::Cpu;
