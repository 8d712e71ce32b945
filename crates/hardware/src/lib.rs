//! MIPS32 big-endian instruction interpreter library.
//!
//! This crate implements a deterministic, instruction-level interpreter for
//! 32-bit big-endian MIPS user programs with the following:
//! 1. **Core:** Register file with HI/LO, fetch-decode-execute control, and the ALU, BRU and LSU.
//! 2. **Memory:** A sparse, lazily paged 32-bit address space with optional strict mapping.
//! 3. **ISA:** Decoding of R/I/J words into typed operations, and a disassembler.
//! 4. **Simulation:** ELF loader, Linux o32 syscall bridge, step observers and statistics.
//!
//! # Example
//!
//! ```
//! use mipsim_core::config::Config;
//! use mipsim_core::core::cpu::StopReason;
//! use mipsim_core::sim::{HostSyscalls, Simulator};
//!
//! let mut sim = Simulator::new(&Config::default(), Box::new(HostSyscalls::new()));
//! // addiu $t0, $zero, 7 ; break
//! sim.cpu.mem.write_u32(0x0, 0x2408_0007).unwrap();
//! sim.cpu.mem.write_u32(0x4, 0x0000_000D).unwrap();
//! assert_eq!(sim.run(10).unwrap(), StopReason::Breakpoint(0x4));
//! assert_eq!(sim.cpu.regs.read(8), 7);
//! ```

/// Common types and constants (registers, traps, access types).
pub mod common;
/// Interpreter configuration (sections, defaults, JSON loading).
pub mod config;
/// CPU core (arch state, execution units, control).
pub mod core;
/// Instruction set (decode, operand records, ops, ABI names, disassembly).
pub mod isa;
/// Loader, syscall bridge, observers and the top-level simulator.
pub mod sim;
/// Guest memory.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory and stats.
pub use crate::core::Cpu;
/// Top-level interpreter; construct with `Simulator::boot` or `Simulator::new`.
pub use crate::sim::Simulator;
