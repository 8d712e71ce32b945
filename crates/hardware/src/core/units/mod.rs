//! Execution units and functional components.
//!
//! This module contains the stateless execution units the CPU dispatches to:
//! the integer ALU, the branch resolution unit and the load/store unit.

/// Arithmetic Logic Unit for integer and multiply/divide operations.
pub mod alu;

/// Branch Resolution Unit: conditions and targets.
pub mod bru;

/// Load/Store Unit for memory access operations.
pub mod lsu;
