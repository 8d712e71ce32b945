//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, the interface the execution unit
//! uses for every register access. It provides:
//! 1. **General Registers:** `read`/`write` over `$0`-`$31` with `$zero` hardwired.
//! 2. **Accumulators:** Named access to HI and LO for multiply/divide results.
//! 3. **Observability:** Snapshots for step observers and a dump for end-of-run output.

use crate::core::arch::gpr::{Gpr, HI, LO, NUM_SLOTS};
use crate::isa::abi;

/// Register file holding the 32 general registers and the HI/LO pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `$zero` always returns 0.
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$zero` are ignored.
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Returns the HI accumulator.
    pub fn hi(&self) -> u32 {
        self.gpr.read(HI)
    }

    /// Returns the LO accumulator.
    pub fn lo(&self) -> u32 {
        self.gpr.read(LO)
    }

    /// Sets the HI accumulator.
    pub fn set_hi(&mut self, val: u32) {
        self.gpr.write(HI, val);
    }

    /// Sets the LO accumulator.
    pub fn set_lo(&mut self, val: u32) {
        self.gpr.write(LO, val);
    }

    /// Returns all 34 slots (`$0`-`$31`, HI, LO) for observers.
    pub fn snapshot(&self) -> [u32; NUM_SLOTS] {
        self.gpr.slots()
    }

    /// Dumps the register file to stdout, four registers per line.
    pub fn dump(&self) {
        let slots = self.snapshot();
        for row in (0..32).step_by(4) {
            let line: Vec<String> = (row..row + 4)
                .map(|i| format!("{:>5}={:#010x}", abi::name(i), slots[i]))
                .collect();
            println!("{}", line.join("  "));
        }
        println!("   hi={:#010x}     lo={:#010x}", slots[HI], slots[LO]);
    }
}
