//! MIPS General-Purpose Register File.
//!
//! This module implements the integer register storage for the MIPS architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 general registers plus the HI and LO accumulators.
//! 2. **Invariant Enforcement:** Ensures that register `$zero` is hardwired to zero.

/// Number of architectural integer slots: 32 GPRs, HI, LO.
pub const NUM_SLOTS: usize = 34;

/// Slot index of the HI accumulator.
pub const HI: usize = 32;

/// Slot index of the LO accumulator.
pub const LO: usize = 33;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers and the two multiply/divide
/// accumulators. Slot 0 is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_SLOTS],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a new register file with all slots initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_SLOTS],
        }
    }

    /// Reads a slot value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Slot index (0-33). Slot 0 always returns 0.
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a slot value. Writes to slot 0 are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Slot index (0-33).
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of every slot, HI and LO included.
    pub fn slots(&self) -> [u32; NUM_SLOTS] {
        self.regs
    }
}
