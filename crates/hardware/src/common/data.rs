//! Memory access classification.
//!
//! Strict memory reports which kind of access touched an unmapped page, so a
//! `MemoryFault` says whether the PC, a load or a store went astray.

use std::fmt;

/// Kind of guest memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch at the program counter.
    Fetch,
    /// Load, including the partial reads of `lwl`/`lwr` and `swl`/`swr`.
    Read,
    /// Store.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}
