//! Architectural state definitions.
//!
//! Holds the programmer-visible register storage of the MIPS core.

/// General-purpose register storage (`$0`-`$31`, HI, LO).
pub mod gpr;
