//! Guest platform.
//!
//! The interpreter models a single flat 32-bit address space with no devices
//! or translation; this module holds that memory.

/// Sparse, lazily paged guest memory.
pub mod memory;

pub use memory::Memory;
