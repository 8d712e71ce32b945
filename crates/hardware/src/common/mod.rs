//! Common utilities and types used throughout the MIPS interpreter.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the interpreter. It includes:
//! 1. **Constants:** System-wide constants for memory, instructions, and process layout.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Trap representations and run-level errors.
//! 4. **Register Management:** The unified register file interface.

/// Common constants used throughout the interpreter.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{INSTRUCTION_SIZE, PAGE_SHIFT, PAGE_SIZE};
pub use data::AccessType;
pub use error::{ArithmeticFault, SimError, Trap};
pub use reg::RegisterFile;
