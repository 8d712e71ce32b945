//! Trap and Run Error definitions.
//!
//! This module defines the error handling and trap mechanisms for the interpreter. It provides:
//! 1. **Trap Representation:** Per-instruction signals raised by the execution unit.
//! 2. **Run Errors:** Failures that stop a run, carrying the faulting PC and instruction word.
//! 3. **Error Handling:** Integrating with standard Rust error traits via `thiserror`.

use thiserror::Error;

use super::data::AccessType;
use crate::sim::loader::LoaderError;

/// Reason an arithmetic instruction could not produce an architectural result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticFault {
    /// `div`/`divu` with a zero divisor.
    DivideByZero,
    /// Signed overflow in `add`/`addi`/`sub` when overflow trapping is enabled.
    Overflow,
}

impl std::fmt::Display for ArithmeticFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "division by zero"),
            Self::Overflow => write!(f, "signed overflow"),
        }
    }
}

/// Signals raised while executing a single instruction.
///
/// A trap stops the current instruction. The control unit decides whether it
/// ends the run normally (`Exit`, `Breakpoint`) or as a fault.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// The opcode/funct combination has no defined semantics.
    ///
    /// The associated value is the raw instruction word.
    #[error("UnimplementedOpcode({0:#010x})")]
    UnimplementedOpcode(u32),

    /// Division by zero or a trapping overflow.
    #[error("ArithmeticEdgeCase({0})")]
    ArithmeticEdgeCase(ArithmeticFault),

    /// Access to a page never mapped while strict memory is enabled.
    #[error("MemoryFault({access} at {addr:#010x})")]
    MemoryFault {
        /// Faulting byte address.
        addr: u32,
        /// Kind of access that faulted.
        access: AccessType,
    },

    /// A `break` instruction was executed.
    ///
    /// The associated value is the address of the `break` instruction.
    #[error("Breakpoint({0:#010x})")]
    Breakpoint(u32),

    /// The guest requested process exit through the syscall bridge.
    #[error("Exit({0})")]
    Exit(i32),
}

/// Errors that end a run before or during execution.
#[derive(Debug, Error)]
pub enum SimError {
    /// The executable image could not be loaded. Nothing was executed.
    #[error("failed to load image: {0}")]
    Loader(#[from] LoaderError),

    /// A fault inside the fetch-decode-execute loop.
    #[error("fault at pc={pc:#010x} inst={inst:#010x}: {trap}")]
    Fault {
        /// Address of the faulting instruction.
        pc: u32,
        /// Instruction word at `pc` (0 if the fetch itself faulted).
        inst: u32,
        /// The trap that stopped execution.
        #[source]
        trap: Trap,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
