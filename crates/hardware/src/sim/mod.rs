//! Program loading, system calls and the top-level run loop.
//!
//! Provides the collaborators the CPU needs to run a real program: an image
//! loader, a system call bridge, step observers and the `Simulator` that ties
//! them together.

/// Executable image loading (ELF32 big-endian MIPS).
pub mod loader;

/// Per-step observation hooks.
pub mod observer;

/// Top-level simulator owning the CPU and its collaborators.
pub mod simulator;

/// System call bridge and the host-backed implementation.
pub mod syscall;

pub use loader::{ElfLoader, ExecutableImage, ImageLoader, LoaderError};
pub use observer::{StepObserver, TraceObserver};
pub use simulator::Simulator;
pub use syscall::{HostSyscalls, SyscallHandler, SyscallOutcome};
