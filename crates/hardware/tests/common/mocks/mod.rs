//! Mock collaborators for CPU tests.


/// Mockall-generated system call handler.
pub mod syscalls;
