//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of each interpreter
//! component, from register storage and execution units up to the loader and
//! the top-level run loop.


/// Unit tests for configuration parsing and defaults.
pub mod config;


/// Unit tests for the MIPS32 decoder, operation lowering and disassembler.
pub mod isa;


/// Unit tests for guest memory.
pub mod soc;
