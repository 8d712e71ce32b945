//! Shared test infrastructure.


/// `TestContext` wrapping a simulator with convenience accessors.
pub mod harness;

/// Mock collaborators for the CPU.
pub mod mocks;

#[cfg(test)]
mod infrastructure_tests;
