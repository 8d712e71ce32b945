//! Configuration system for the MIPS interpreter.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the interpreter. It provides:
//! 1. **Defaults:** Baseline constants for the stack and execution policy.
//! 2. **Structures:** Hierarchical config for general, memory, and execution settings.
//! 3. **Enums:** The policy applied to encodings without semantics.
//!
//! Configuration is supplied as JSON (`Config::from_json`), or use `Config::default()`.
//! Every field is optional; missing fields take their defaults.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_STACK_SIZE, DEFAULT_STACK_TOP};
use crate::common::error::SimError;

/// Policy for instruction words that decode to no known operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum UnimplementedPolicy {
    /// Stop the run with `Trap::UnimplementedOpcode`.
    #[default]
    Fault,
    /// Log a warning and continue at PC + 4.
    ///
    /// Only meant for compatibility testing against partially supported binaries.
    #[serde(alias = "Skip")]
    SkipWithWarning,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, UnimplementedPolicy};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "strict": true, "stack_top": 2147418108 },
///     "execution": { "unimplemented": "SkipWithWarning" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert!(config.memory.strict);
/// assert_eq!(config.memory.stack_top, 0x7FFE_FFFC);
/// assert_eq!(config.execution.unimplemented, UnimplementedPolicy::SkipWithWarning);
/// assert!(!config.execution.trap_on_overflow);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run settings
    pub general: GeneralConfig,
    /// Guest memory settings
    pub memory: MemoryConfig,
    /// Instruction semantics options
    pub execution: ExecutionConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// `SimError::Config` with the parser message if the document is malformed
    /// or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Install a per-step trace observer (logged at `trace` level)
    pub trace_instructions: bool,
    /// Print the register file when the run ends
    pub print_registers: bool,
}

/// Guest memory settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Fault on access to pages that were never mapped
    pub strict: bool,
    /// Initial stack pointer
    pub stack_top: u32,
    /// Bytes mapped below `stack_top` for the stack
    pub stack_size: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            strict: false,
            stack_top: DEFAULT_STACK_TOP,
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

/// Instruction semantics options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// What to do with encodings that have no semantics
    pub unimplemented: UnimplementedPolicy,
    /// Raise `ArithmeticEdgeCase(Overflow)` on signed overflow in add/addi/sub
    pub trap_on_overflow: bool,
    /// Zero-extend the immediates of andi/ori/xori (MIPS32 architectural) instead of
    /// sign-extending them like every other 16-bit immediate
    pub zero_extend_logical_imm: bool,
}
