//! Step observation hooks.
//!
//! A [`StepObserver`] is called before every instruction with the PC, the
//! instruction word, and a snapshot of the register file. Observers see
//! state only by value and cannot influence execution.

use crate::core::arch::gpr::NUM_SLOTS;
use crate::isa::abi;
use crate::isa::disasm::disassemble;

/// Receives a callback before each instruction executes.
pub trait StepObserver {
    /// Called with the state the instruction at `pc` is about to execute against.
    fn on_step(&mut self, pc: u32, inst: u32, regs: &[u32; NUM_SLOTS]);
}

/// Logs every step at `trace` level with its disassembly.
///
/// Register values are included for the argument and return registers,
/// which is usually enough to follow syscalls and calls.
#[derive(Debug, Default)]
pub struct TraceObserver {
    steps: u64,
}

impl TraceObserver {
    /// Creates a trace observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps observed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl StepObserver for TraceObserver {
    fn on_step(&mut self, pc: u32, inst: u32, regs: &[u32; NUM_SLOTS]) {
        self.steps += 1;
        tracing::trace!(
            step = self.steps,
            pc = format_args!("{pc:#010x}"),
            inst = format_args!("{inst:#010x}"),
            v0 = format_args!("{:#x}", regs[abi::REG_V0]),
            a0 = format_args!("{:#x}", regs[abi::REG_A0]),
            sp = format_args!("{:#x}", regs[abi::REG_SP]),
            "{}",
            disassemble(inst)
        );
    }
}
