//! CPU Core Definition and Control Unit.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, and the run state.
//! 2. **Memory:** Owns the sparse guest address space.
//! 3. **Control:** `step` performs one fetch-decode-execute cycle and applies the
//!    resulting [`Directive`] to the program counter.
//!
//! Per-instruction semantics live in [`execution`].

/// Instruction semantics: one arm per `Op` variant.
pub mod execution;

use crate::common::RegisterFile;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::{SimError, Trap};
use crate::config::{ExecutionConfig, UnimplementedPolicy};
use crate::isa::abi;
use crate::isa::decode::decode;
use crate::isa::op::Op;
use crate::sim::syscall::SyscallHandler;
use crate::soc::Memory;
use crate::stats::SimStats;

/// How the control unit updates the program counter after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Continue at `pc + 4`.
    Advance,
    /// Continue at the given address.
    Jump(u32),
}

/// Why a run stopped without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The instruction budget reached zero.
    BudgetExhausted,
    /// The guest called `exit`/`exit_group` with this status.
    Exit(i32),
    /// A `break` instruction executed at this address.
    Breakpoint(u32),
}

/// Lifecycle of the control unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    /// Instructions may be executed.
    #[default]
    Running,
    /// No further instructions will execute.
    Halted(StopReason),
}

/// Options that alter instruction semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ExecOptions {
    /// Handling of encodings without semantics.
    pub unimplemented: UnimplementedPolicy,
    /// Trap on signed overflow in `add`, `addi` and `sub` instead of wrapping.
    pub trap_on_overflow: bool,
    /// Zero-extend `andi`/`ori`/`xori` immediates instead of sign-extending them.
    pub zero_extend_logical_imm: bool,
}

impl From<&ExecutionConfig> for ExecOptions {
    fn from(cfg: &ExecutionConfig) -> Self {
        Self {
            unimplemented: cfg.unimplemented,
            trap_on_overflow: cfg.trap_on_overflow,
            zero_extend_logical_imm: cfg.zero_extend_logical_imm,
        }
    }
}

/// Main CPU structure containing all processor state.
///
/// Every interpreter instance owns its own `Cpu`; there is no global state,
/// so independent instances can coexist.
#[derive(Debug)]
pub struct Cpu {
    /// General purpose registers and HI/LO.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u32,
    /// Guest memory.
    pub mem: Memory,
    /// Whether the control unit may execute further instructions.
    pub state: RunState,
    /// Execution statistics.
    pub stats: SimStats,
    /// Semantic options.
    pub options: ExecOptions,
}

impl Cpu {
    /// Creates a CPU over `mem` with all registers zero and PC at 0.
    pub fn new(mem: Memory, options: ExecOptions) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            mem,
            state: RunState::Running,
            stats: SimStats::default(),
            options,
        }
    }

    /// Establishes the process entry state.
    ///
    /// Sets PC to `entry`, `$gp` to `gp`, `$sp` to `sp` and `$ra` to `entry`,
    /// and marks the CPU as running.
    pub fn reset(&mut self, entry: u32, gp: u32, sp: u32) {
        self.pc = entry;
        self.regs.write(abi::REG_GP, gp);
        self.regs.write(abi::REG_SP, sp);
        self.regs.write(abi::REG_RA, entry);
        self.state = RunState::Running;
    }

    /// Returns `true` while the CPU has not halted.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Halts the CPU with the given reason.
    pub fn halt(&mut self, reason: StopReason) {
        tracing::info!(pc = format_args!("{:#010x}", self.pc), ?reason, "halted");
        self.state = RunState::Halted(reason);
    }

    /// Executes one instruction.
    ///
    /// Fetches the word at PC, decodes it, executes it and applies the
    /// resulting directive. `exit` and `break` halt the CPU and return `Ok`.
    /// A halted CPU does nothing.
    ///
    /// # Errors
    ///
    /// `SimError::Fault` for any other trap. The PC is left at the
    /// faulting instruction and the CPU stays in its current state.
    pub fn step(&mut self, syscalls: &mut dyn SyscallHandler) -> Result<(), SimError> {
        if !self.is_running() {
            return Ok(());
        }
        let pc = self.pc;
        let inst = self
            .mem
            .fetch_u32(pc)
            .map_err(|trap| SimError::Fault { pc, inst: 0, trap })?;

        let op = match Op::try_from(decode(inst)) {
            Ok(op) => op,
            Err(trap) => {
                if self.options.unimplemented == UnimplementedPolicy::SkipWithWarning {
                    tracing::warn!(
                        pc = format_args!("{pc:#010x}"),
                        inst = format_args!("{inst:#010x}"),
                        "skipping unimplemented instruction"
                    );
                    self.stats.skipped_unimplemented += 1;
                    self.pc = pc.wrapping_add(INSTRUCTION_SIZE);
                    return Ok(());
                }
                return Err(SimError::Fault { pc, inst, trap });
            }
        };

        match self.execute(op, syscalls) {
            Ok(directive) => {
                self.stats.record(op.class());
                self.pc = match directive {
                    Directive::Advance => pc.wrapping_add(INSTRUCTION_SIZE),
                    Directive::Jump(target) => target,
                };
                Ok(())
            }
            Err(Trap::Exit(code)) => {
                self.stats.record(op.class());
                self.halt(StopReason::Exit(code));
                Ok(())
            }
            Err(Trap::Breakpoint(addr)) => {
                self.stats.record(op.class());
                self.halt(StopReason::Breakpoint(addr));
                Ok(())
            }
            Err(trap) => Err(SimError::Fault { pc, inst, trap }),
        }
    }

    /// Dumps the current CPU state (PC and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.pc);
        self.regs.dump();
    }
}
