//! Simulator: owns the CPU, the syscall bridge and the step observer side-by-side.
//!
//! Keeping the bridge outside `Cpu` lets `Cpu::step` borrow it mutably
//! alongside the CPU without any interior mutability.

use std::fmt;
use std::path::Path;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::{ExecOptions, RunState, StopReason};
use crate::sim::loader::{ElfLoader, ExecutableImage, ImageLoader};
use crate::sim::observer::{StepObserver, TraceObserver};
use crate::sim::syscall::{HostSyscalls, SyscallHandler};
use crate::soc::Memory;

/// Top-level interpreter: CPU architectural state plus its collaborators.
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    syscalls: Box<dyn SyscallHandler>,
    observer: Option<Box<dyn StepObserver>>,
    executed: u64,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("observer", &self.observer.is_some())
            .field("executed", &self.executed)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates a simulator over empty memory with the PC at 0.
    ///
    /// Installs a [`TraceObserver`] when `general.trace_instructions` is set.
    pub fn new(config: &Config, syscalls: Box<dyn SyscallHandler>) -> Self {
        let mem = Memory::with_strict(config.memory.strict);
        let cpu = Cpu::new(mem, ExecOptions::from(&config.execution));
        let observer: Option<Box<dyn StepObserver>> = if config.general.trace_instructions {
            Some(Box::new(TraceObserver::new()))
        } else {
            None
        };
        Self {
            cpu,
            syscalls,
            observer,
            executed: 0,
        }
    }

    /// Creates a simulator with `image` installed and the entry state established.
    pub fn from_image(
        image: &ExecutableImage,
        config: &Config,
        syscalls: Box<dyn SyscallHandler>,
    ) -> Self {
        let mut sim = Self::new(config, syscalls);
        image.install(&mut sim.cpu.mem);
        sim.cpu.reset(image.entry, image.global_pointer, image.stack_pointer);
        sim
    }

    /// Loads `path` through `loader` and builds a simulator around it.
    ///
    /// # Errors
    ///
    /// `SimError::Loader` if the image cannot be loaded. Nothing is executed.
    pub fn with_loader(
        loader: &dyn ImageLoader,
        path: &Path,
        config: &Config,
        syscalls: Box<dyn SyscallHandler>,
    ) -> Result<Self, SimError> {
        let image = loader.load(path)?;
        Ok(Self::from_image(&image, config, syscalls))
    }

    /// Loads an ELF executable and wires it to the host syscall bridge.
    ///
    /// The program break starts at the first page past the image.
    ///
    /// # Errors
    ///
    /// `SimError::Loader` if the image cannot be loaded. Nothing is executed.
    pub fn boot(path: &Path, config: &Config) -> Result<Self, SimError> {
        let loader = ElfLoader::new(config.memory.stack_top, config.memory.stack_size);
        let image = loader.load(path)?;
        let mut syscalls = HostSyscalls::new();
        syscalls.set_brk(image.break_start());
        tracing::debug!(
            path = %path.display(),
            entry = format_args!("{:#010x}", image.entry),
            "booting image"
        );
        Ok(Self::from_image(&image, config, Box::new(syscalls)))
    }

    /// Replaces the step observer.
    pub fn set_observer(&mut self, observer: Box<dyn StepObserver>) {
        self.observer = Some(observer);
    }

    /// Number of steps attempted so far (including skipped unimplemented words).
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// Executes one instruction, notifying the observer first.
    ///
    /// # Errors
    ///
    /// `SimError::Fault` if the instruction faults.
    pub fn step(&mut self) -> Result<(), SimError> {
        if !self.cpu.is_running() {
            return Ok(());
        }
        if let Some(observer) = self.observer.as_mut() {
            let pc = self.cpu.pc;
            if let Ok(inst) = self.cpu.mem.fetch_u32(pc) {
                observer.on_step(pc, inst, &self.cpu.regs.snapshot());
            }
        }
        self.executed += 1;
        self.cpu.step(&mut *self.syscalls)
    }

    /// Runs until the CPU halts or `budget` more steps have been attempted.
    ///
    /// A CPU that is already halted executes nothing and reports its stop reason.
    ///
    /// # Returns
    ///
    /// Why execution stopped: budget, exit syscall or breakpoint.
    ///
    /// # Errors
    ///
    /// `SimError::Fault` with the faulting PC and instruction word.
    pub fn run(&mut self, budget: u64) -> Result<StopReason, SimError> {
        let mut remaining = budget;
        while self.cpu.is_running() {
            if remaining == 0 {
                self.cpu.halt(StopReason::BudgetExhausted);
                break;
            }
            remaining -= 1;
            self.step()?;
        }
        match self.cpu.state {
            RunState::Halted(reason) => Ok(reason),
            RunState::Running => Ok(StopReason::BudgetExhausted),
        }
    }
}
