use std::io;

use mipsim_core::Simulator;
use mipsim_core::common::SimError;
use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::core::cpu::StopReason;
use mipsim_core::sim::{HostSyscalls, SyscallHandler};

/// Address test programs are placed at unless a test says otherwise.
pub const TEXT_BASE: u32 = 0x0040_0000;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a context whose host syscalls read nothing and discard output.
    pub fn with_config(config: &Config) -> Self {
        let syscalls = HostSyscalls::with_io(
            Box::new(io::empty()),
            Box::new(io::sink()),
            Box::new(io::sink()),
        );
        Self::with_syscalls(config, Box::new(syscalls))
    }

    pub fn with_syscalls(config: &Config, syscalls: Box<dyn SyscallHandler>) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
        Self {
            sim: Simulator::new(config, syscalls),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a sequence of 32-bit instructions into memory at `addr` and set the PC.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        let bytes: Vec<u8> = instructions.iter().flat_map(|w| w.to_be_bytes()).collect();
        self.sim.cpu.mem.load_bytes(addr, &bytes);
        self.sim.cpu.pc = addr;
        self
    }

    /// Place raw bytes in guest memory.
    pub fn with_data(mut self, addr: u32, bytes: &[u8]) -> Self {
        self.sim.cpu.mem.load_bytes(addr, bytes);
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Run at most `budget` instructions.
    pub fn run(&mut self, budget: u64) -> Result<StopReason, SimError> {
        self.sim.run(budget)
    }

    /// Run a program expected to finish cleanly, returning its stop reason.
    pub fn run_ok(&mut self, budget: u64) -> StopReason {
        match self.sim.run(budget) {
            Ok(reason) => reason,
            Err(e) => panic!("unexpected fault: {e}"),
        }
    }
}
