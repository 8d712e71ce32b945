//! Run statistics collection and reporting.
//!
//! This module tracks execution metrics for the interpreter. It provides:
//! 1. **Throughput:** Retired instructions, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by category (ALU, shift, mul/div, load, store, branch, jump, system).
//! 3. **Control flow:** Taken and not-taken conditional branches.

use std::time::Instant;

use crate::isa::op::OpClass;

/// Run statistics tracking the instruction mix and host time.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// Count of arithmetic, logical and comparison instructions.
    pub inst_alu: u64,
    /// Count of shift instructions.
    pub inst_shift: u64,
    /// Count of multiply, divide and HI/LO move instructions.
    pub inst_muldiv: u64,
    /// Count of load instructions.
    pub inst_load: u64,
    /// Count of store instructions.
    pub inst_store: u64,
    /// Count of conditional branch instructions.
    pub inst_branch: u64,
    /// Count of jump instructions.
    pub inst_jump: u64,
    /// Count of `syscall` and `break` instructions.
    pub inst_system: u64,

    /// Conditional branches that were taken.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,

    /// Unimplemented encodings skipped under the skip-with-warning policy.
    pub skipped_unimplemented: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_shift: 0,
            inst_muldiv: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            skipped_unimplemented: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

impl SimStats {
    /// Records one retired instruction of the given class.
    pub fn record(&mut self, class: OpClass) {
        self.instructions_retired += 1;
        let counter = match class {
            OpClass::Alu => &mut self.inst_alu,
            OpClass::Shift => &mut self.inst_shift,
            OpClass::MulDiv => &mut self.inst_muldiv,
            OpClass::Load => &mut self.inst_load,
            OpClass::Store => &mut self.inst_store,
            OpClass::Branch => &mut self.inst_branch,
            OpClass::Jump => &mut self.inst_jump,
            OpClass::System => &mut self.inst_system,
        };
        *counter += 1;
    }

    /// Records the outcome of a conditional branch.
    pub fn record_branch(&mut self, taken: bool) {
        if taken {
            self.branches_taken += 1;
        } else {
            self.branches_not_taken += 1;
        }
    }

    /// Wall-clock seconds since the statistics were created.
    pub fn host_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.host_seconds();
        let instr = self.instructions_retired.max(1) as f64;

        if want("summary") {
            let mips = if seconds > 0.0 {
                (self.instructions_retired as f64 / seconds) / 1_000_000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("MIPS INTERPRETER STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_mips                 {mips:.2}");
            if self.skipped_unimplemented > 0 {
                println!("sim_skipped              {}", self.skipped_unimplemented);
            }
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let pct = |n: u64| (n as f64 / instr) * 100.0;
            println!("INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.shift", self.inst_shift),
                ("op.muldiv", self.inst_muldiv),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
                ("op.system", self.inst_system),
            ] {
                println!("  {name:<22} {count} ({:.2}%)", pct(count));
            }
            println!("----------------------------------------------------------");
        }
        if want("branch") {
            let total = self.branches_taken + self.branches_not_taken;
            let rate = if total > 0 {
                100.0 * (self.branches_taken as f64 / total as f64)
            } else {
                0.0
            };
            println!("BRANCHES");
            println!("  br.total               {total}");
            println!("  br.taken               {}", self.branches_taken);
            println!("  br.not_taken           {}", self.branches_not_taken);
            println!("  br.taken_rate          {rate:.2}%");
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
