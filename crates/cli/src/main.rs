//! MIPS interpreter CLI.
//!
//! This binary runs a statically linked big-endian MIPS ELF executable for at
//! most a given number of instructions. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overlaid with a JSON file, then flags.
//! 2. **Boot:** Loads the image, prints the boot banner and the initial register file.
//! 3. **Execution:** Runs the budget and reports how the run ended through the exit status.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use clap::builder::PossibleValuesParser;
use tracing_subscriber::EnvFilter;

use mipsim_core::common::SimError;
use mipsim_core::config::{Config, UnimplementedPolicy};
use mipsim_core::core::cpu::StopReason;
use mipsim_core::isa::abi;
use mipsim_core::sim::Simulator;
use mipsim_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Instruction-level interpreter for 32-bit big-endian MIPS programs",
    long_about = "Loads a MIPS ELF executable and runs it for at most MAX_INSTRUCTIONS instructions.\n\nExamples:\n  mipsim hello.elf 100000\n  mipsim --strict-memory --stats prog.elf 5000000\n  mipsim --stats-sections summary,branch prog.elf 5000000\n  RUST_LOG=debug mipsim prog.elf 100"
)]
struct Cli {
    /// ELF32 big-endian MIPS executable to run.
    image: PathBuf,

    /// Maximum number of instructions to execute.
    max_instructions: u64,

    /// Fault on access to memory that was never mapped.
    #[arg(long)]
    strict_memory: bool,

    /// Warn and continue past unimplemented instructions instead of faulting.
    #[arg(long)]
    skip_unimplemented: bool,

    /// Trap on signed overflow in add, addi and sub.
    #[arg(long)]
    trap_overflow: bool,

    /// Log every executed instruction (trace level).
    #[arg(long)]
    trace: bool,

    /// JSON configuration file; flags override its values.
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Print execution statistics when the run ends.
    #[arg(long)]
    stats: bool,

    /// Print only these statistics sections (comma-separated). Implies --stats.
    #[arg(
        long,
        value_name = "LIST",
        value_delimiter = ',',
        value_parser = PossibleValuesParser::new(STATS_SECTIONS.iter().copied())
    )]
    stats_sections: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(1);
        }
    };
    tracing::debug!(?config, "effective configuration");

    let mut sim = match Simulator::boot(&cli.image, &config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("ERROR: Unable to open file at {}!", cli.image.display());
            eprintln!("  {e}");
            process::exit(1);
        }
    };

    println!("\n ----- BOOT Sequence ----- ");
    println!(
        "Initializing sp={:#010x}; gp={:#010x}; start={:#010x}",
        sim.cpu.regs.read(abi::REG_SP),
        sim.cpu.regs.read(abi::REG_GP),
        sim.cpu.pc
    );
    sim.cpu.regs.dump();

    println!("\n ----- Execute Program ----- ");
    println!("Max Instruction to run = {} ", cli.max_instructions);

    let result = sim.run(cli.max_instructions);
    let code = report(&sim, result);

    if config.general.print_registers || code != 0 {
        sim.cpu.dump_state();
    } else {
        sim.cpu.regs.dump();
    }
    if cli.stats || !cli.stats_sections.is_empty() {
        sim.cpu.stats.print_sections(&cli.stats_sections);
    }
    process::exit(code);
}

/// Prints how the run ended and returns the process exit status.
fn report(sim: &Simulator, result: Result<StopReason, SimError>) -> i32 {
    match result {
        Ok(StopReason::BudgetExhausted) => {
            println!("\n[*] Instruction budget exhausted after {} steps", sim.executed());
            0
        }
        Ok(StopReason::Exit(code)) => {
            println!("\n[*] Program exited with status {code}");
            code
        }
        Ok(StopReason::Breakpoint(addr)) => {
            println!("\n[*] Breakpoint at {addr:#010x}");
            0
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            1
        }
    }
}

/// Builds the run configuration: defaults, then the JSON file, then flags.
fn build_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };
    if cli.strict_memory {
        config.memory.strict = true;
    }
    if cli.skip_unimplemented {
        config.execution.unimplemented = UnimplementedPolicy::SkipWithWarning;
    }
    if cli.trap_overflow {
        config.execution.trap_on_overflow = true;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }
    Ok(config)
}

/// Installs the `tracing` subscriber. `RUST_LOG` wins; otherwise `warn`, or
/// `trace` for the interpreter crate when `--trace` is given.
fn init_logging(trace: bool) {
    let default = if trace { "warn,mipsim_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
