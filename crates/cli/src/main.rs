//! Instruction-set simulator CLI.
//!
//! This binary provides a single entry point for the simulator. It performs:
//! 1. **Run:** Load a program image, execute it to completion and report the outcome.
//! 2. **Disassemble:** Print a program image as assembler text without executing it.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use isasim_core::config::Config;
use isasim_core::core::RunOutcome;
use isasim_core::isa::disasm::disassemble;
use isasim_core::sim::loader;
use isasim_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "isasim",
    author,
    version,
    about = "Word-addressed 32-bit instruction-set simulator",
    long_about = "Run or disassemble a program image.\n\nImages are raw big-endian words (.bin) or text with one word per line.\n\nExamples:\n  isasim run program.txt\n  isasim run program.bin --config sim.json --hz 10 --trace\n  isasim disasm program.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image until it halts or faults.
    Run {
        /// Program image to execute.
        image: PathBuf,

        /// Word address the program is loaded at and starts from.
        #[arg(short, long, default_value_t = 0)]
        start: u32,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Throttle execution to this many cycles per second.
        #[arg(long)]
        hz: Option<u32>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Print the final state as JSON.
        #[arg(long)]
        json: bool,

        /// Stop after this many cycles if the program has not finished.
        #[arg(long)]
        max_steps: Option<u64>,
    },

    /// Disassemble a program image.
    Disasm {
        /// Program image to disassemble.
        image: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    match cli.command {
        Commands::Run {
            image,
            start,
            config,
            hz,
            trace,
            json,
            max_steps,
        } => cmd_run(&image, start, config.as_deref(), hz, trace, json, max_steps),
        Commands::Disasm { image } => cmd_disasm(&image),
    }
}

/// Installs the tracing subscriber; `RUST_LOG` wins over the default level.
fn init_logging(trace: bool) {
    let default = if trace { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        error!(path = %path.display(), "could not read config: {e}");
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        error!(path = %path.display(), "invalid config: {e}");
        process::exit(1);
    })
}

fn load_image(path: &Path) -> Vec<u32> {
    loader::load_image(path).unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    })
}

/// Loads the image, runs it and exits with 0 on a clean halt, 1 otherwise.
fn cmd_run(
    image: &Path,
    start: u32,
    config: Option<&Path>,
    hz: Option<u32>,
    trace: bool,
    json: bool,
    max_steps: Option<u64>,
) {
    let mut config = load_config(config);
    if hz.is_some() {
        config.general.clock_hz = hz;
    }
    config.general.trace_instructions |= trace;

    let mut sim = Simulator::new(&config).unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });
    let program = load_image(image);
    if let Err(e) = sim.load_program(&program, start) {
        error!("{e}");
        process::exit(1);
    }
    info!(image = %image.display(), start, words = program.len(), "starting run");

    let outcome = match max_steps {
        Some(limit) => sim.run_for(limit),
        None => Some(sim.run()),
    };

    if json {
        let report = serde_json::json!({
            "outcome": outcome,
            "snapshot": sim.snapshot(),
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!("could not serialize report: {e}");
                process::exit(1);
            }
        }
    } else {
        match &outcome {
            Some(RunOutcome::Halted { pc }) => println!("[*] Halted at pc={pc:#x}"),
            Some(RunOutcome::Faulted(fault)) => println!("[!] FAULT: {fault}"),
            None => println!("[*] Stopped after {} cycles", sim.cpu.stats.cycles),
        }
        sim.cpu.dump_state();
        sim.cpu.stats.print();
    }

    let code = i32::from(!matches!(outcome, Some(RunOutcome::Halted { .. })));
    process::exit(code);
}

fn cmd_disasm(image: &Path) {
    for (addr, word) in load_image(image).into_iter().enumerate() {
        println!("{addr:04x}:  {word:08x}  {}", disassemble(word));
    }
}
