//! CPU Core Definition and Control Loop.
//!
//! This module defines the central `Cpu` structure, the container for the entire
//! processor state for one simulation run. It coordinates the following:
//! 1. **State Management:** Register file, flags, `pc`, `sp`, `ir` and main memory.
//! 2. **Lifecycle:** `Ready → Running → {Halted, Faulted}`; terminal states are final.
//! 3. **Control Loop:** Fetch at `pc`, advance `pc`, decode, execute.
//! 4. **Inspection:** Read-only snapshots of architectural state.

/// Opcode dispatch and instruction semantics.
pub mod execution;

/// Addressing-mode operand resolution.
pub mod operand;

use std::fmt;
use std::ops::Range;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::common::{RegisterFile, SimError, SimResult};
use crate::config::{Config, ConfigError};
use crate::core::arch::flags::Flags;
use crate::isa::decode::decode;
use crate::isa::disasm::format_instruction;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Execution state of a CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CpuState {
    /// Created or loaded; no instruction executed yet.
    Ready,
    /// Executing instructions.
    Running,
    /// Stopped cleanly by HALT or by `pc` reaching the end of memory.
    Halted,
    /// Stopped by an execution error.
    Faulted,
}

impl CpuState {
    /// Returns `true` for `Halted` and `Faulted`.
    pub fn is_terminal(self) -> bool {
        matches!(self, CpuState::Halted | CpuState::Faulted)
    }
}

/// An execution error together with where it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Fault {
    /// What went wrong.
    pub error: SimError,
    /// Address the faulting instruction was fetched from.
    pub pc: u32,
    /// Raw faulting instruction word.
    pub instruction: u32,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at pc={:#x} (instruction {:#010x})",
            self.error, self.pc, self.instruction
        )
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state")]
pub enum RunOutcome {
    /// Clean stop.
    Halted {
        /// Program counter after the final cycle.
        pc: u32,
    },
    /// Stopped by an execution error.
    Faulted(Fault),
}

/// Read-only copy of the architectural state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CpuSnapshot {
    /// General-purpose register values in index order.
    pub registers: Vec<u32>,
    /// Flags register.
    pub flags: Flags,
    /// Program counter (next fetch address).
    pub pc: u32,
    /// Stack pointer.
    pub sp: u32,
    /// Last fetched instruction word.
    pub ir: u32,
    /// Execution state.
    pub state: CpuState,
    /// Instructions retired so far.
    pub retired: u64,
}

/// Main CPU structure containing all processor state.
///
/// A `Cpu` is built once per run from a `Config`, loaded, run to a terminal
/// state and then discarded. It is never resumed.
#[derive(Debug)]
pub struct Cpu {
    regs: RegisterFile,
    memory: Memory,
    pc: u32,
    sp: u32,
    ir: u32,
    state: CpuState,
    finished: Option<RunOutcome>,
    /// Log every retired instruction at debug level.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed registers, flags and memory.
    ///
    /// `sp` starts at the last memory word.
    ///
    /// # Errors
    ///
    /// Any `ConfigError` from `Config::validate`.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.memory.capacity;
        info!(
            capacity,
            registers = config.registers.count,
            zero_register = config.registers.zero_register,
            "cpu initialized"
        );
        Ok(Self {
            regs: RegisterFile::new(config.registers.count, config.registers.zero_register),
            memory: Memory::new(capacity),
            pc: 0,
            sp: (capacity - 1) as u32,
            ir: 0,
            state: CpuState::Ready,
            finished: None,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        })
    }

    /// Copies a program into memory at `start` and points `pc` at it.
    ///
    /// The CPU stays `Ready`; execution starts with `run` or `step`.
    ///
    /// # Errors
    ///
    /// `NotReady` once execution has started, `ProgramTooLarge` if the image
    /// does not fit. Nothing is modified on error.
    pub fn load_program(&mut self, program: &[u32], start: u32) -> SimResult<()> {
        self.ensure_ready("program")?;
        self.memory.load_words(start, program)?;
        self.pc = start;
        info!(start, words = program.len(), "program loaded");
        Ok(())
    }

    /// Copies an initial data image into memory without touching `pc`.
    ///
    /// # Errors
    ///
    /// `NotReady` once execution has started, `ProgramTooLarge` if the image
    /// does not fit. Nothing is modified on error.
    pub fn load_data(&mut self, data: &[u32], start: u32) -> SimResult<()> {
        self.ensure_ready("data")?;
        self.memory.load_words(start, data)?;
        debug!(start, words = data.len(), "data image loaded");
        Ok(())
    }

    fn ensure_ready(&self, image: &str) -> SimResult<()> {
        if self.state == CpuState::Ready {
            return Ok(());
        }
        warn!(state = ?self.state, image, "load refused after execution started");
        Err(SimError::NotReady)
    }

    /// Runs until the CPU halts or faults and returns how it ended.
    ///
    /// Calling `run` on a finished CPU returns the recorded outcome without
    /// executing anything.
    pub fn run(&mut self) -> RunOutcome {
        loop {
            if let Some(outcome) = self.outcome() {
                return outcome;
            }
            self.cycle();
        }
    }

    /// Executes a single fetch-decode-execute cycle and returns the new state.
    ///
    /// A no-op on a finished CPU.
    pub fn step(&mut self) -> CpuState {
        self.cycle();
        self.state
    }

    fn cycle(&mut self) {
        match self.state {
            CpuState::Halted | CpuState::Faulted => return,
            CpuState::Ready => {
                self.state = CpuState::Running;
                info!(pc = self.pc, "execution started");
            }
            CpuState::Running => {}
        }

        if self.pc as usize >= self.memory.capacity() {
            self.halt();
            info!(pc = self.pc, "program counter reached end of memory");
            return;
        }

        let fetch_pc = self.pc;
        self.stats.cycles += 1;
        let word = match self.memory.read(u64::from(fetch_pc)) {
            Ok(word) => word,
            Err(error) => return self.raise(error, fetch_pc, 0),
        };
        self.ir = word;
        self.pc = fetch_pc + 1;

        let inst = decode(word);
        if self.trace {
            debug!(pc = fetch_pc, "{word:#010x}  {}", format_instruction(&inst));
        }

        match self.execute(&inst) {
            Ok(op) => {
                self.stats.retire(op.class());
                if self.state == CpuState::Halted {
                    self.halt();
                    info!(pc = fetch_pc, "halt instruction executed");
                }
            }
            Err(error) => self.raise(error, fetch_pc, word),
        }
    }

    fn raise(&mut self, error: SimError, pc: u32, instruction: u32) {
        let fault = Fault {
            error,
            pc,
            instruction,
        };
        warn!(%fault, "execution faulted");
        self.finished = Some(RunOutcome::Faulted(fault));
        self.state = CpuState::Faulted;
    }

    /// Records a clean stop at the current `pc`.
    fn halt(&mut self) {
        self.state = CpuState::Halted;
        self.finished = Some(RunOutcome::Halted { pc: self.pc });
    }

    /// The outcome recorded when the CPU stopped, or `None` while it can still execute.
    pub fn outcome(&self) -> Option<RunOutcome> {
        self.finished
    }

    /// Current execution state.
    pub fn state(&self) -> CpuState {
        self.state
    }

    /// The recorded fault, if the CPU faulted.
    pub fn fault(&self) -> Option<Fault> {
        match self.finished {
            Some(RunOutcome::Faulted(fault)) => Some(fault),
            _ => None,
        }
    }

    /// Program counter.
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Stack pointer.
    pub fn sp(&self) -> u32 {
        self.sp
    }

    /// Instruction register (last fetched word).
    pub fn ir(&self) -> u32 {
        self.ir
    }

    /// Register file and flags.
    pub fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Flags register.
    pub fn flags(&self) -> Flags {
        self.regs.flags
    }

    /// Main memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Words in `range` of main memory.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the range extends past the end of memory.
    pub fn memory_range(&self, range: Range<u32>) -> SimResult<&[u32]> {
        self.memory.slice(range)
    }

    /// Copies the architectural state.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            registers: self.regs.values(),
            flags: self.regs.flags,
            pc: self.pc,
            sp: self.sp,
            ir: self.ir,
            state: self.state,
            retired: self.stats.instructions_retired,
        }
    }

    /// Prints the register file and special registers to stdout.
    pub fn dump_state(&self) {
        println!(
            "pc={:#x} sp={:#x} ir={:#010x} state={:?}",
            self.pc, self.sp, self.ir, self.state
        );
        println!("{}", self.regs);
    }
}
