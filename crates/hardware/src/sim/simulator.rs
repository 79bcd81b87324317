//! Simulator: owns the CPU and the cycle pacer side-by-side.
//!
//! The CPU knows how to execute one cycle; the simulator drives it to a
//! terminal state and applies pacing between cycles.

use std::ops::Range;

use tracing::info;

use crate::common::SimResult;
use crate::config::{Config, ConfigError};
use crate::core::{Cpu, CpuSnapshot, CpuState, RunOutcome};
use crate::sim::pacing::{self, Pacer};

/// Top-level simulator: CPU architectural state + pacing policy.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    pacer: Box<dyn Pacer>,
}

impl Simulator {
    /// Creates a simulator from a configuration.
    ///
    /// # Errors
    ///
    /// Any `ConfigError` from validation.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            cpu: Cpu::new(config)?,
            pacer: pacing::from_config(config),
        })
    }

    /// Replaces the pacing policy.
    #[must_use]
    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Loads a program at `start`; see `Cpu::load_program`.
    ///
    /// # Errors
    ///
    /// `NotReady` once execution has started, `ProgramTooLarge` if the image
    /// does not fit.
    pub fn load_program(&mut self, program: &[u32], start: u32) -> SimResult<()> {
        self.cpu.load_program(program, start)
    }

    /// Advances the simulator by one cycle.
    pub fn tick(&mut self) -> CpuState {
        let state = self.cpu.step();
        if state == CpuState::Running {
            self.pacer.pace();
        }
        state
    }

    /// Runs to completion.
    pub fn run(&mut self) -> RunOutcome {
        loop {
            if let Some(outcome) = self.cpu.outcome() {
                info!(
                    cycles = self.cpu.stats.cycles,
                    retired = self.cpu.stats.instructions_retired,
                    "run finished"
                );
                return outcome;
            }
            if self.cpu.step() == CpuState::Running {
                self.pacer.pace();
            }
        }
    }

    /// Runs at most `max_steps` cycles.
    ///
    /// Returns `None` if the CPU is still running afterwards.
    pub fn run_for(&mut self, max_steps: u64) -> Option<RunOutcome> {
        for _ in 0..max_steps {
            if self.cpu.outcome().is_some() {
                break;
            }
            if self.cpu.step() == CpuState::Running {
                self.pacer.pace();
            }
        }
        self.cpu.outcome()
    }

    /// Copies the architectural state.
    pub fn snapshot(&self) -> CpuSnapshot {
        self.cpu.snapshot()
    }

    /// Words in `range` of main memory.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the range extends past the end of memory.
    pub fn memory_range(&self, range: Range<u32>) -> SimResult<&[u32]> {
        self.cpu.memory_range(range)
    }
}
