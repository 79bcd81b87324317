//! Simulator test harness.

use isasim_core::Simulator;
use isasim_core::common::SimError;
use isasim_core::config::Config;
use isasim_core::core::{Cpu, CpuState, Fault, RunOutcome};
use isasim_core::sim::pacing::Unpaced;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Default configuration: 256 words, 8 registers.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        let sim = Simulator::new(config)
            .expect("valid test config")
            .with_pacer(Box::new(Unpaced));
        Self { sim }
    }

    /// Memory capacity and register count override.
    pub fn sized(capacity: usize, registers: usize) -> Self {
        let mut config = Config::default();
        config.memory.capacity = capacity;
        config.registers.count = registers;
        Self::with_config(&config)
    }

    /// Configuration with `r0` hard-wired to zero.
    pub fn zero_register() -> Self {
        let mut config = Config::default();
        config.registers.zero_register = true;
        Self::with_config(&config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a program at `start` and point `pc` at it.
    pub fn load_program(mut self, start: u32, program: &[u32]) -> Self {
        self.sim
            .load_program(program, start)
            .expect("program fits in memory");
        self
    }

    /// Place data words at `start` without moving `pc`.
    pub fn with_data(mut self, start: u32, data: &[u32]) -> Self {
        self.sim
            .cpu
            .load_data(data, start)
            .expect("data fits in memory");
        self
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs().read(reg).expect("valid register")
    }

    /// Read a memory word.
    pub fn get_mem(&self, addr: u64) -> u32 {
        self.sim.cpu.memory().read(addr).expect("address in range")
    }

    /// Run to completion.
    pub fn run(&mut self) -> RunOutcome {
        self.sim.run()
    }

    /// Execute `n` cycles.
    pub fn step_n(&mut self, n: usize) -> CpuState {
        let mut state = self.sim.cpu.state();
        for _ in 0..n {
            state = self.sim.tick();
        }
        state
    }

    /// Run to completion and return the fault, panicking on a clean halt.
    pub fn run_expect_fault(&mut self) -> Fault {
        match self.run() {
            RunOutcome::Faulted(fault) => fault,
            other => panic!("expected a fault, got {other:?}"),
        }
    }

    /// Run to completion and return the fault's error.
    pub fn run_expect_error(&mut self) -> SimError {
        self.run_expect_fault().error
    }

    /// Run to completion, panicking on a fault.
    pub fn run_expect_halt(&mut self) -> u32 {
        match self.run() {
            RunOutcome::Halted { pc } => pc,
            RunOutcome::Faulted(fault) => panic!("unexpected fault: {fault}"),
        }
    }
}
