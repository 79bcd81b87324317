//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for a run. It provides:
//! 1. **Cycles:** Fetch-decode-execute cycles started and instructions retired.
//! 2. **Instruction mix:** Counts by class (load, store, jump, ALU, system).
//! 3. **Throughput:** Wall-clock time and instructions per second.

use std::fmt;
use std::time::{Duration, Instant};

use crate::isa::opcodes::InstClass;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Cycles started, including one that faulted.
    pub cycles: u64,
    /// Instructions that completed without a fault.
    pub instructions_retired: u64,

    /// Count of LOAD instructions retired.
    pub inst_load: u64,
    /// Count of STORE instructions retired.
    pub inst_store: u64,
    /// Count of JUMP instructions retired.
    pub inst_jump: u64,
    /// Count of arithmetic/logic/shift instructions retired.
    pub inst_alu: u64,
    /// Count of HALT instructions retired.
    pub inst_system: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_jump: 0,
            inst_alu: 0,
            inst_system: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction of the given class.
    pub fn retire(&mut self, class: InstClass) {
        self.instructions_retired += 1;
        match class {
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Jump => self.inst_jump += 1,
            InstClass::Alu => self.inst_alu += 1,
            InstClass::System => self.inst_system += 1,
        }
    }

    /// Wall-clock time since the statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed().as_secs_f64();
        let ips = if secs > 0.0 {
            self.instructions_retired as f64 / secs
        } else {
            0.0
        };
        let pct = |n: u64| {
            if self.instructions_retired == 0 {
                0.0
            } else {
                n as f64 * 100.0 / self.instructions_retired as f64
            }
        };

        writeln!(f, "==========================================")?;
        writeln!(f, " Simulation statistics")?;
        writeln!(f, "==========================================")?;
        writeln!(f, "  cycles           {:>12}", self.cycles)?;
        writeln!(f, "  retired          {:>12}", self.instructions_retired)?;
        writeln!(f, "  host time        {secs:>12.4} s")?;
        writeln!(f, "  throughput       {ips:>12.0} inst/s")?;
        writeln!(f, "  mix:")?;
        writeln!(f, "    load           {:>12} ({:5.1}%)", self.inst_load, pct(self.inst_load))?;
        writeln!(f, "    store          {:>12} ({:5.1}%)", self.inst_store, pct(self.inst_store))?;
        writeln!(f, "    jump           {:>12} ({:5.1}%)", self.inst_jump, pct(self.inst_jump))?;
        writeln!(f, "    alu            {:>12} ({:5.1}%)", self.inst_alu, pct(self.inst_alu))?;
        write!(f, "    system         {:>12} ({:5.1}%)", self.inst_system, pct(self.inst_system))
    }
}
