//! CPU core.
//!
//! This module contains the processor model:
//! 1. **Arch:** Architectural registers (GPRs, flags).
//! 2. **Units:** The integer ALU.
//! 3. **CPU:** State container, operand resolution, execution and the control loop.

/// Architectural state (register file, flags).
pub mod arch;

/// CPU state, execution and control loop.
pub mod cpu;

/// Functional units (ALU).
pub mod units;

pub use cpu::{Cpu, CpuSnapshot, CpuState, Fault, RunOutcome};
