//! # Unit Components
//!
//! Tests grouped by the crate module they exercise.



/// Register file, flags, ALU and CPU execution.
pub mod core;

/// Instruction layout, decode and disassembly.
pub mod isa;



/// Statistics counters and report.
pub mod stats;
