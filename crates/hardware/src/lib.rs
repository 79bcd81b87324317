//! Word-addressed 32-bit instruction-set simulator library.
//!
//! This crate models a small 32-bit processor and runs programs through a
//! fetch-decode-execute loop. It is organized as follows:
//! 1. **ISA:** Fixed-width instruction layout, opcodes, addressing modes, decode and disassembly.
//! 2. **Core:** Register file, flags, ALU and the CPU that resolves operands and executes.
//! 3. **Memory:** A flat, bounds-checked store of 32-bit words.
//! 4. **Simulation:** Program image loading, cycle pacing and the top-level simulator.
//! 5. **Configuration and statistics:** Serde-backed config and retired-instruction counters.

/// Common types (error taxonomy, unified register file).
pub mod common;
/// Simulator configuration (defaults, validation, JSON).
pub mod config;
/// CPU core (architectural state, ALU, execution).
pub mod core;
/// Instruction set (layout, opcodes, addressing modes, decode, disassembly).
pub mod isa;
/// Program loading, pacing and the simulator driver.
pub mod sim;
/// Memory subsystem.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural CPU state; one instance per simulation run.
pub use crate::core::Cpu;
/// Top-level simulator driving a `Cpu` with optional cycle pacing.
pub use crate::sim::simulator::Simulator;
