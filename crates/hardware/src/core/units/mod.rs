//! Functional units.
//!
//! The simulated core has a single functional unit, the integer ALU.

/// Arithmetic Logic Unit.
pub mod alu;
