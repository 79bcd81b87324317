//! Memory subsystem.
//!
//! The simulated machine has a single flat word-addressed memory shared by
//! instructions and data. There is no bus, cache or MMIO layer.

/// Flat word-addressed main memory.
pub mod memory;

pub use memory::Memory;
