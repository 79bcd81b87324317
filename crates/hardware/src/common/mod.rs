//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Error Handling:** The closed execution-time error taxonomy.
//! 2. **Register Management:** A unified interface over the GPRs and the flags register.

/// Error types for simulation faults.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{SimError, SimResult};
pub use reg::RegisterFile;
