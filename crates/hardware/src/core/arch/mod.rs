//! Architectural state components.
//!
//! This module contains the register-level state visible to programs:
//! 1. **GPR:** The general-purpose register file.
//! 2. **Flags:** Zero, sign, carry and overflow.

/// Flags register.
pub mod flags;

/// General-purpose register file.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
