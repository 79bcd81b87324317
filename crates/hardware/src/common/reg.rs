//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, a single interface over the
//! general-purpose registers and the flags register. It provides:
//! 1. **Unified Storage:** GPRs and flags live together and are reset together.
//! 2. **Abstraction:** Fallible read/write with register-index validation.
//! 3. **Observability:** A formatter for dumping register state during simulation.

use std::fmt;

use crate::common::SimResult;
use crate::core::arch::flags::Flags;
use crate::core::arch::gpr::Gpr;

/// Register file containing the general-purpose registers and the flags register.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    gpr: Gpr,
    /// Condition flags.
    pub flags: Flags,
}

impl RegisterFile {
    /// Creates a new register file with all registers and flags cleared.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of general-purpose registers.
    /// * `zero_register` - Whether `r0` is hard-wired to zero.
    pub fn new(count: usize, zero_register: bool) -> Self {
        Self {
            gpr: Gpr::new(count, zero_register),
            flags: Flags::default(),
        }
    }

    /// Number of general-purpose registers.
    pub fn count(&self) -> usize {
        self.gpr.len()
    }

    /// Checks that `idx` names an existing register.
    ///
    /// # Errors
    ///
    /// `InvalidRegister` if the index is out of range.
    pub fn check(&self, idx: usize) -> SimResult<()> {
        self.gpr.check(idx)
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Errors
    ///
    /// `InvalidRegister` if the index is out of range.
    pub fn read(&self, idx: usize) -> SimResult<u32> {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Errors
    ///
    /// `InvalidRegister` if the index is out of range.
    pub fn write(&mut self, idx: usize, val: u32) -> SimResult<()> {
        self.gpr.write(idx, val)
    }

    /// Returns a copy of every general-purpose register value.
    pub fn values(&self) -> Vec<u32> {
        self.gpr.values()
    }
}

impl fmt::Display for RegisterFile {
    /// Eight registers per line followed by the flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.gpr.values().iter().enumerate() {
            if i > 0 {
                if i % 8 == 0 {
                    writeln!(f)?;
                } else {
                    write!(f, " ")?;
                }
            }
            write!(f, "r{i:<2}={val:#010x}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.flags)
    }
}
