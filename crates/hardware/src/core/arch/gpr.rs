//! General-Purpose Register File.
//!
//! This module implements the general-purpose register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains a configurable number of 32-bit registers (`r0`-`rN`).
//! 2. **Bounds Checking:** Rejects indices outside the file with `InvalidRegister`.
//! 3. **Zero Register Policy:** Optionally hard-wires `r0` to zero.

use crate::common::{SimError, SimResult};

/// General-Purpose Register file.
///
/// Holds `count` registers, all zero on creation. When `zero_register` is set,
/// register `r0` reads as zero and writes to it are discarded.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: Vec<u32>,
    zero_register: bool,
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of registers.
    /// * `zero_register` - Whether `r0` is hard-wired to zero.
    pub fn new(count: usize, zero_register: bool) -> Self {
        Self {
            regs: vec![0; count],
            zero_register,
        }
    }

    /// Number of registers in the file.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns `true` if the file has no registers.
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Checks that `idx` names a register of this file.
    ///
    /// # Errors
    ///
    /// `InvalidRegister` if `idx >= len()`.
    #[inline]
    pub fn check(&self, idx: usize) -> SimResult<()> {
        if idx < self.regs.len() {
            Ok(())
        } else {
            Err(SimError::InvalidRegister { index: idx })
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Errors
    ///
    /// `InvalidRegister` if `idx >= len()`.
    #[inline]
    pub fn read(&self, idx: usize) -> SimResult<u32> {
        self.check(idx)?;
        if self.zero_register && idx == 0 {
            Ok(0)
        } else {
            Ok(self.regs[idx])
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Errors
    ///
    /// `InvalidRegister` if `idx >= len()`.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) -> SimResult<()> {
        self.check(idx)?;
        if !(self.zero_register && idx == 0) {
            self.regs[idx] = val;
        }
        Ok(())
    }

    /// Returns a copy of every register value in index order.
    ///
    /// Writes to a hard-wired `r0` never land, so the stored slot is already zero.
    pub fn values(&self) -> Vec<u32> {
        self.regs.clone()
    }
}
