//! Simulation error definitions.
//!
//! This module defines the closed set of conditions that stop a simulation run:
//! 1. **Execution Faults:** Memory bounds, register indices, addressing modes, division, opcodes.
//! 2. **Load Failures:** A program image that does not fit in memory, or a load after start.
//!
//! Every execution-time error is fatal to the run. The CPU records it together
//! with the faulting program counter and never retries.

use serde::Serialize;
use thiserror::Error;

/// Errors raised by the memory, register file, decoder and execution unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind")]
pub enum SimError {
    /// A memory or program-counter access at or beyond the memory capacity.
    ///
    /// The address is kept as 64 bits so that `base + offset` sums that would
    /// overflow 32 bits are reported verbatim.
    #[error("memory access out of bounds at {addr:#x}")]
    OutOfBounds {
        /// The offending word address.
        addr: u64,
    },

    /// A register field that names a register the file does not have.
    #[error("invalid register index r{index}")]
    InvalidRegister {
        /// The offending register index.
        index: usize,
    },

    /// A mode field outside the five defined addressing modes.
    #[error("invalid addressing mode {mode:#x}")]
    InvalidAddressingMode {
        /// The raw 4-bit mode field.
        mode: u8,
    },

    /// DIV with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// An opcode field with no assigned operation.
    #[error("unknown opcode {opcode:#04x}")]
    UnknownOpcode {
        /// The raw 5-bit opcode field.
        opcode: u8,
    },

    /// A program or data load after execution has started.
    ///
    /// Loads are accepted only while the CPU is `Ready`.
    #[error("cpu has already started executing; images can only be loaded before the first cycle")]
    NotReady,

    /// A program image that does not fit at the requested start address.
    ///
    /// Raised at load time only, before any state is touched.
    #[error("program of {len} words at {start:#x} exceeds memory capacity of {capacity} words")]
    ProgramTooLarge {
        /// Requested start address.
        start: u32,
        /// Number of words in the image.
        len: usize,
        /// Memory capacity in words.
        capacity: usize,
    },
}

/// Result alias used by every fallible core operation.
pub type SimResult<T> = Result<T, SimError>;
