//! Instruction Set Architecture.
//!
//! This module defines the simulated processor's instruction set. It includes:
//! 1. **Layout:** The fixed 32-bit field layout and the decoded `Instruction`.
//! 2. **Opcodes:** The eighteen operations and their encodings.
//! 3. **Addressing Modes:** The five operand-resolution policies.
//! 4. **Decode and Disassembly:** Total decoding and mnemonic rendering.

/// Instruction decoder.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction layout, field extraction and encoding.
pub mod instruction;

/// Addressing modes.
pub mod mode;

/// Opcode assignments.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits};
pub use mode::AddressingMode;
pub use opcodes::Opcode;
