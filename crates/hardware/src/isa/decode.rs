//! Instruction Decoder.
//!
//! Splits a 32-bit word into its six fixed fields. Decoding is total: every
//! word yields some `Instruction`, and validity is judged by the execution unit.

use crate::isa::instruction::{Instruction, InstructionBits};

/// Decodes a raw instruction word.
///
/// # Examples
///
/// ```
/// use isasim_core::isa::decode::decode;
///
/// // ADD r2, r0, r1 in register-direct mode.
/// let inst = decode(0x2100_8800);
/// assert_eq!(inst.opcode, 0x04);
/// assert_eq!(inst.dest, 2);
/// assert_eq!(inst.src1, 0);
/// assert_eq!(inst.src2, 1);
/// assert_eq!(inst.mode, 1);
/// assert_eq!(inst.imm, 0);
/// ```
#[inline]
pub fn decode(word: u32) -> Instruction {
    Instruction {
        opcode: word.opcode(),
        dest: word.dest(),
        src1: word.src1(),
        src2: word.src2(),
        mode: word.mode(),
        imm: word.imm(),
    }
}
