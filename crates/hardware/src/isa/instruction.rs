//! Instruction encoding and decoding utilities.
//!
//! Provides the fixed 32-bit layout, bit extraction helpers and the decoded
//! `Instruction` view. Layout, MSB to LSB:
//!
//! ```text
//!  31    27 26  23 22  19 18  15 14  11 10         0
//! +--------+------+------+------+------+------------+
//! | opcode | dest | src1 | src2 | mode |    imm     |
//! +--------+------+------+------+------+------------+
//! ```

use serde::Serialize;

use crate::common::SimResult;
use crate::isa::mode::AddressingMode;
use crate::isa::opcodes::Opcode;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 27;
/// Bit mask for the opcode field (5 bits).
pub const OPCODE_MASK: u32 = 0x1F;
/// Bit position of the destination register field.
pub const DEST_SHIFT: u32 = 23;
/// Bit position of the first source register field.
pub const SRC1_SHIFT: u32 = 19;
/// Bit position of the second source register field.
pub const SRC2_SHIFT: u32 = 15;
/// Bit mask for a register field (4 bits).
pub const REG_MASK: u32 = 0xF;
/// Bit position of the addressing mode field.
pub const MODE_SHIFT: u32 = 11;
/// Bit mask for the addressing mode field (4 bits).
pub const MODE_MASK: u32 = 0xF;
/// Bit mask for the immediate field (11 bits, zero-extended).
pub const IMM_MASK: u32 = 0x7FF;

/// Trait for extracting instruction fields from encoded words.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 27-31).
    fn opcode(&self) -> u8;

    /// Extracts the destination register field (bits 23-26).
    fn dest(&self) -> u8;

    /// Extracts the first source register field (bits 19-22).
    fn src1(&self) -> u8;

    /// Extracts the second source register field (bits 15-18).
    fn src2(&self) -> u8;

    /// Extracts the addressing mode field (bits 11-14).
    fn mode(&self) -> u8;

    /// Extracts the immediate field (bits 0-10), zero-extended.
    fn imm(&self) -> u16;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn dest(&self) -> u8 {
        ((self >> DEST_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn src1(&self) -> u8 {
        ((self >> SRC1_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn src2(&self) -> u8 {
        ((self >> SRC2_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn mode(&self) -> u8 {
        ((self >> MODE_SHIFT) & MODE_MASK) as u8
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }
}

/// A decoded instruction word.
///
/// Fields hold raw values; whether `opcode` and `mode` name a defined
/// operation or addressing mode is judged at execution time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Instruction {
    /// Operation selector (5 bits).
    pub opcode: u8,
    /// Destination register index (4 bits).
    pub dest: u8,
    /// First source register index (4 bits).
    pub src1: u8,
    /// Second source register index (4 bits).
    pub src2: u8,
    /// Addressing mode selector (4 bits).
    pub mode: u8,
    /// Immediate or offset (11 bits, zero-extended).
    pub imm: u16,
}

impl Instruction {
    /// Builds an instruction from typed fields.
    ///
    /// Register indices and the immediate are masked to their field widths.
    pub fn new(
        opcode: Opcode,
        dest: u8,
        src1: u8,
        src2: u8,
        mode: AddressingMode,
        imm: u16,
    ) -> Self {
        Self {
            opcode: opcode.into(),
            dest: dest & REG_MASK as u8,
            src1: src1 & REG_MASK as u8,
            src2: src2 & REG_MASK as u8,
            mode: mode.into(),
            imm: imm & IMM_MASK as u16,
        }
    }

    /// Packs the fields back into a 32-bit word, masking each to its width.
    pub fn encode(&self) -> u32 {
        (u32::from(self.opcode) & OPCODE_MASK) << OPCODE_SHIFT
            | (u32::from(self.dest) & REG_MASK) << DEST_SHIFT
            | (u32::from(self.src1) & REG_MASK) << SRC1_SHIFT
            | (u32::from(self.src2) & REG_MASK) << SRC2_SHIFT
            | (u32::from(self.mode) & MODE_MASK) << MODE_SHIFT
            | (u32::from(self.imm) & IMM_MASK)
    }

    /// The operation named by the opcode field.
    ///
    /// # Errors
    ///
    /// `UnknownOpcode` for unassigned values.
    pub fn operation(&self) -> SimResult<Opcode> {
        Opcode::try_from(self.opcode)
    }

    /// The addressing mode named by the mode field.
    ///
    /// # Errors
    ///
    /// `InvalidAddressingMode` for values above `4`.
    pub fn addressing_mode(&self) -> SimResult<AddressingMode> {
        AddressingMode::try_from(self.mode)
    }
}
