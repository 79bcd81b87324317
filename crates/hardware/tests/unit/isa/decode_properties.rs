//! Instruction Decode Properties.
//!
//! Verifies that `decode()` extracts each of the six fields from its bit
//! range, that decoding is total, and that the opcode and mode tables
//! accept exactly the defined values.

use isasim_core::common::SimError;
use isasim_core::isa::decode::decode;
use isasim_core::isa::instruction::{Instruction, InstructionBits};
use isasim_core::isa::mode::AddressingMode;
use isasim_core::isa::opcodes::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::*;

#[test]
fn test_field_positions() {
    // opcode 0x11, dest 0xF, src1 0xA, src2 0x5, mode 0x4, imm 0x7FF
    let word = 0x11 << 27 | 0xF << 23 | 0xA << 19 | 0x5 << 15 | 0x4 << 11 | 0x7FF;
    let inst = decode(word);
    assert_eq!(inst.opcode, 0x11);
    assert_eq!(inst.dest, 0xF);
    assert_eq!(inst.src1, 0xA);
    assert_eq!(inst.src2, 0x5);
    assert_eq!(inst.mode, 0x4);
    assert_eq!(inst.imm, 0x7FF);
}

#[test]
fn test_zero_word_is_load_immediate_zero() {
    let inst = decode(0);
    assert_eq!(inst, Instruction::default());
    assert_eq!(inst.operation(), Ok(Opcode::Load));
    assert_eq!(inst.addressing_mode(), Ok(AddressingMode::Immediate));
}

#[test]
fn test_add_register_direct_encoding() {
    assert_eq!(alu_rr(Opcode::Add, 2, 0, 1), 0x2100_8800);
}

#[test]
fn test_immediate_is_zero_extended() {
    let inst = decode(load_imm(0, 0x7FF));
    assert_eq!(inst.imm, 0x7FF);
    assert_eq!(u32::from(inst.imm), 2047);
}

#[test]
fn test_builder_masks_fields() {
    let word = InstructionBuilder::new(Opcode::Or)
        .dest(0x1F)
        .src1(0x13)
        .imm(0xFFFF)
        .build();
    let inst = decode(word);
    assert_eq!(inst.dest, 0xF);
    assert_eq!(inst.src1, 0x3);
    assert_eq!(inst.imm, 0x7FF);
}

#[test]
fn test_opcode_table() {
    for (raw, op) in Opcode::ALL.iter().enumerate() {
        assert_eq!(Opcode::try_from(raw as u8), Ok(*op));
        assert_eq!(u8::from(*op), raw as u8);
    }
    assert_eq!(u8::from(Opcode::Ror), OP_ROR);
    assert_eq!(Opcode::Halt.mnemonic(), "halt");
}

#[rstest]
#[case(0x12)]
#[case(0x18)]
#[case(0x1F)]
fn test_unassigned_opcodes(#[case] raw: u8) {
    assert_eq!(
        Opcode::try_from(raw),
        Err(SimError::UnknownOpcode { opcode: raw })
    );
}

#[rstest]
#[case(5)]
#[case(9)]
#[case(15)]
fn test_invalid_modes(#[case] raw: u8) {
    assert_eq!(
        AddressingMode::try_from(raw),
        Err(SimError::InvalidAddressingMode { mode: raw })
    );
}

proptest! {
    #[test]
    fn prop_decode_encode_identity(word in any::<u32>()) {
        prop_assert_eq!(decode(word).encode(), word);
    }

    #[test]
    fn prop_trait_matches_decode(word in any::<u32>()) {
        let inst = decode(word);
        prop_assert_eq!(word.opcode(), inst.opcode);
        prop_assert_eq!(word.dest(), inst.dest);
        prop_assert_eq!(word.src1(), inst.src1);
        prop_assert_eq!(word.src2(), inst.src2);
        prop_assert_eq!(word.mode(), inst.mode);
        prop_assert_eq!(word.imm(), inst.imm);
    }

    #[test]
    fn prop_field_ranges(word in any::<u32>()) {
        let inst = decode(word);
        prop_assert!(inst.opcode < 32);
        prop_assert!(inst.dest < 16 && inst.src1 < 16 && inst.src2 < 16);
        prop_assert!(inst.mode < 16);
        prop_assert!(inst.imm < 2048);
    }
}
