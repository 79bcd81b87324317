//! ALU Logic Operation Tests.

use isasim_core::core::units::alu::{Alu, AluOp};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::And, 0xF0F0_F0F0, 0xFF00_FF00, 0xF000_F000)]
#[case(AluOp::Or, 0xF0F0_F0F0, 0x0F0F_0000, 0xFFFF_F0F0)]
#[case(AluOp::Xor, 0xAAAA_AAAA, 0xFFFF_FFFF, 0x5555_5555)]
#[case(AluOp::Not, 0x0000_FFFF, 0, 0xFFFF_0000)]
#[case(AluOp::Not, 0, 0, u32::MAX)]
fn test_logic_vectors(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b).unwrap().value, expected);
}

#[rstest]
#[case(AluOp::And)]
#[case(AluOp::Or)]
#[case(AluOp::Xor)]
#[case(AluOp::Not)]
fn test_logic_leaves_carry_overflow(#[case] op: AluOp) {
    let out = Alu::execute(op, 0xFFFF_FFFF, 0xFFFF_FFFF).unwrap();
    assert_eq!(out.carry, None);
    assert_eq!(out.overflow, None);
}

proptest! {
    #[test]
    fn prop_xor_self_is_zero(a in any::<u32>()) {
        prop_assert_eq!(Alu::execute(AluOp::Xor, a, a).unwrap().value, 0);
    }

    #[test]
    fn prop_not_is_involution(a in any::<u32>()) {
        let once = Alu::execute(AluOp::Not, a, 0).unwrap().value;
        prop_assert_eq!(Alu::execute(AluOp::Not, once, 0).unwrap().value, a);
    }
}
