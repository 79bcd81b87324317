//! Operand resolution tests.
//!
//! `Cpu::resolve` is exercised directly, without executing an instruction.

use isasim_core::common::SimError;
use isasim_core::isa::mode::AddressingMode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

/// r1 = 40, r2 = 250, memory[40] = 111, memory[45] = 222, memory[7] = 333.
fn fixture() -> TestContext {
    let mut ctx = TestContext::new()
        .with_data(40, &[111])
        .with_data(45, &[222])
        .with_data(7, &[333])
        .load_program(0, &[load_imm(1, 40), load_imm(2, 250)]);
    let _ = ctx.step_n(2);
    ctx
}

#[rstest]
#[case(IMM, 1, 7, 7)]
#[case(REG, 1, 7, 40)]
#[case(IND, 1, 7, 111)]
#[case(MEM, 1, 7, 333)]
#[case(OFF, 1, 5, 222)]
fn test_modes(
    #[case] mode: AddressingMode,
    #[case] reg: u8,
    #[case] imm: u16,
    #[case] expected: u32,
) {
    let ctx = fixture();
    assert_eq!(ctx.cpu().resolve(mode, reg, imm), Ok(expected));
}

#[test]
fn test_immediate_is_not_sign_extended() {
    let ctx = fixture();
    assert_eq!(ctx.cpu().resolve(IMM, 0, 0x7FF), Ok(0x7FF));
}

#[test]
fn test_register_checked_even_for_immediate() {
    let ctx = fixture();
    assert_eq!(
        ctx.cpu().resolve(IMM, 12, 1),
        Err(SimError::InvalidRegister { index: 12 })
    );
}

#[rstest]
#[case(MEM, 0, 256, 256)]
#[case(OFF, 2, 6, 256)]
#[case(OFF, 2, 0x7FF, 250 + 0x7FF)]
fn test_out_of_bounds(
    #[case] mode: AddressingMode,
    #[case] reg: u8,
    #[case] imm: u16,
    #[case] addr: u64,
) {
    let ctx = fixture();
    assert_eq!(
        ctx.cpu().resolve(mode, reg, imm),
        Err(SimError::OutOfBounds { addr })
    );
}

#[test]
fn test_indirect_through_out_of_range_pointer() {
    let mut ctx = TestContext::new().load_program(0, &[load_imm(4, 0x7FF)]);
    let _ = ctx.step_n(1);
    assert_eq!(
        ctx.cpu().resolve(IND, 4, 0),
        Err(SimError::OutOfBounds { addr: 0x7FF })
    );
}

#[test]
fn test_base_plus_offset_does_not_wrap() {
    let mut ctx = TestContext::new()
        .with_data(200, &[u32::MAX])
        .load_program(0, &[load(3, 0, MEM, 200)]);
    let _ = ctx.step_n(1);
    assert_eq!(
        ctx.cpu().resolve(OFF, 3, 2),
        Err(SimError::OutOfBounds {
            addr: u64::from(u32::MAX) + 2
        })
    );
}

#[test]
fn test_resolution_reads_only() {
    let ctx = fixture();
    let before = ctx.sim.snapshot();
    let _ = ctx.cpu().resolve(OFF, 1, 5);
    let _ = ctx.cpu().resolve(MEM, 0, 999);
    assert_eq!(ctx.sim.snapshot(), before);
}
