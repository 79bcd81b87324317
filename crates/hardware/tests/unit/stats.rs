//! # Statistics Tests
//!
//! Retirement counters, instruction mix and the printed report.

use isasim_core::isa::opcodes::{InstClass, Opcode};
use isasim_core::stats::SimStats;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn test_default_is_zeroed() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert_eq!(
        stats.inst_load + stats.inst_store + stats.inst_jump + stats.inst_alu + stats.inst_system,
        0
    );
}

#[test]
fn test_retire_counts_by_class() {
    let mut stats = SimStats::default();
    stats.retire(InstClass::Load);
    stats.retire(InstClass::Load);
    stats.retire(InstClass::Alu);
    stats.retire(InstClass::System);
    assert_eq!(stats.instructions_retired, 4);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.inst_store, 0);
    assert_eq!(stats.inst_jump, 0);
}

#[test]
fn test_opcode_classes() {
    assert_eq!(Opcode::Load.class(), InstClass::Load);
    assert_eq!(Opcode::Store.class(), InstClass::Store);
    assert_eq!(Opcode::Jump.class(), InstClass::Jump);
    assert_eq!(Opcode::Halt.class(), InstClass::System);
    for op in &Opcode::ALL[4..] {
        assert_eq!(op.class(), InstClass::Alu, "{op:?}");
    }
}

#[test]
fn test_run_populates_mix() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            load_imm(0, 3),
            load_imm(1, 4),
            alu_rr(Opcode::Add, 2, 0, 1),
            store(0, 2, IMM, 100),
            jump(5),
            halt(),
        ],
    );
    let _ = ctx.run_expect_halt();

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.cycles, 6);
    assert_eq!(stats.instructions_retired, 6);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_system, 1);
}

#[test]
fn test_faulting_cycle_counts_but_does_not_retire() {
    let mut ctx = TestContext::new().load_program(0, &[raw(0x1F, 0, 0, 0, 0, 0)]);
    let _ = ctx.run_expect_fault();
    assert_eq!(ctx.cpu().stats.cycles, 1);
    assert_eq!(ctx.cpu().stats.instructions_retired, 0);
}

#[test]
fn test_report_mentions_counters() {
    let mut stats = SimStats::default();
    stats.cycles = 7;
    stats.retire(InstClass::Jump);
    let report = stats.to_string();
    assert!(report.contains("Simulation statistics"));
    assert!(report.contains("cycles"));
    assert!(report.contains("jump"));
    assert!(report.contains("100.0%"));
}
