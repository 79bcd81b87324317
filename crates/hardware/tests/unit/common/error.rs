//! # Error Taxonomy Tests
//!
//! Display text and JSON shape of every `SimError` variant.

use isasim_core::common::SimError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(SimError::OutOfBounds { addr: 0x100 }, "memory access out of bounds at 0x100")]
#[case(SimError::InvalidRegister { index: 8 }, "invalid register index r8")]
#[case(SimError::InvalidAddressingMode { mode: 7 }, "invalid addressing mode 0x7")]
#[case(SimError::DivisionByZero, "division by zero")]
#[case(SimError::UnknownOpcode { opcode: 0x12 }, "unknown opcode 0x12")]
#[case(
    SimError::NotReady,
    "cpu has already started executing; images can only be loaded before the first cycle"
)]
#[case(
    SimError::ProgramTooLarge { start: 2, len: 5, capacity: 4 },
    "program of 5 words at 0x2 exceeds memory capacity of 4 words"
)]
fn test_display(#[case] err: SimError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_serializes_with_kind_tag() {
    let json = serde_json::to_value(SimError::OutOfBounds { addr: 300 }).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "OutOfBounds", "addr": 300 }));

    let json = serde_json::to_value(SimError::DivisionByZero).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "DivisionByZero" }));
}

#[test]
fn test_errors_compare_by_value() {
    assert_eq!(
        SimError::InvalidRegister { index: 3 },
        SimError::InvalidRegister { index: 3 }
    );
    assert_ne!(
        SimError::InvalidRegister { index: 3 },
        SimError::InvalidRegister { index: 4 }
    );
}
