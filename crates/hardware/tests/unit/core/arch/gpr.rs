//! General-Purpose Register tests.

use isasim_core::common::SimError;
use isasim_core::core::arch::Gpr;
use pretty_assertions::assert_eq;

#[test]
fn test_gpr_initial_state() {
    let gpr = Gpr::new(8, false);
    assert_eq!(gpr.len(), 8);
    assert!(!gpr.is_empty());
    for i in 0..8 {
        assert_eq!(gpr.read(i).unwrap(), 0);
    }
}

#[test]
fn test_gpr_write_read() {
    let mut gpr = Gpr::new(8, false);
    gpr.write(0, 0x1234_5678).unwrap();
    gpr.write(7, u32::MAX).unwrap();
    assert_eq!(gpr.read(0).unwrap(), 0x1234_5678);
    assert_eq!(gpr.read(7).unwrap(), u32::MAX);
    assert_eq!(gpr.values()[7], u32::MAX);
}

#[test]
fn test_gpr_r0_is_ordinary_by_default() {
    let mut gpr = Gpr::new(4, false);
    gpr.write(0, 5).unwrap();
    assert_eq!(gpr.read(0).unwrap(), 5);
}

#[test]
fn test_gpr_zero_register() {
    let mut gpr = Gpr::new(4, true);
    gpr.write(0, 0xFFFF_FFFF).unwrap();
    assert_eq!(gpr.read(0).unwrap(), 0);
}

#[test]
fn test_gpr_out_of_range() {
    let mut gpr = Gpr::new(8, false);
    assert_eq!(gpr.check(8), Err(SimError::InvalidRegister { index: 8 }));
    assert_eq!(gpr.read(15), Err(SimError::InvalidRegister { index: 15 }));
    assert_eq!(gpr.write(8, 1), Err(SimError::InvalidRegister { index: 8 }));
    assert_eq!(gpr.values(), vec![0; 8]);
}
