//! ALU bitwise logical operations.
//!
//! None of these define carry or overflow.

use super::{AluOp, AluOutput};

/// Executes a bitwise logical operation. `Not` ignores `b`.
pub fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
    let value = match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => 0,
    };
    AluOutput::plain(value)
}
