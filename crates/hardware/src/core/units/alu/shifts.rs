//! ALU shift and rotate operations.
//!
//! Implements logical shift left (SHL), logical shift right (SHR), rotate
//! left (ROL) and rotate right (ROR). The amount is always masked to 5 bits,
//! so shifting by `k` and by `k + 32` gives the same result.

use super::{AluOp, AluOutput};

/// Bit mask for shift and rotate amounts (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1F;

/// Executes a shift or rotate of `a` by `b & 31`.
pub fn execute(op: AluOp, a: u32, b: u32) -> AluOutput {
    let sh = b & SHAMT_MASK;
    let value = match op {
        AluOp::Shl => a << sh,
        AluOp::Shr => a >> sh,
        AluOp::Rol => a.rotate_left(sh),
        AluOp::Ror => a.rotate_right(sh),
        _ => 0,
    };
    AluOutput::plain(value)
}
