//! ALU arithmetic operations.
//!
//! Addition and subtraction accumulate in 64 bits so the unsigned carry (or
//! borrow) falls out of bit 32. Signed overflow uses the sign-bit XOR test.
//! Multiplication keeps the low word of the 64-bit product and reports
//! whether the high word was non-zero through overflow only. Division is unsigned.

use super::{AluOp, AluOutput};
use crate::common::{SimError, SimResult};
use crate::core::arch::flags::SIGN_BIT;

/// Largest value representable in a 32-bit word, widened.
const WORD_MAX: u64 = u32::MAX as u64;

/// Executes an arithmetic operation.
///
/// # Errors
///
/// `DivisionByZero` for `Div` with `b == 0`.
pub fn execute(op: AluOp, a: u32, b: u32) -> SimResult<AluOutput> {
    match op {
        AluOp::Add => Ok(add(a, b)),
        AluOp::Sub => Ok(sub(a, b)),
        AluOp::Inc => Ok(add(a, 1)),
        AluOp::Dec => Ok(sub(a, 1)),
        AluOp::Mul => Ok(mul(a, b)),
        AluOp::Div => div(a, b),
        _ => Ok(AluOutput::plain(0)),
    }
}

/// `a + b` with carry and signed overflow.
pub fn add(a: u32, b: u32) -> AluOutput {
    let wide = u64::from(a) + u64::from(b);
    let value = wide as u32;
    AluOutput {
        value,
        carry: Some(wide > WORD_MAX),
        // Operands share a sign that the result does not.
        overflow: Some((a ^ value) & (b ^ value) & SIGN_BIT != 0),
    }
}

/// `a - b` with borrow and signed overflow.
pub fn sub(a: u32, b: u32) -> AluOutput {
    let wide = u64::from(a).wrapping_sub(u64::from(b));
    let value = wide as u32;
    AluOutput {
        value,
        // Borrow propagates into the upper half.
        carry: Some(wide > WORD_MAX),
        // Operands differ in sign and the result's sign differs from `a`.
        overflow: Some((a ^ b) & (a ^ value) & SIGN_BIT != 0),
    }
}

/// Low word of `a * b`; overflow reports a non-zero high word. Carry is untouched.
pub fn mul(a: u32, b: u32) -> AluOutput {
    let wide = u64::from(a) * u64::from(b);
    AluOutput {
        value: wide as u32,
        carry: None,
        overflow: Some(wide > WORD_MAX),
    }
}

/// Unsigned `a / b`.
///
/// # Errors
///
/// `DivisionByZero` if `b == 0`.
pub fn div(a: u32, b: u32) -> SimResult<AluOutput> {
    a.checked_div(b)
        .map(AluOutput::plain)
        .ok_or(SimError::DivisionByZero)
}
