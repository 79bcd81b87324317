//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execution unit.
//! Every operation works on 32-bit operands and reports, alongside the
//! result, which of carry and overflow it defines.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shl, Shr, Rol, Ror

/// Integer arithmetic operations (add, subtract, multiply, divide, inc, dec).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor, not).
pub mod logic;

/// Shift and rotate operations (shl, shr, rol, ror).
pub mod shifts;

use crate::common::SimResult;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication (low 32 bits).
    Mul,
    /// Unsigned division.
    Div,
    /// Increment.
    Inc,
    /// Decrement.
    Dec,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOT.
    Not,
    /// Logical shift left.
    Shl,
    /// Logical shift right.
    Shr,
    /// Rotate left.
    Rol,
    /// Rotate right.
    Ror,
}

impl AluOp {
    /// Returns `true` for operations with a single source operand.
    pub fn is_unary(self) -> bool {
        matches!(self, AluOp::Inc | AluOp::Dec | AluOp::Not)
    }
}

/// Result of an ALU operation.
///
/// `carry` and `overflow` are `None` when the operation leaves the
/// corresponding flag untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// The 32-bit result.
    pub value: u32,
    /// New carry flag, if defined by the operation.
    pub carry: Option<bool>,
    /// New overflow flag, if defined by the operation.
    pub overflow: Option<bool>,
}

impl AluOutput {
    /// A result that defines neither carry nor overflow.
    #[inline]
    pub fn plain(value: u32) -> Self {
        Self {
            value,
            carry: None,
            overflow: None,
        }
    }
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Unary operations (`Inc`, `Dec`, `Not`) ignore `b`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for `Div` with `b == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use isasim_core::core::units::alu::{Alu, AluOp};
    ///
    /// let out = Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1).unwrap();
    /// assert_eq!(out.value, 0);
    /// assert_eq!(out.carry, Some(true));
    /// assert_eq!(out.overflow, Some(false));
    ///
    /// // Shift amounts are taken modulo 32.
    /// let out = Alu::execute(AluOp::Shl, 1, 33).unwrap();
    /// assert_eq!(out.value, 2);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> SimResult<AluOutput> {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div | AluOp::Inc | AluOp::Dec => {
                arithmetic::execute(op, a, b)
            }
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => Ok(logic::execute(op, a, b)),
            AluOp::Shl | AluOp::Shr | AluOp::Rol | AluOp::Ror => Ok(shifts::execute(op, a, b)),
        }
    }
}
