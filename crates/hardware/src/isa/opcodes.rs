//! Opcode assignments.
//!
//! The 5-bit opcode field selects one of eighteen operations. Values
//! `0x12..=0x1F` are unassigned and fault with `UnknownOpcode` at execution.

use serde::Serialize;

use crate::common::SimError;

/// Load a register from a resolved operand.
pub const OP_LOAD: u8 = 0x00;
/// Store a register to a resolved address.
pub const OP_STORE: u8 = 0x01;
/// Unconditional jump.
pub const OP_JUMP: u8 = 0x02;
/// Stop the processor.
pub const OP_HALT: u8 = 0x03;
/// Addition.
pub const OP_ADD: u8 = 0x04;
/// Subtraction.
pub const OP_SUB: u8 = 0x05;
/// Unsigned multiplication (low 32 bits kept).
pub const OP_MUL: u8 = 0x06;
/// Unsigned division.
pub const OP_DIV: u8 = 0x07;
/// Increment.
pub const OP_INC: u8 = 0x08;
/// Decrement.
pub const OP_DEC: u8 = 0x09;
/// Bitwise AND.
pub const OP_AND: u8 = 0x0A;
/// Bitwise OR.
pub const OP_OR: u8 = 0x0B;
/// Bitwise exclusive OR.
pub const OP_XOR: u8 = 0x0C;
/// Bitwise complement.
pub const OP_NOT: u8 = 0x0D;
/// Logical shift left.
pub const OP_SHL: u8 = 0x0E;
/// Logical shift right.
pub const OP_SHR: u8 = 0x0F;
/// Rotate left.
pub const OP_ROL: u8 = 0x10;
/// Rotate right.
pub const OP_ROR: u8 = 0x11;

/// Operation selected by an instruction's opcode field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Opcode {
    /// `dest ← operand(src1)`.
    Load = OP_LOAD,
    /// `memory[operand(dest)] ← src1`.
    Store = OP_STORE,
    /// `pc ← imm` or `pc ← operand(src1)`.
    Jump = OP_JUMP,
    /// Stop execution.
    Halt = OP_HALT,
    /// `dest ← a + b`.
    Add = OP_ADD,
    /// `dest ← a - b`.
    Sub = OP_SUB,
    /// `dest ← low32(a * b)`.
    Mul = OP_MUL,
    /// `dest ← a / b`.
    Div = OP_DIV,
    /// `dest ← a + 1`.
    Inc = OP_INC,
    /// `dest ← a - 1`.
    Dec = OP_DEC,
    /// `dest ← a & b`.
    And = OP_AND,
    /// `dest ← a | b`.
    Or = OP_OR,
    /// `dest ← a ^ b`.
    Xor = OP_XOR,
    /// `dest ← !a`.
    Not = OP_NOT,
    /// `dest ← a << (b & 31)`.
    Shl = OP_SHL,
    /// `dest ← a >> (b & 31)`.
    Shr = OP_SHR,
    /// `dest ← a.rotate_left(b & 31)`.
    Rol = OP_ROL,
    /// `dest ← a.rotate_right(b & 31)`.
    Ror = OP_ROR,
}

/// Coarse instruction classes used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum InstClass {
    /// LOAD.
    Load,
    /// STORE.
    Store,
    /// JUMP.
    Jump,
    /// Arithmetic, logic, shift and rotate.
    Alu,
    /// HALT.
    System,
}

impl Opcode {
    /// Every defined opcode in encoding order.
    pub const ALL: [Opcode; 18] = [
        Opcode::Load,
        Opcode::Store,
        Opcode::Jump,
        Opcode::Halt,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Inc,
        Opcode::Dec,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Not,
        Opcode::Shl,
        Opcode::Shr,
        Opcode::Rol,
        Opcode::Ror,
    ];

    /// Lower-case assembler mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Load => "load",
            Opcode::Store => "store",
            Opcode::Jump => "jump",
            Opcode::Halt => "halt",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::Inc => "inc",
            Opcode::Dec => "dec",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::Not => "not",
            Opcode::Shl => "shl",
            Opcode::Shr => "shr",
            Opcode::Rol => "rol",
            Opcode::Ror => "ror",
        }
    }

    /// Statistics class of this opcode.
    pub fn class(self) -> InstClass {
        match self {
            Opcode::Load => InstClass::Load,
            Opcode::Store => InstClass::Store,
            Opcode::Jump => InstClass::Jump,
            Opcode::Halt => InstClass::System,
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Inc
            | Opcode::Dec
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Not
            | Opcode::Shl
            | Opcode::Shr
            | Opcode::Rol
            | Opcode::Ror => InstClass::Alu,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = SimError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Opcode::ALL
            .get(raw as usize)
            .copied()
            .ok_or(SimError::UnknownOpcode { opcode: raw })
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op as u8
    }
}
