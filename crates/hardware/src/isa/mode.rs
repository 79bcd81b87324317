//! Addressing modes.
//!
//! A single 4-bit mode field per instruction governs every operand fetch of
//! that instruction. Values above `4` fault with `InvalidAddressingMode`.

use serde::Serialize;

use crate::common::SimError;

/// How a (register, immediate) pair becomes an operand value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum AddressingMode {
    /// The zero-extended 11-bit immediate itself.
    Immediate = 0x0,
    /// The register's value.
    RegisterDirect = 0x1,
    /// The word at the address held in the register.
    RegisterIndirect = 0x2,
    /// The word at the address given by the immediate.
    MemoryDirect = 0x3,
    /// The word at register value plus immediate (base + offset).
    MemoryIndirect = 0x4,
}

impl AddressingMode {
    /// Every defined mode in encoding order.
    pub const ALL: [AddressingMode; 5] = [
        AddressingMode::Immediate,
        AddressingMode::RegisterDirect,
        AddressingMode::RegisterIndirect,
        AddressingMode::MemoryDirect,
        AddressingMode::MemoryIndirect,
    ];
}

impl TryFrom<u8> for AddressingMode {
    type Error = SimError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        AddressingMode::ALL
            .get(raw as usize)
            .copied()
            .ok_or(SimError::InvalidAddressingMode { mode: raw })
    }
}

impl From<AddressingMode> for u8 {
    fn from(mode: AddressingMode) -> Self {
        mode as u8
    }
}
