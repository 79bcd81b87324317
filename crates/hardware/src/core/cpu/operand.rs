//! Operand Resolution.
//!
//! Maps a (mode, register, immediate) triple to a concrete 32-bit value.
//! Resolution only reads state. Memory-indirect addresses are summed in
//! 64 bits, so `base + offset` past `u32::MAX` is reported as out of bounds
//! instead of wrapping back into memory.

use super::Cpu;
use crate::common::SimResult;
use crate::isa::mode::AddressingMode;

impl Cpu {
    /// Resolves one operand.
    ///
    /// # Arguments
    ///
    /// * `mode` - Addressing mode of the instruction.
    /// * `reg` - Register field naming the base or source register.
    /// * `imm` - Zero-extended immediate field.
    ///
    /// # Errors
    ///
    /// `InvalidRegister` if `reg` is outside the register file, `OutOfBounds`
    /// if the resolved address is outside memory.
    pub fn resolve(&self, mode: AddressingMode, reg: u8, imm: u16) -> SimResult<u32> {
        let reg = usize::from(reg);
        self.regs.check(reg)?;
        let imm = u64::from(imm);
        match mode {
            AddressingMode::Immediate => Ok(imm as u32),
            AddressingMode::RegisterDirect => self.regs.read(reg),
            AddressingMode::RegisterIndirect => {
                let addr = self.regs.read(reg)?;
                self.memory.read(u64::from(addr))
            }
            AddressingMode::MemoryDirect => self.memory.read(imm),
            AddressingMode::MemoryIndirect => {
                let base = self.regs.read(reg)?;
                self.memory.read(u64::from(base) + imm)
            }
        }
    }
}
