//! Instruction Execution.
//!
//! Dispatches a decoded instruction on its opcode. Checks run in a fixed
//! order before anything is modified:
//! 1. **Opcode:** unassigned values fault with `UnknownOpcode`.
//! 2. **Registers:** `dest`, `src1` and `src2` must all name existing registers.
//! 3. **Operands:** resolved through the instruction's single addressing mode.
//!
//! Only then is a register, memory word, flag or `pc` written, so a faulting
//! instruction leaves no partial update behind.

use super::{Cpu, CpuState};
use crate::common::SimResult;
use crate::core::units::alu::{Alu, AluOp, AluOutput};
use crate::isa::instruction::Instruction;
use crate::isa::mode::AddressingMode;
use crate::isa::opcodes::Opcode;

impl Cpu {
    /// Executes one decoded instruction and returns its operation.
    ///
    /// `pc` already points at the next instruction; JUMP overwrites it and
    /// HALT moves the CPU to `Halted`.
    ///
    /// # Errors
    ///
    /// `UnknownOpcode`, `InvalidRegister`, `InvalidAddressingMode`,
    /// `OutOfBounds` or `DivisionByZero`. The CPU state is unchanged on error.
    pub(crate) fn execute(&mut self, inst: &Instruction) -> SimResult<Opcode> {
        let op = inst.operation()?;
        self.regs.check(usize::from(inst.dest))?;
        self.regs.check(usize::from(inst.src1))?;
        self.regs.check(usize::from(inst.src2))?;

        match op {
            Opcode::Halt => self.state = CpuState::Halted,
            Opcode::Load => {
                let mode = inst.addressing_mode()?;
                let value = self.resolve(mode, inst.src1, inst.imm)?;
                self.write_back(inst.dest, AluOutput::plain(value))?;
            }
            Opcode::Store => {
                // The address goes through the resolver; the value is a plain register read.
                let mode = inst.addressing_mode()?;
                let addr = self.resolve(mode, inst.dest, inst.imm)?;
                let value = self.regs.read(usize::from(inst.src1))?;
                self.memory.write(u64::from(addr), value)?;
            }
            Opcode::Jump => {
                let mode = inst.addressing_mode()?;
                self.pc = match mode {
                    AddressingMode::Immediate => u32::from(inst.imm),
                    _ => self.resolve(mode, inst.src1, inst.imm)?,
                };
            }
            Opcode::Add => self.alu(AluOp::Add, inst)?,
            Opcode::Sub => self.alu(AluOp::Sub, inst)?,
            Opcode::Mul => self.alu(AluOp::Mul, inst)?,
            Opcode::Div => self.alu(AluOp::Div, inst)?,
            Opcode::Inc => self.alu(AluOp::Inc, inst)?,
            Opcode::Dec => self.alu(AluOp::Dec, inst)?,
            Opcode::And => self.alu(AluOp::And, inst)?,
            Opcode::Or => self.alu(AluOp::Or, inst)?,
            Opcode::Xor => self.alu(AluOp::Xor, inst)?,
            Opcode::Not => self.alu(AluOp::Not, inst)?,
            Opcode::Shl => self.alu(AluOp::Shl, inst)?,
            Opcode::Shr => self.alu(AluOp::Shr, inst)?,
            Opcode::Rol => self.alu(AluOp::Rol, inst)?,
            Opcode::Ror => self.alu(AluOp::Ror, inst)?,
        }
        Ok(op)
    }

    fn alu(&mut self, op: AluOp, inst: &Instruction) -> SimResult<()> {
        let mode = inst.addressing_mode()?;
        let a = self.resolve(mode, inst.src1, inst.imm)?;
        let b = if op.is_unary() {
            0
        } else {
            self.resolve(mode, inst.src2, inst.imm)?
        };
        let out = Alu::execute(op, a, b)?;
        self.write_back(inst.dest, out)
    }

    /// Writes the destination register and updates the flags from it.
    fn write_back(&mut self, dest: u8, out: AluOutput) -> SimResult<()> {
        let idx = usize::from(dest);
        self.regs.write(idx, out.value)?;
        let written = self.regs.read(idx)?;
        self.regs.flags.update_zero_sign(written);
        self.regs.flags.apply(out.carry, out.overflow);
        Ok(())
    }
}
