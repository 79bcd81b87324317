//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into a human-readable string for
//! debug tracing, the CLI listing and test diagnostics.
//!
//! Operands are rendered according to the instruction's addressing mode:
//!
//! | mode               | rendering    |
//! |--------------------|--------------|
//! | immediate          | `#imm`       |
//! | register direct    | `rN`         |
//! | register indirect  | `[rN]`       |
//! | memory direct      | `[0xADDR]`   |
//! | memory indirect    | `[rN+0xOFF]` |
//!
//! ```
//! use isasim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2100_8800), "add r2, r0, r1");
//! assert_eq!(disassemble(0x0000_0015), "load r0, #21");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::isa::mode::AddressingMode;
use crate::isa::opcodes::Opcode;

/// Renders the operand reached through `reg` under `mode`.
fn operand(mode: AddressingMode, reg: u8, imm: u16) -> String {
    match mode {
        AddressingMode::Immediate => format!("#{imm}"),
        AddressingMode::RegisterDirect => format!("r{reg}"),
        AddressingMode::RegisterIndirect => format!("[r{reg}]"),
        AddressingMode::MemoryDirect => format!("[{imm:#x}]"),
        AddressingMode::MemoryIndirect => format!("[r{reg}+{imm:#x}]"),
    }
}

/// Disassembles a raw instruction word.
pub fn disassemble(word: u32) -> String {
    format_instruction(&decode(word))
}

/// Disassembles an already decoded instruction.
///
/// Unassigned opcodes render as `.word`; invalid modes keep the mnemonic and
/// show the raw mode value.
pub fn format_instruction(inst: &Instruction) -> String {
    let Ok(op) = inst.operation() else {
        return format!(".word {:#010x}", inst.encode());
    };
    let name = op.mnemonic();
    let Ok(mode) = inst.addressing_mode() else {
        // HALT never reads its mode field.
        if op == Opcode::Halt {
            return name.to_string();
        }
        return format!(
            "{name} r{}, r{}, r{} <mode {:#x}> #{}",
            inst.dest, inst.src1, inst.src2, inst.mode, inst.imm
        );
    };

    match op {
        Opcode::Halt => name.to_string(),
        Opcode::Load => format!("{name} r{}, {}", inst.dest, operand(mode, inst.src1, inst.imm)),
        Opcode::Store => format!(
            "{name} {}, r{}",
            operand(mode, inst.dest, inst.imm),
            inst.src1
        ),
        Opcode::Jump => format!("{name} {}", operand(mode, inst.src1, inst.imm)),
        Opcode::Inc | Opcode::Dec | Opcode::Not => {
            format!("{name} r{}, {}", inst.dest, operand(mode, inst.src1, inst.imm))
        }
        Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::Div
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Shl
        | Opcode::Shr
        | Opcode::Rol
        | Opcode::Ror => format!(
            "{name} r{}, {}, {}",
            inst.dest,
            operand(mode, inst.src1, inst.imm),
            operand(mode, inst.src2, inst.imm)
        ),
    }
}
