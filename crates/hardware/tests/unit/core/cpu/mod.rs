/// Addressing-mode operand resolution.
pub mod operand;
