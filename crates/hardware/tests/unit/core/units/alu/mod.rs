/// And, Or, Xor, Not.
pub mod logic;
