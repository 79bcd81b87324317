/// Fetch/decode/execute semantics.
pub mod cpu;
