/// Field extraction, encode/decode agreement and opcode/mode tables.
pub mod decode_properties;
