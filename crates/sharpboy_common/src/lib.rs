pub mod hex;

pub use hex::{parse_hex_program, HexError};
