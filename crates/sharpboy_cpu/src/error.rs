use sharpboy_common::HexError;
use thiserror::Error;

/// Failures reported by the CPU core.
///
/// Every variant is returned before the failing operation mutates any
/// register or memory cell, so the processor is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("unknown opcode 0x{opcode:02X} at PC=0x{address:04X} (prefixed: {prefixed})")]
    UnknownOpcode {
        address: u16,
        opcode: u8,
        prefixed: bool,
    },
    #[error("stack overflow: push at SP=0x{sp:04X} would go below 0xC000")]
    StackOverflow { sp: u16 },
    #[error("stack underflow: pop at SP=0x{sp:04X} would go above 0xE000")]
    StackUnderflow { sp: u16 },
    #[error("program of {len} bytes at 0x{base:04X} does not fit below 0x{limit:05X}")]
    ProgramTooLarge { len: usize, base: u16, limit: usize },
    #[error("invalid debug program: {0}")]
    InvalidHex(#[from] HexError),
}
