pub mod cpu;
pub mod debug;
pub mod error;
pub mod memory;

pub use cpu::{
    Cpu, Decoded, Decoder, ExecState, Flags, Flow, Handler, Instruction, Operands, Registers,
    RunExit, RunSummary, StepOutcome, PREFIX_CB,
};
pub use error::CpuError;
pub use memory::Memory;

/// Total addressable memory (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;
/// Size of the cartridge region starting at address 0.
pub const CARTRIDGE_SIZE: usize = 0x8000;
/// Initial stack pointer. The stack grows downward from here.
pub const STACK_BASE: u16 = 0xE000;
/// Lowest address the stack pointer may reach.
pub const STACK_LIMIT: u16 = 0xC000;
