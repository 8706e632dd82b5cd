mod decode;
mod exec;
mod helpers;
mod init;
mod regs;
mod step;

use std::sync::Arc;

use crate::memory::Memory;

pub use decode::{Decoded, Decoder, Flow, Handler, Instruction, Operands, PREFIX_CB};
pub use regs::{Flags, Registers};
pub use step::{RunExit, RunSummary, StepOutcome};

/// Execution state of the fetch/decode/execute loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ExecState {
    #[default]
    Running,
    /// Entered by `HALT`. Terminal until `reset`.
    Halted,
}

/// Sharp LR35902 (Game Boy) CPU core.
///
/// The CPU owns its registers and its 64 KiB memory. Instructions are looked
/// up in a shared [`Decoder`] table and each handler receives `&mut Cpu`, so
/// there is no global state and independent instances never alias.
pub struct Cpu {
    regs: Registers,
    memory: Memory,
    state: ExecState,
    /// Instructions executed since the last reset.
    executed: u64,
    decoder: Arc<Decoder>,
}

impl Cpu {
    #[inline]
    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    /// Mutable register access for debuggers and test setup.
    #[inline]
    pub fn regs_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.regs.sp
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    #[inline]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Byte at `sp + offset` (wrapping), i.e. `stack_peek(0)` is the most
    /// recently pushed byte.
    #[inline]
    pub fn stack_peek(&self, offset: u16) -> u8 {
        self.memory.read(self.regs.sp.wrapping_add(offset))
    }

    #[inline]
    pub fn state(&self) -> ExecState {
        self.state
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == ExecState::Halted
    }

    #[inline]
    pub fn executed(&self) -> u64 {
        self.executed
    }

    #[inline]
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}
