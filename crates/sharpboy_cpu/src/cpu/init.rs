use std::sync::Arc;

use sharpboy_common::parse_hex_program;

use crate::error::CpuError;
use crate::memory::Memory;
use crate::CARTRIDGE_SIZE;

use super::{Cpu, Decoder, ExecState, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Power-on CPU using the standard LR35902 decode table.
    pub fn new() -> Self {
        Self::with_decoder(Decoder::standard())
    }

    /// Power-on CPU dispatching through a caller-provided table, e.g. the
    /// standard one extended with extra opcodes.
    pub fn with_decoder(decoder: Arc<Decoder>) -> Self {
        Self {
            regs: Registers::default(),
            memory: Memory::new(),
            state: ExecState::Running,
            executed: 0,
            decoder,
        }
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Registers and flags are zeroed, `sp` returns to the stack base and
    /// memory is zero-filled in place.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.memory.clear();
        self.state = ExecState::Running;
        self.executed = 0;
    }

    /// Load a program image at address 0.
    pub fn load_program(&mut self, rom: &[u8]) -> Result<(), CpuError> {
        self.load_program_at(rom, 0)
    }

    /// Load a program image at `base`.
    ///
    /// The image must fit in the cartridge region (`0x0000..0x8000`).
    /// Registers are left alone; call [`Cpu::reset`] first for a clean run.
    pub fn load_program_at(&mut self, rom: &[u8], base: u16) -> Result<(), CpuError> {
        let end = base as usize + rom.len();
        if end > CARTRIDGE_SIZE {
            return Err(CpuError::ProgramTooLarge {
                len: rom.len(),
                base,
                limit: CARTRIDGE_SIZE,
            });
        }
        self.memory.load(rom, base)?;
        log::debug!("loaded {} byte(s) at 0x{:04X}", rom.len(), base);
        Ok(())
    }

    /// Load a program written as hex byte pairs, e.g. `"c3 02 01"`.
    pub fn load_debug_program(&mut self, text: &str) -> Result<(), CpuError> {
        let rom = parse_hex_program(text)?;
        self.load_program(&rom)
    }
}
