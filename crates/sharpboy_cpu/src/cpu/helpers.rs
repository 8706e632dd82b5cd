use crate::error::CpuError;
use crate::{STACK_BASE, STACK_LIMIT};

use super::{Cpu, Flags};

impl Cpu {
    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn write_reg8(&mut self, index: u8, value: u8) {
        match index {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => self.memory.write(self.regs.hl(), value),
            7 => self.regs.a = value,
            _ => unreachable!("invalid register index {index}"),
        }
    }

    /// Branch condition encoded in bits 3-4 of JR/JP/CALL/RET cc opcodes.
    #[inline]
    pub(super) fn cc_condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flags::ZERO),  // NZ
            1 => self.get_flag(Flags::ZERO),   // Z
            2 => !self.get_flag(Flags::CARRY), // NC
            3 => self.get_flag(Flags::CARRY),  // C
            _ => unreachable!(),
        }
    }

    /// Push a 16-bit value.
    ///
    /// Stack grows downward. We want memory[SP] = low, memory[SP+1] = high.
    /// The range check runs first, so an overflow leaves SP and memory as
    /// they were.
    pub fn push16(&mut self, value: u16) -> Result<(), CpuError> {
        self.check_push(2)?;
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, lo);
        Ok(())
    }

    /// Pop a 16-bit value pushed by [`Cpu::push16`].
    pub fn pop16(&mut self) -> Result<u16, CpuError> {
        if self.regs.sp as u32 + 2 > STACK_BASE as u32 {
            log::warn!("stack underflow at SP=0x{:04X}", self.regs.sp);
            return Err(CpuError::StackUnderflow { sp: self.regs.sp });
        }
        let lo = self.memory.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.memory.read(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// Push a single byte.
    pub fn push8(&mut self, value: u8) -> Result<(), CpuError> {
        self.check_push(1)?;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.memory.write(self.regs.sp, value);
        Ok(())
    }

    fn check_push(&self, bytes: u16) -> Result<(), CpuError> {
        match self.regs.sp.checked_sub(bytes) {
            Some(sp) if sp >= STACK_LIMIT => Ok(()),
            _ => {
                log::warn!("stack overflow at SP=0x{:04X}", self.regs.sp);
                Err(CpuError::StackOverflow { sp: self.regs.sp })
            }
        }
    }
}
