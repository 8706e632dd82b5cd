use std::fmt;

use bitflags::bitflags;

use crate::STACK_BASE;

use super::Cpu;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0-3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 1 << 7;
        const SUBTRACT = 1 << 6;
        const HALF_CARRY = 1 << 5;
        const CARRY = 1 << 4;
    }
}

/// Register file for the LR35902.
///
/// `h` and `l` double as the 16-bit `hl` pointer; the pair is always derived
/// from the two bytes and has no storage of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            a: 0,
            f: Flags::empty(),
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,
            sp: STACK_BASE,
            pc: 0,
        }
    }
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |bit: Flags, c: char| if self.f.contains(bit) { c } else { '-' };
        write!(
            f,
            "PC=0x{:04X} SP=0x{:04X} AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} [{}{}{}{}]",
            self.pc,
            self.sp,
            self.af(),
            self.bc(),
            self.de(),
            self.hl(),
            flag(Flags::ZERO, 'Z'),
            flag(Flags::SUBTRACT, 'N'),
            flag(Flags::HALF_CARRY, 'H'),
            flag(Flags::CARRY, 'C'),
        )
    }
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }
}
