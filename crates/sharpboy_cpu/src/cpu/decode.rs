use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::error::CpuError;
use crate::memory::Memory;

use super::{exec, Cpu};

/// First byte of the extended (`CB xx`) opcode space.
pub const PREFIX_CB: u8 = 0xCB;

/// Signature shared by every instruction handler.
pub type Handler = fn(&mut Cpu, Operands) -> Result<Flow, CpuError>;

/// What the execution loop does with `pc` once a handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Fall through to the next instruction.
    Next,
    /// Continue at the given address.
    Jump(u16),
    /// Fall through and stop the CPU.
    Halt,
}

/// One entry of the opcode table.
#[derive(Clone, Copy)]
pub struct Instruction {
    /// Assembly template. `d8`, `a16` and `r8` mark the immediate operand.
    pub mnemonic: &'static str,
    /// Encoded length in bytes, including any prefix and the opcode itself.
    pub length: u8,
    pub handler: Handler,
}

impl Instruction {
    pub const fn new(mnemonic: &'static str, length: u8, handler: Handler) -> Self {
        Self {
            mnemonic,
            length,
            handler,
        }
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

/// Opcode and immediate bytes handed to a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operands {
    pub opcode: u8,
    /// Immediate bytes following the opcode; unused slots are zero.
    pub bytes: [u8; 2],
    /// Address of the byte following the whole instruction.
    pub next_pc: u16,
}

impl Operands {
    #[inline]
    pub fn imm8(&self) -> u8 {
        self.bytes[0]
    }

    /// Little-endian 16-bit immediate: `low + (high << 8)`.
    #[inline]
    pub fn imm16(&self) -> u16 {
        u16::from_le_bytes(self.bytes)
    }

    /// Target of a relative jump: `next_pc` plus the signed 8-bit immediate.
    #[inline]
    pub fn relative_target(&self) -> u16 {
        self.next_pc.wrapping_add(self.imm8() as i8 as u16)
    }
}

/// A fully decoded instruction at a given address.
#[derive(Clone, Copy, Debug)]
pub struct Decoded {
    pub address: u16,
    pub prefixed: bool,
    pub instruction: Instruction,
    pub operands: Operands,
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.instruction.mnemonic;
        let ops = &self.operands;
        let text = if mnemonic.contains("a16") {
            mnemonic.replace("a16", &format!("${:04X}", ops.imm16()))
        } else if mnemonic.contains("r8") {
            mnemonic.replace("r8", &format!("${:04X}", ops.relative_target()))
        } else if mnemonic.contains("d8") {
            mnemonic.replace("d8", &format!("${:02X}", ops.imm8()))
        } else {
            mnemonic.to_string()
        };
        f.pad(&text)
    }
}

#[derive(Clone)]
struct OpcodeTable {
    entries: [Option<Instruction>; 256],
}

impl OpcodeTable {
    fn empty() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    #[inline]
    fn get(&self, opcode: u8) -> Option<Instruction> {
        self.entries[opcode as usize]
    }
}

lazy_static! {
    static ref STANDARD: Arc<Decoder> = Arc::new(exec::standard_decoder());
}

/// Table-driven instruction decoder.
///
/// Two 256-entry tables: the base opcode space and the `CB`-prefixed space.
/// New instruction families are added with [`Decoder::register`] and
/// [`Decoder::register_prefixed`]; the execution loop never changes.
#[derive(Clone)]
pub struct Decoder {
    base: OpcodeTable,
    prefixed: OpcodeTable,
}

impl Decoder {
    /// Decoder with no instructions at all.
    pub fn empty() -> Self {
        Self {
            base: OpcodeTable::empty(),
            prefixed: OpcodeTable::empty(),
        }
    }

    /// The standard table, built once and shared by every CPU.
    pub fn standard() -> Arc<Decoder> {
        Arc::clone(&STANDARD)
    }

    /// Install `instruction` for a base opcode, returning the entry it
    /// replaced.
    ///
    /// # Panics
    ///
    /// `0xCB` is reserved for the prefix; use [`Decoder::register_prefixed`].
    pub fn register(&mut self, opcode: u8, instruction: Instruction) -> Option<Instruction> {
        assert_ne!(opcode, PREFIX_CB, "0xCB is the prefix byte");
        self.base.entries[opcode as usize].replace(instruction)
    }

    /// Install `instruction` for `CB opcode`. Its `length` counts the prefix.
    pub fn register_prefixed(
        &mut self,
        opcode: u8,
        instruction: Instruction,
    ) -> Option<Instruction> {
        self.prefixed.entries[opcode as usize].replace(instruction)
    }

    /// Number of defined opcodes as `(base, prefixed)`.
    pub fn counts(&self) -> (usize, usize) {
        let count = |t: &OpcodeTable| t.entries.iter().filter(|e| e.is_some()).count();
        (count(&self.base), count(&self.prefixed))
    }

    /// Decode the instruction at `pc` without side effects.
    ///
    /// Operand bytes wrap around the end of the address space.
    pub fn decode(&self, memory: &Memory, pc: u16) -> Result<Decoded, CpuError> {
        let first = memory.read(pc);
        let (prefixed, opcode, opcode_len) = if first == PREFIX_CB {
            (true, memory.read(pc.wrapping_add(1)), 2u8)
        } else {
            (false, first, 1u8)
        };

        let table = if prefixed { &self.prefixed } else { &self.base };
        let instruction = table.get(opcode).ok_or(CpuError::UnknownOpcode {
            address: pc,
            opcode,
            prefixed,
        })?;

        let mut bytes = [0u8; 2];
        let operand_start = pc.wrapping_add(opcode_len as u16);
        let operand_len = instruction.length.saturating_sub(opcode_len).min(2);
        for (i, slot) in bytes.iter_mut().take(operand_len as usize).enumerate() {
            *slot = memory.read(operand_start.wrapping_add(i as u16));
        }

        Ok(Decoded {
            address: pc,
            prefixed,
            instruction,
            operands: Operands {
                opcode,
                bytes,
                next_pc: pc.wrapping_add(instruction.length as u16),
            },
        })
    }
}
