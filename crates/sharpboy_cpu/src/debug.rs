//! Text dumps of processor state for debuggers and the command-line runner.

use std::fmt::Write as _;

use crate::cpu::{Cpu, Decoder};
use crate::memory::Memory;
use crate::{CpuError, STACK_BASE};

/// Hex dump of `len` bytes starting at `start`, 16 bytes per row.
///
/// ```text
/// 0000: c3 02 01 00 ...
/// ```
pub fn dump_memory(memory: &Memory, start: u16, len: usize) -> String {
    let mut out = String::new();
    for (row, chunk) in memory.slice(start, len).chunks(16).enumerate() {
        let addr = start as usize + row * 16;
        let _ = write!(out, "{addr:04X}:");
        for byte in chunk {
            let _ = write!(out, " {byte:02x}");
        }
        out.push('\n');
    }
    out
}

/// The live part of the stack, top first, at most `depth` bytes.
///
/// Each line shows the address and the byte stored there; nothing is printed
/// when the stack is empty.
pub fn dump_stack(cpu: &Cpu, depth: usize) -> String {
    let sp = cpu.sp();
    let live = (STACK_BASE as usize).saturating_sub(sp as usize).min(depth);
    let mut out = String::new();
    for offset in 0..live {
        let addr = sp.wrapping_add(offset as u16);
        let _ = writeln!(out, "{addr:04X}: {:02x}", cpu.read(addr));
    }
    out
}

/// One line per register group plus the execution state.
pub fn dump_state(cpu: &Cpu) -> String {
    format!(
        "{}\nstate={:?} executed={}",
        cpu.regs(),
        cpu.state(),
        cpu.executed()
    )
}

/// Disassemble up to `count` instructions starting at `start`.
///
/// Stops early at the first byte the decoder does not know, reporting it as
/// a `db` line so the listing shows where execution would fault.
pub fn disassemble(decoder: &Decoder, memory: &Memory, start: u16, count: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(count);
    let mut pc = start;
    for _ in 0..count {
        match decoder.decode(memory, pc) {
            Ok(decoded) => {
                let len = decoded.instruction.length as u16;
                let raw = (0..len)
                    .map(|i| format!("{:02x}", memory.read(pc.wrapping_add(i))))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(format!("{pc:04X}: {raw:<9} {decoded}"));
                pc = pc.wrapping_add(len);
            }
            Err(CpuError::UnknownOpcode { opcode, prefixed, .. }) => {
                let raw = if prefixed {
                    format!("cb {opcode:02x}")
                } else {
                    format!("{opcode:02x}")
                };
                lines.push(format!("{pc:04X}: {raw:<9} db ; unknown opcode"));
                break;
            }
            Err(_) => break,
        }
    }
    lines
}
