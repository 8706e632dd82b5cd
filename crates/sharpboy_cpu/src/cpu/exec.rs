mod control;
mod ld;
mod system;

use super::{Cpu, Decoder, Instruction};

/// Build the standard LR35902 table.
///
/// Only the control-flow and immediate-load families are wired up. Every
/// other opcode (including 0x00/NOP) decodes as unknown, which is what stops
/// a program running off the end of its image into zeroed memory.
pub(super) fn standard_decoder() -> Decoder {
    let mut decoder = Decoder::empty();

    // LD r, d8 (and LD (HL), d8)
    for (opcode, mnemonic) in [
        (0x06, "LD B, d8"),
        (0x0E, "LD C, d8"),
        (0x16, "LD D, d8"),
        (0x1E, "LD E, d8"),
        (0x26, "LD H, d8"),
        (0x2E, "LD L, d8"),
        (0x36, "LD (HL), d8"),
        (0x3E, "LD A, d8"),
    ] {
        decoder.register(opcode, Instruction::new(mnemonic, 2, Cpu::exec_ld_r_d8));
    }

    // JR r8 (relative)
    decoder.register(0x18, Instruction::new("JR r8", 2, Cpu::exec_jr));

    // JR cc, r8
    for (opcode, mnemonic) in [
        (0x20, "JR NZ, r8"),
        (0x28, "JR Z, r8"),
        (0x30, "JR NC, r8"),
        (0x38, "JR C, r8"),
    ] {
        decoder.register(opcode, Instruction::new(mnemonic, 2, Cpu::exec_jr_cc));
    }

    // JP a16
    decoder.register(0xC3, Instruction::new("JP a16", 3, Cpu::exec_jp_a16));

    // JP cc, a16
    for (opcode, mnemonic) in [
        (0xC2, "JP NZ, a16"),
        (0xCA, "JP Z, a16"),
        (0xD2, "JP NC, a16"),
        (0xDA, "JP C, a16"),
    ] {
        decoder.register(opcode, Instruction::new(mnemonic, 3, Cpu::exec_jp_cc));
    }

    // JP (HL)
    decoder.register(0xE9, Instruction::new("JP (HL)", 1, Cpu::exec_jp_hl));

    // CALL a16
    decoder.register(0xCD, Instruction::new("CALL a16", 3, Cpu::exec_call_a16));

    // CALL cc, a16
    for (opcode, mnemonic) in [
        (0xC4, "CALL NZ, a16"),
        (0xCC, "CALL Z, a16"),
        (0xD4, "CALL NC, a16"),
        (0xDC, "CALL C, a16"),
    ] {
        decoder.register(opcode, Instruction::new(mnemonic, 3, Cpu::exec_call_cc));
    }

    // RET
    decoder.register(0xC9, Instruction::new("RET", 1, Cpu::exec_ret));

    // RET cc
    for (opcode, mnemonic) in [
        (0xC0, "RET NZ"),
        (0xC8, "RET Z"),
        (0xD0, "RET NC"),
        (0xD8, "RET C"),
    ] {
        decoder.register(opcode, Instruction::new(mnemonic, 1, Cpu::exec_ret_cc));
    }

    // RST nn
    for (opcode, mnemonic) in [
        (0xC7, "RST 00H"),
        (0xCF, "RST 08H"),
        (0xD7, "RST 10H"),
        (0xDF, "RST 18H"),
        (0xE7, "RST 20H"),
        (0xEF, "RST 28H"),
        (0xF7, "RST 30H"),
        (0xFF, "RST 38H"),
    ] {
        decoder.register(opcode, Instruction::new(mnemonic, 1, Cpu::exec_rst));
    }

    // HALT
    decoder.register(0x76, Instruction::new("HALT", 1, Cpu::exec_halt));

    decoder
}
