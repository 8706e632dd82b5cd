use crate::cpu::{Cpu, Flow, Operands};
use crate::error::CpuError;

impl Cpu {
    pub(super) fn exec_jp_a16(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        Ok(Flow::Jump(ops.imm16()))
    }

    pub(super) fn exec_jp_cc(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        debug_assert!(matches!(ops.opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        if self.cc_condition(ops.opcode) {
            Ok(Flow::Jump(ops.imm16()))
        } else {
            Ok(Flow::Next)
        }
    }

    pub(super) fn exec_jp_hl(&mut self, _ops: Operands) -> Result<Flow, CpuError> {
        Ok(Flow::Jump(self.regs.hl()))
    }

    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand.
    pub(super) fn exec_jr(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        Ok(Flow::Jump(ops.relative_target()))
    }

    pub(super) fn exec_jr_cc(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        debug_assert!(matches!(ops.opcode, 0x20 | 0x28 | 0x30 | 0x38));
        if self.cc_condition(ops.opcode) {
            Ok(Flow::Jump(ops.relative_target()))
        } else {
            Ok(Flow::Next)
        }
    }

    pub(super) fn exec_call_a16(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        self.push16(ops.next_pc)?;
        Ok(Flow::Jump(ops.imm16()))
    }

    pub(super) fn exec_call_cc(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        debug_assert!(matches!(ops.opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        if self.cc_condition(ops.opcode) {
            self.exec_call_a16(ops)
        } else {
            Ok(Flow::Next)
        }
    }

    pub(super) fn exec_ret(&mut self, _ops: Operands) -> Result<Flow, CpuError> {
        let addr = self.pop16()?;
        Ok(Flow::Jump(addr))
    }

    pub(super) fn exec_ret_cc(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        debug_assert!(matches!(ops.opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        if self.cc_condition(ops.opcode) {
            self.exec_ret(ops)
        } else {
            Ok(Flow::Next)
        }
    }

    /// Fixed-vector call: the vector index sits in bits 3-5 of the opcode.
    pub(super) fn exec_rst(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        debug_assert!(matches!(
            ops.opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));
        self.push16(ops.next_pc)?;
        Ok(Flow::Jump((ops.opcode & 0x38) as u16))
    }
}
