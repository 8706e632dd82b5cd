use crate::cpu::{Cpu, Flow, Operands};
use crate::error::CpuError;

impl Cpu {
    /// LD r, d8 and LD (HL), d8. Flags are untouched.
    pub(super) fn exec_ld_r_d8(&mut self, ops: Operands) -> Result<Flow, CpuError> {
        debug_assert!(matches!(
            ops.opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let reg = (ops.opcode >> 3) & 0x07;
        self.write_reg8(reg, ops.imm8());
        Ok(Flow::Next)
    }
}
