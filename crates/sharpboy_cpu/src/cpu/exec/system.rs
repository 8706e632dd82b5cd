use crate::cpu::{Cpu, Flow, Operands};
use crate::error::CpuError;

impl Cpu {
    /// HALT. There are no interrupts to wake the CPU, so the loop stops for
    /// good until the next reset.
    pub(super) fn exec_halt(&mut self, _ops: Operands) -> Result<Flow, CpuError> {
        Ok(Flow::Halt)
    }
}
