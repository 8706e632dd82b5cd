use crate::error::CpuError;

use super::{Cpu, ExecState, Flow};

/// Result of a single [`Cpu::step`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// An instruction ran and the CPU is still running.
    Executed,
    /// The CPU is halted (either this step executed HALT or it already was).
    Halted,
}

/// Why [`Cpu::run`] returned normally.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RunExit {
    Halted,
    BudgetExhausted,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RunSummary {
    /// Instructions executed by this call.
    pub steps: usize,
    pub exit: RunExit,
}

impl Cpu {
    /// Decode and execute the instruction at `pc`.
    ///
    /// Decode failures and stack faults are returned before anything is
    /// written, so on `Err` the registers, flags and memory are exactly as
    /// they were before the call.
    pub fn step(&mut self) -> Result<StepOutcome, CpuError> {
        if self.state == ExecState::Halted {
            return Ok(StepOutcome::Halted);
        }

        let decoded = self
            .decoder
            .decode(&self.memory, self.regs.pc)
            .map_err(|err| {
                log::debug!("decode stopped: {err}");
                err
            })?;
        log::trace!("{:04X}: {:<16} {}", decoded.address, decoded, self.regs);

        let flow = (decoded.instruction.handler)(self, decoded.operands)?;
        self.executed += 1;

        match flow {
            Flow::Next => {
                self.regs.pc = decoded.operands.next_pc;
                Ok(StepOutcome::Executed)
            }
            Flow::Jump(target) => {
                self.regs.pc = target;
                Ok(StepOutcome::Executed)
            }
            Flow::Halt => {
                self.regs.pc = decoded.operands.next_pc;
                self.state = ExecState::Halted;
                log::debug!("CPU halted at PC=0x{:04X}", decoded.address);
                Ok(StepOutcome::Halted)
            }
        }
    }

    /// Step until HALT or until `budget` instructions have run.
    ///
    /// An unknown opcode or a stack fault ends the run with `Err`; this is
    /// also how a program that runs off the end of its image into zeroed
    /// memory stops.
    pub fn run(&mut self, budget: usize) -> Result<RunSummary, CpuError> {
        let mut steps = 0;
        loop {
            if self.state == ExecState::Halted {
                return Ok(RunSummary {
                    steps,
                    exit: RunExit::Halted,
                });
            }
            if steps == budget {
                return Ok(RunSummary {
                    steps,
                    exit: RunExit::BudgetExhausted,
                });
            }
            self.step()?;
            steps += 1;
        }
    }
}
