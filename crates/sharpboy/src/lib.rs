use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sharpboy_common::parse_hex_program;
use sharpboy_cpu::{debug, Cpu, CpuError, RunExit};
use typed_builder::TypedBuilder;

/// Instruction budget used when the caller does not pick one.
pub const DEFAULT_STEP_BUDGET: usize = 1_000_000;

/// Where the program image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramSource {
    /// Raw ROM image on disk.
    RomFile(PathBuf),
    /// Hex byte pairs, e.g. `"c3 02 01"`.
    Hex(String),
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunOptions {
    pub source: ProgramSource,
    #[builder(default = DEFAULT_STEP_BUDGET)]
    pub steps: usize,
    /// Load address; execution also starts here.
    #[builder(default = 0)]
    pub base: u16,
    #[builder(default = false)]
    pub disassemble: bool,
    /// Number of stack bytes shown in the report.
    #[builder(default = 16)]
    pub stack_depth: usize,
}

/// How a run ended without a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    Halted,
    BudgetExhausted,
    /// Execution reached a byte with no decode table entry, typically the
    /// zeroed memory right after the program image.
    UnknownOpcode { address: u16, opcode: u8, prefixed: bool },
}

pub struct Report {
    pub cpu: Cpu,
    pub stop: Stop,
    /// Disassembly of the image taken before execution, if requested.
    pub listing: Vec<String>,
    stack_depth: usize,
}

impl Report {
    /// Human-readable summary: listing, stop reason, registers and stack.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.listing.is_empty() {
            out.push_str("; disassembly\n");
            for line in &self.listing {
                let _ = writeln!(out, "{line}");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "stop: {:?}", self.stop);
        let _ = writeln!(out, "{}", debug::dump_state(&self.cpu));
        let stack = debug::dump_stack(&self.cpu, self.stack_depth);
        if stack.is_empty() {
            out.push_str("stack: empty\n");
        } else {
            out.push_str("stack:\n");
            out.push_str(&stack);
        }
        out
    }
}

fn read_program(source: &ProgramSource) -> Result<Vec<u8>> {
    match source {
        ProgramSource::RomFile(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read ROM '{}'", path.display())),
        ProgramSource::Hex(text) => {
            parse_hex_program(text).context("Failed to parse hex program")
        }
    }
}

/// Build a CPU with the program loaded and `pc` at the load base.
pub fn load(options: &RunOptions) -> Result<Cpu> {
    let rom = read_program(&options.source)?;
    let mut cpu = Cpu::new();
    cpu.load_program_at(&rom, options.base)
        .with_context(|| format!("Failed to load {} byte program", rom.len()))?;
    cpu.regs_mut().pc = options.base;
    log::info!(
        "Loaded {} byte(s) at 0x{:04X}, budget {} step(s)",
        rom.len(),
        options.base,
        options.steps
    );
    Ok(cpu)
}

/// Load and run a program.
///
/// Reaching an unknown opcode is reported as a [`Stop`], since that is how
/// programs end; stack faults are returned as errors.
pub fn run(options: &RunOptions) -> Result<Report> {
    let mut cpu = load(options)?;

    let listing = if options.disassemble {
        debug::disassemble(cpu.decoder(), cpu.memory(), options.base, 256)
    } else {
        Vec::new()
    };

    let stop = match cpu.run(options.steps) {
        Ok(summary) => match summary.exit {
            RunExit::Halted => Stop::Halted,
            RunExit::BudgetExhausted => Stop::BudgetExhausted,
        },
        Err(CpuError::UnknownOpcode {
            address,
            opcode,
            prefixed,
        }) => Stop::UnknownOpcode {
            address,
            opcode,
            prefixed,
        },
        Err(err) => {
            log::error!("CPU fault: {err} ({})", cpu.regs());
            return Err(err).context("CPU fault");
        }
    };
    log::info!("Stopped after {} instruction(s): {:?}", cpu.executed(), stop);

    Ok(Report {
        cpu,
        stop,
        listing,
        stack_depth: options.stack_depth,
    })
}
