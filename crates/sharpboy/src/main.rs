use std::path::PathBuf;

use sharpboy::{ProgramSource, RunOptions, Stop, DEFAULT_STEP_BUDGET};

const USAGE: &str = "Usage: sharpboy <rom_path | --hex \"c3 02 01\"> [--steps N] [--base ADDR] [--disasm]";

fn parse_number(text: &str) -> Option<usize> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}\n{USAGE}");
    std::process::exit(2);
}

fn main() {
    env_logger::init();

    let mut source = None;
    let mut steps = DEFAULT_STEP_BUDGET;
    let mut base = 0u16;
    let mut disassemble = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--hex" => {
                let text = args
                    .next()
                    .unwrap_or_else(|| usage_error("--hex needs a program"));
                source = Some(ProgramSource::Hex(text));
            }
            "--steps" => {
                steps = args
                    .next()
                    .as_deref()
                    .and_then(parse_number)
                    .unwrap_or_else(|| usage_error("--steps needs a number"));
            }
            "--base" => {
                base = args
                    .next()
                    .as_deref()
                    .and_then(parse_number)
                    .and_then(|n| u16::try_from(n).ok())
                    .unwrap_or_else(|| usage_error("--base needs an address below 0x10000"));
            }
            "--disasm" => disassemble = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            other if other.starts_with("--") => {
                usage_error(&format!("Unknown option '{other}'"));
            }
            path => source = Some(ProgramSource::RomFile(PathBuf::from(path))),
        }
    }

    let source = source.unwrap_or_else(|| usage_error("No program given"));
    let options = RunOptions::builder()
        .source(source)
        .steps(steps)
        .base(base)
        .disassemble(disassemble)
        .build();

    match sharpboy::run(&options) {
        Ok(report) => {
            print!("{}", report.render());
            if report.stop == Stop::BudgetExhausted {
                log::warn!("Step budget of {steps} exhausted");
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
