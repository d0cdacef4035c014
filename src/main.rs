use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use defenestrate::cpu::UnknownOpcodePolicy;
use defenestrate::{Cpu, Rom};
use log::{debug, info, warn};

/// Runs an iNES ROM's CPU against the interpreter core, optionally emitting
/// a per-instruction trace.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an iNES (.nes) ROM image.
    rom: String,

    /// Print a trace line before every instruction.
    #[arg(long)]
    trace: bool,

    /// Override the program counter after reset (hex, e.g. c000).
    #[arg(long, value_parser = parse_hex_u16)]
    start_pc: Option<u16>,

    /// Stop after this many instructions instead of running until a fault.
    #[arg(long)]
    steps: Option<u64>,

    /// Treat an unrecognized opcode as a one-byte NOP instead of halting.
    #[arg(long)]
    lenient: bool,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data = fs::read(&cli.rom).with_context(|| format!("reading ROM file {}", cli.rom))?;
    let rom = Rom::parse(&data).with_context(|| format!("parsing iNES header in {}", cli.rom))?;
    info!(
        "loaded {} ({} x 16KiB PRG, mapper {})",
        cli.rom, rom.prg_size_units, rom.mapper
    );

    let mut cpu = Cpu::new();
    rom.load_into(&mut cpu);
    cpu.reset();
    if let Some(pc) = cli.start_pc {
        cpu.set_pc(pc);
    }
    if cli.lenient {
        cpu.unknown_opcode_policy = UnknownOpcodePolicy::TreatAsNop;
    }

    let mut executed = 0u64;
    loop {
        if let Some(limit) = cli.steps {
            if executed >= limit {
                break;
            }
        }

        if cli.trace {
            println!("{}", cpu.debug_step());
        }

        if let Err(fault) = cpu.step() {
            warn!("halted: {fault}");
            break;
        }
        executed += 1;
    }

    debug!("executed {executed} instructions, {} cycles", cpu.cycles);
    Ok(())
}
