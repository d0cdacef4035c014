//! Runs the canonical nestest ROM against the interpreter and compares the
//! per-instruction trace line-by-line with the reference log, per the
//! conformance driver this core is built to satisfy.
//!
//! Neither `tests/data/nestest.nes` nor `tests/data/nestest.log` ships in
//! this tree (they are large third-party fixtures); the test skips itself
//! when they are absent instead of failing the suite.

mod util;

use util::{logparse, provider};

use defenestrate::{Cpu, Rom};

#[test]
fn nestest_exec() {
    if !provider::fixtures_present() {
        eprintln!("skipping nestest_exec: fixture files not present under tests/data/");
        return;
    }

    let data = provider::load_nestest_rom_bytes();
    let rom = Rom::parse(&data).expect("failed to parse nestest ROM header");

    let mut cpu = Cpu::new();
    rom.load_into(&mut cpu);
    cpu.reset();
    cpu.set_pc(0xC000);

    let gold_log = provider::load_gold_standard_log();

    for (line_no, gold_line) in gold_log.enumerate() {
        // Illegal opcodes start at line 5004 of the reference log; this
        // core only implements the 56 documented mnemonics.
        if line_no >= 5003 {
            break;
        }

        let raw = cpu.debug_step();
        let log = logparse::parse_line(&raw);
        let gold = logparse::parse_line(&gold_line);
        logparse::assert_logs_eq(&log, &gold);

        cpu.step().expect("unexpected unknown opcode in nestest ROM");
    }
}
