//! The golden-log trace line formatter.
//!
//! One line per instruction, emitted before the instruction executes:
//!
//! ```text
//! PPPP  OP AA BB  MNE                          A:AA X:XX Y:YY P:FF SP:SS PPU:DDD
//! ```

use crate::cpu::Cpu;
use crate::opcode::OPCODE_TABLE;

/// Renders the trace line for the instruction about to execute at `cpu.pc`.
/// Reads memory only; never mutates `cpu`.
pub fn format_line(cpu: &Cpu) -> String {
    let pc = cpu.pc;
    let opcode = cpu.read(pc);
    let entry = OPCODE_TABLE[opcode as usize];

    let bytes = entry.map(|e| e.bytes).unwrap_or(1);
    let mnemonic = entry.map(|e| e.mnemonic.mnemonic()).unwrap_or("???");

    let b0 = opcode;
    let b1 = if bytes > 1 {
        format!("{:02X}", cpu.read(pc.wrapping_add(1)))
    } else {
        "  ".to_string()
    };
    let b2 = if bytes > 2 {
        format!("{:02X}", cpu.read(pc.wrapping_add(2)))
    } else {
        "  ".to_string()
    };

    let ppu = (cpu.cycles * 3) % 341;

    format!(
        "{:04X}  {:02X} {} {}  {:<32}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} PPU:{:>3}",
        pc,
        b0,
        b1,
        b2,
        mnemonic,
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.status.bits(),
        cpu.sp,
        ppu,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_a_single_byte_instruction() {
        let mut cpu = Cpu::new();
        cpu.pc = 0;
        cpu.memory[0] = 0xEA; // NOP
        cpu.cycles = 0;
        let line = format_line(&cpu);
        assert!(line.starts_with("0000  EA"));
        assert!(line.contains("NOP"));
        assert!(line.contains("PPU:  0"));
    }
}
