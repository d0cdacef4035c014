//! ASL, LSR, ROL, ROR. All four read one operand (accumulator or memory,
//! selected by addressing mode), shift it, and write the result back to the
//! same place they read it from.

use super::{operand, write_back};
use crate::addressing::ExecContext;
use crate::cpu::Cpu;
use crate::status::Status;

pub fn asl(cpu: &mut Cpu, ctx: &ExecContext) {
    let value = operand(cpu, ctx);
    let result = value << 1;
    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    cpu.set_zn(result);
    write_back(cpu, ctx, result);
}

pub fn lsr(cpu: &mut Cpu, ctx: &ExecContext) {
    let value = operand(cpu, ctx);
    let result = value >> 1;
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    cpu.set_zn(result);
    write_back(cpu, ctx, result);
}

pub fn rol(cpu: &mut Cpu, ctx: &ExecContext) {
    let value = operand(cpu, ctx);
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = (value << 1) | carry_in;
    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    cpu.set_zn(result);
    write_back(cpu, ctx, result);
}

pub fn ror(cpu: &mut Cpu, ctx: &ExecContext) {
    let value = operand(cpu, ctx);
    let carry_in = cpu.status.contains(Status::CARRY) as u8;
    let result = (value >> 1) | (carry_in << 7);
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    cpu.set_zn(result);
    write_back(cpu, ctx, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;

    fn ctx_accum() -> ExecContext {
        ExecContext {
            addr: 0,
            mode: AddressingMode::Accum,
            page_crossed: false,
        }
    }

    #[test]
    fn lsr_sources_carry_from_bit_zero_not_bit_seven() {
        let mut cpu = Cpu::new();
        cpu.a = 0x81;
        lsr(&mut cpu, &ctx_accum());
        assert_eq!(cpu.a, 0x40);
        assert!(cpu.status.contains(Status::CARRY));
    }

    #[test]
    fn ror_rotates_carry_into_bit_seven() {
        let mut cpu = Cpu::new();
        cpu.a = 0x01;
        cpu.status.insert(Status::CARRY);
        ror(&mut cpu, &ctx_accum());
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.status.contains(Status::CARRY));
        assert!(cpu.status.contains(Status::NEGATIVE));
    }

    #[test]
    fn asl_writes_back_to_memory_when_not_accumulator() {
        let mut cpu = Cpu::new();
        cpu.memory[0x10] = 0x40;
        let ctx = ExecContext {
            addr: 0x10,
            mode: AddressingMode::ZP,
            page_crossed: false,
        };
        asl(&mut cpu, &ctx);
        assert_eq!(cpu.memory[0x10], 0x80);
        assert_eq!(cpu.a, 0);
    }
}
