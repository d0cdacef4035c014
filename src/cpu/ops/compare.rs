//! CMP, CPX, CPY. The subtraction result is discarded; only flags survive.
//! Carry uses the unsigned comparison, not a signed difference check.

use super::operand;
use crate::addressing::ExecContext;
use crate::cpu::Cpu;
use crate::status::Status;

fn compare(cpu: &mut Cpu, register: u8, ctx: &ExecContext) {
    let value = operand(cpu, ctx);
    let result = register.wrapping_sub(value);
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set(Status::ZERO, register == value);
    cpu.status.set(Status::NEGATIVE, result & 0x80 != 0);
}

pub fn cmp(cpu: &mut Cpu, ctx: &ExecContext) {
    compare(cpu, cpu.a, ctx);
}

pub fn cpx(cpu: &mut Cpu, ctx: &ExecContext) {
    compare(cpu, cpu.x, ctx);
}

pub fn cpy(cpu: &mut Cpu, ctx: &ExecContext) {
    compare(cpu, cpu.y, ctx);
}
