//! LDA/LDX/LDY and STA/STX/STY.

use super::operand;
use crate::addressing::ExecContext;
use crate::cpu::Cpu;

pub fn lda(cpu: &mut Cpu, ctx: &ExecContext) {
    cpu.a = operand(cpu, ctx);
    cpu.set_zn(cpu.a);
}

pub fn ldx(cpu: &mut Cpu, ctx: &ExecContext) {
    cpu.x = operand(cpu, ctx);
    cpu.set_zn(cpu.x);
}

pub fn ldy(cpu: &mut Cpu, ctx: &ExecContext) {
    cpu.y = operand(cpu, ctx);
    cpu.set_zn(cpu.y);
}

pub fn sta(cpu: &mut Cpu, ctx: &ExecContext) {
    cpu.write(ctx.addr, cpu.a);
}

pub fn stx(cpu: &mut Cpu, ctx: &ExecContext) {
    cpu.write(ctx.addr, cpu.x);
}

pub fn sty(cpu: &mut Cpu, ctx: &ExecContext) {
    cpu.write(ctx.addr, cpu.y);
}
