//! Register-to-register transfers. All update Z/N from the destination
//! except TXS, which leaves flags untouched (it is a stack-pointer load,
//! not a general register move).

use crate::addressing::ExecContext;
use crate::cpu::Cpu;

pub fn tax(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
}

pub fn txa(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
}

pub fn tay(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
}

pub fn tya(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
}

pub fn tsx(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
}

pub fn txs(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.sp = cpu.x;
}
