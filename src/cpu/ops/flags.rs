//! CLC/SEC/CLI/SEI/CLV/CLD/SED: direct flag set/clear, no other state touched.

use crate::addressing::ExecContext;
use crate::cpu::Cpu;
use crate::status::Status;

pub fn clc(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.status.remove(Status::CARRY);
}

pub fn sec(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.status.insert(Status::CARRY);
}

pub fn cli(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.status.remove(Status::IRQ_DISABLE);
}

pub fn sei(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.status.insert(Status::IRQ_DISABLE);
}

pub fn clv(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.status.remove(Status::OVERFLOW);
}

pub fn cld(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.status.remove(Status::DECIMAL);
}

pub fn sed(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.status.insert(Status::DECIMAL);
}
