//! INC/DEC on memory, and the four register increment/decrement ops.

use super::{operand, write_back};
use crate::addressing::ExecContext;
use crate::cpu::Cpu;

pub fn inc(cpu: &mut Cpu, ctx: &ExecContext) {
    let result = operand(cpu, ctx).wrapping_add(1);
    cpu.set_zn(result);
    write_back(cpu, ctx, result);
}

pub fn dec(cpu: &mut Cpu, ctx: &ExecContext) {
    let result = operand(cpu, ctx).wrapping_sub(1);
    cpu.set_zn(result);
    write_back(cpu, ctx, result);
}

pub fn inx(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
}

pub fn dex(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
}

pub fn iny(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
}

pub fn dey(cpu: &mut Cpu, _ctx: &ExecContext) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;

    #[test]
    fn inx_wraps_at_byte_boundary() {
        let mut cpu = Cpu::new();
        cpu.x = 0xFF;
        let ctx = ExecContext {
            addr: 0,
            mode: AddressingMode::Impl,
            page_crossed: false,
        };
        inx(&mut cpu, &ctx);
        assert_eq!(cpu.x, 0);
        assert!(cpu.status.contains(crate::status::Status::ZERO));
    }

    #[test]
    fn dec_memory_wraps_below_zero() {
        let mut cpu = Cpu::new();
        cpu.memory[0x10] = 0x00;
        let ctx = ExecContext {
            addr: 0x10,
            mode: AddressingMode::ZP,
            page_crossed: false,
        };
        dec(&mut cpu, &ctx);
        assert_eq!(cpu.memory[0x10], 0xFF);
    }
}
