//! NOP: consumes its bytes and cycles, does nothing else.

use crate::addressing::ExecContext;
use crate::cpu::Cpu;

pub fn nop(_cpu: &mut Cpu, _ctx: &ExecContext) {}
