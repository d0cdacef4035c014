//! The static opcode table: one entry per legal opcode byte, pairing an
//! addressing mode with base cycles, byte length, the page-cross penalty
//! flag, and the handler that carries out the mnemonic's semantics.
//!
//! Bytes with no legal-opcode entry (the illegal/undocumented opcodes, out
//! of scope per the CPU's non-goals) decode to `None`.

use crate::addressing::AddressingMode;
use crate::cpu::{ops, Cpu};
use crate::addressing::ExecContext;
use crate::instruction::Instruction;

pub type Handler = fn(&mut Cpu, &ExecContext);

#[derive(Clone, Copy)]
pub struct OpcodeEntry {
    pub mnemonic: Instruction,
    pub mode: AddressingMode,
    pub bytes: u16,
    pub base_cycles: u8,
    pub page_cross_penalty: bool,
    pub handler: Handler,
}

/// Decodes a single opcode byte into its descriptor. `None` means the byte
/// is not one of the 56 documented mnemonics' legal encodings.
pub const fn decode(opcode: u8) -> Option<OpcodeEntry> {
    use AddressingMode::*;
    use Instruction::*;

    macro_rules! entry {
        ($mnemonic:expr, $mode:expr, $bytes:expr, $cycles:expr, $page_cross:expr, $handler:expr) => {
            Some(OpcodeEntry {
                mnemonic: $mnemonic,
                mode: $mode,
                bytes: $bytes,
                base_cycles: $cycles,
                page_cross_penalty: $page_cross,
                handler: $handler,
            })
        };
    }

    match opcode {
        // ADC
        0x69 => entry!(ADC, Imm, 2, 2, false, ops::arithmetic::adc),
        0x65 => entry!(ADC, ZP, 2, 3, false, ops::arithmetic::adc),
        0x75 => entry!(ADC, ZPX, 2, 4, false, ops::arithmetic::adc),
        0x6D => entry!(ADC, Abs, 3, 4, false, ops::arithmetic::adc),
        0x7D => entry!(ADC, AbsX, 3, 4, true, ops::arithmetic::adc),
        0x79 => entry!(ADC, AbsY, 3, 4, true, ops::arithmetic::adc),
        0x61 => entry!(ADC, IndX, 2, 6, false, ops::arithmetic::adc),
        0x71 => entry!(ADC, IndY, 2, 5, true, ops::arithmetic::adc),

        // AND
        0x29 => entry!(AND, Imm, 2, 2, false, ops::logic::and),
        0x25 => entry!(AND, ZP, 2, 3, false, ops::logic::and),
        0x35 => entry!(AND, ZPX, 2, 4, false, ops::logic::and),
        0x2D => entry!(AND, Abs, 3, 4, false, ops::logic::and),
        0x3D => entry!(AND, AbsX, 3, 4, true, ops::logic::and),
        0x39 => entry!(AND, AbsY, 3, 4, true, ops::logic::and),
        0x21 => entry!(AND, IndX, 2, 6, false, ops::logic::and),
        0x31 => entry!(AND, IndY, 2, 5, true, ops::logic::and),

        // ASL
        0x0A => entry!(ASL, Accum, 1, 2, false, ops::shift::asl),
        0x06 => entry!(ASL, ZP, 2, 5, false, ops::shift::asl),
        0x16 => entry!(ASL, ZPX, 2, 6, false, ops::shift::asl),
        0x0E => entry!(ASL, Abs, 3, 6, false, ops::shift::asl),
        0x1E => entry!(ASL, AbsX, 3, 7, false, ops::shift::asl),

        // BIT
        0x24 => entry!(BIT, ZP, 2, 3, false, ops::logic::bit),
        0x2C => entry!(BIT, Abs, 3, 4, false, ops::logic::bit),

        // Branches
        0x10 => entry!(BPL, Rel, 2, 2, false, ops::branch::bpl),
        0x30 => entry!(BMI, Rel, 2, 2, false, ops::branch::bmi),
        0x50 => entry!(BVC, Rel, 2, 2, false, ops::branch::bvc),
        0x70 => entry!(BVS, Rel, 2, 2, false, ops::branch::bvs),
        0x90 => entry!(BCC, Rel, 2, 2, false, ops::branch::bcc),
        0xB0 => entry!(BCS, Rel, 2, 2, false, ops::branch::bcs),
        0xD0 => entry!(BNE, Rel, 2, 2, false, ops::branch::bne),
        0xF0 => entry!(BEQ, Rel, 2, 2, false, ops::branch::beq),

        // BRK
        0x00 => entry!(BRK, Impl, 1, 7, false, ops::jump::brk),

        // CMP
        0xC9 => entry!(CMP, Imm, 2, 2, false, ops::compare::cmp),
        0xC5 => entry!(CMP, ZP, 2, 3, false, ops::compare::cmp),
        0xD5 => entry!(CMP, ZPX, 2, 4, false, ops::compare::cmp),
        0xCD => entry!(CMP, Abs, 3, 4, false, ops::compare::cmp),
        0xDD => entry!(CMP, AbsX, 3, 4, true, ops::compare::cmp),
        0xD9 => entry!(CMP, AbsY, 3, 4, true, ops::compare::cmp),
        0xC1 => entry!(CMP, IndX, 2, 6, false, ops::compare::cmp),
        0xD1 => entry!(CMP, IndY, 2, 5, true, ops::compare::cmp),

        // CPX / CPY
        0xE0 => entry!(CPX, Imm, 2, 2, false, ops::compare::cpx),
        0xE4 => entry!(CPX, ZP, 2, 3, false, ops::compare::cpx),
        0xEC => entry!(CPX, Abs, 3, 4, false, ops::compare::cpx),
        0xC0 => entry!(CPY, Imm, 2, 2, false, ops::compare::cpy),
        0xC4 => entry!(CPY, ZP, 2, 3, false, ops::compare::cpy),
        0xCC => entry!(CPY, Abs, 3, 4, false, ops::compare::cpy),

        // DEC / INC
        0xC6 => entry!(DEC, ZP, 2, 5, false, ops::incdec::dec),
        0xD6 => entry!(DEC, ZPX, 2, 6, false, ops::incdec::dec),
        0xCE => entry!(DEC, Abs, 3, 6, false, ops::incdec::dec),
        0xDE => entry!(DEC, AbsX, 3, 7, false, ops::incdec::dec),
        0xE6 => entry!(INC, ZP, 2, 5, false, ops::incdec::inc),
        0xF6 => entry!(INC, ZPX, 2, 6, false, ops::incdec::inc),
        0xEE => entry!(INC, Abs, 3, 6, false, ops::incdec::inc),
        0xFE => entry!(INC, AbsX, 3, 7, false, ops::incdec::inc),

        // DEX/DEY/INX/INY
        0xCA => entry!(DEX, Impl, 1, 2, false, ops::incdec::dex),
        0x88 => entry!(DEY, Impl, 1, 2, false, ops::incdec::dey),
        0xE8 => entry!(INX, Impl, 1, 2, false, ops::incdec::inx),
        0xC8 => entry!(INY, Impl, 1, 2, false, ops::incdec::iny),

        // EOR
        0x49 => entry!(EOR, Imm, 2, 2, false, ops::logic::eor),
        0x45 => entry!(EOR, ZP, 2, 3, false, ops::logic::eor),
        0x55 => entry!(EOR, ZPX, 2, 4, false, ops::logic::eor),
        0x4D => entry!(EOR, Abs, 3, 4, false, ops::logic::eor),
        0x5D => entry!(EOR, AbsX, 3, 4, true, ops::logic::eor),
        0x59 => entry!(EOR, AbsY, 3, 4, true, ops::logic::eor),
        0x41 => entry!(EOR, IndX, 2, 6, false, ops::logic::eor),
        0x51 => entry!(EOR, IndY, 2, 5, true, ops::logic::eor),

        // Flag ops
        0x18 => entry!(CLC, Impl, 1, 2, false, ops::flags::clc),
        0x38 => entry!(SEC, Impl, 1, 2, false, ops::flags::sec),
        0x58 => entry!(CLI, Impl, 1, 2, false, ops::flags::cli),
        0x78 => entry!(SEI, Impl, 1, 2, false, ops::flags::sei),
        0xB8 => entry!(CLV, Impl, 1, 2, false, ops::flags::clv),
        0xD8 => entry!(CLD, Impl, 1, 2, false, ops::flags::cld),
        0xF8 => entry!(SED, Impl, 1, 2, false, ops::flags::sed),

        // JMP / JSR
        0x4C => entry!(JMP, Abs, 3, 3, false, ops::jump::jmp),
        0x6C => entry!(JMP, AbsInd, 3, 5, false, ops::jump::jmp),
        0x20 => entry!(JSR, Abs, 3, 6, false, ops::jump::jsr),

        // LDA / LDX / LDY
        0xA9 => entry!(LDA, Imm, 2, 2, false, ops::load_store::lda),
        0xA5 => entry!(LDA, ZP, 2, 3, false, ops::load_store::lda),
        0xB5 => entry!(LDA, ZPX, 2, 4, false, ops::load_store::lda),
        0xAD => entry!(LDA, Abs, 3, 4, false, ops::load_store::lda),
        0xBD => entry!(LDA, AbsX, 3, 4, true, ops::load_store::lda),
        0xB9 => entry!(LDA, AbsY, 3, 4, true, ops::load_store::lda),
        0xA1 => entry!(LDA, IndX, 2, 6, false, ops::load_store::lda),
        0xB1 => entry!(LDA, IndY, 2, 5, true, ops::load_store::lda),
        0xA2 => entry!(LDX, Imm, 2, 2, false, ops::load_store::ldx),
        0xA6 => entry!(LDX, ZP, 2, 3, false, ops::load_store::ldx),
        0xB6 => entry!(LDX, ZPY, 2, 4, false, ops::load_store::ldx),
        0xAE => entry!(LDX, Abs, 3, 4, false, ops::load_store::ldx),
        0xBE => entry!(LDX, AbsY, 3, 4, true, ops::load_store::ldx),
        0xA0 => entry!(LDY, Imm, 2, 2, false, ops::load_store::ldy),
        0xA4 => entry!(LDY, ZP, 2, 3, false, ops::load_store::ldy),
        0xB4 => entry!(LDY, ZPX, 2, 4, false, ops::load_store::ldy),
        0xAC => entry!(LDY, Abs, 3, 4, false, ops::load_store::ldy),
        0xBC => entry!(LDY, AbsX, 3, 4, true, ops::load_store::ldy),

        // LSR
        0x4A => entry!(LSR, Accum, 1, 2, false, ops::shift::lsr),
        0x46 => entry!(LSR, ZP, 2, 5, false, ops::shift::lsr),
        0x56 => entry!(LSR, ZPX, 2, 6, false, ops::shift::lsr),
        0x4E => entry!(LSR, Abs, 3, 6, false, ops::shift::lsr),
        0x5E => entry!(LSR, AbsX, 3, 7, false, ops::shift::lsr),

        // NOP
        0xEA => entry!(NOP, Impl, 1, 2, false, ops::system::nop),

        // ORA
        0x09 => entry!(ORA, Imm, 2, 2, false, ops::logic::ora),
        0x05 => entry!(ORA, ZP, 2, 3, false, ops::logic::ora),
        0x15 => entry!(ORA, ZPX, 2, 4, false, ops::logic::ora),
        0x0D => entry!(ORA, Abs, 3, 4, false, ops::logic::ora),
        0x1D => entry!(ORA, AbsX, 3, 4, true, ops::logic::ora),
        0x19 => entry!(ORA, AbsY, 3, 4, true, ops::logic::ora),
        0x01 => entry!(ORA, IndX, 2, 6, false, ops::logic::ora),
        0x11 => entry!(ORA, IndY, 2, 5, true, ops::logic::ora),

        // Register transfers
        0xAA => entry!(TAX, Impl, 1, 2, false, ops::transfer::tax),
        0x8A => entry!(TXA, Impl, 1, 2, false, ops::transfer::txa),
        0xA8 => entry!(TAY, Impl, 1, 2, false, ops::transfer::tay),
        0x98 => entry!(TYA, Impl, 1, 2, false, ops::transfer::tya),
        0xBA => entry!(TSX, Impl, 1, 2, false, ops::transfer::tsx),
        0x9A => entry!(TXS, Impl, 1, 2, false, ops::transfer::txs),

        // ROL / ROR
        0x2A => entry!(ROL, Accum, 1, 2, false, ops::shift::rol),
        0x26 => entry!(ROL, ZP, 2, 5, false, ops::shift::rol),
        0x36 => entry!(ROL, ZPX, 2, 6, false, ops::shift::rol),
        0x2E => entry!(ROL, Abs, 3, 6, false, ops::shift::rol),
        0x3E => entry!(ROL, AbsX, 3, 7, false, ops::shift::rol),
        0x6A => entry!(ROR, Accum, 1, 2, false, ops::shift::ror),
        0x66 => entry!(ROR, ZP, 2, 5, false, ops::shift::ror),
        0x76 => entry!(ROR, ZPX, 2, 6, false, ops::shift::ror),
        0x6E => entry!(ROR, Abs, 3, 6, false, ops::shift::ror),
        0x7E => entry!(ROR, AbsX, 3, 7, false, ops::shift::ror),

        // RTI / RTS
        0x40 => entry!(RTI, Impl, 1, 6, false, ops::jump::rti),
        0x60 => entry!(RTS, Impl, 1, 6, false, ops::jump::rts),

        // SBC
        0xE9 => entry!(SBC, Imm, 2, 2, false, ops::arithmetic::sbc),
        0xE5 => entry!(SBC, ZP, 2, 3, false, ops::arithmetic::sbc),
        0xF5 => entry!(SBC, ZPX, 2, 4, false, ops::arithmetic::sbc),
        0xED => entry!(SBC, Abs, 3, 4, false, ops::arithmetic::sbc),
        0xFD => entry!(SBC, AbsX, 3, 4, true, ops::arithmetic::sbc),
        0xF9 => entry!(SBC, AbsY, 3, 4, true, ops::arithmetic::sbc),
        0xE1 => entry!(SBC, IndX, 2, 6, false, ops::arithmetic::sbc),
        0xF1 => entry!(SBC, IndY, 2, 5, true, ops::arithmetic::sbc),

        // STA / STX / STY
        0x85 => entry!(STA, ZP, 2, 3, false, ops::load_store::sta),
        0x95 => entry!(STA, ZPX, 2, 4, false, ops::load_store::sta),
        0x8D => entry!(STA, Abs, 3, 4, false, ops::load_store::sta),
        0x9D => entry!(STA, AbsX, 3, 5, false, ops::load_store::sta),
        0x99 => entry!(STA, AbsY, 3, 5, false, ops::load_store::sta),
        0x81 => entry!(STA, IndX, 2, 6, false, ops::load_store::sta),
        0x91 => entry!(STA, IndY, 2, 6, false, ops::load_store::sta),
        0x86 => entry!(STX, ZP, 2, 3, false, ops::load_store::stx),
        0x96 => entry!(STX, ZPY, 2, 4, false, ops::load_store::stx),
        0x8E => entry!(STX, Abs, 3, 4, false, ops::load_store::stx),
        0x84 => entry!(STY, ZP, 2, 3, false, ops::load_store::sty),
        0x94 => entry!(STY, ZPX, 2, 4, false, ops::load_store::sty),
        0x8C => entry!(STY, Abs, 3, 4, false, ops::load_store::sty),

        // Stack ops
        0x48 => entry!(PHA, Impl, 1, 3, false, ops::stack::pha),
        0x08 => entry!(PHP, Impl, 1, 3, false, ops::stack::php),
        0x68 => entry!(PLA, Impl, 1, 4, false, ops::stack::pla),
        0x28 => entry!(PLP, Impl, 1, 4, false, ops::stack::plp),

        _ => None,
    }
}

const fn build_table() -> [Option<OpcodeEntry>; 256] {
    let mut table: [Option<OpcodeEntry>; 256] = [None; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = decode(i as u8);
        i += 1;
    }
    table
}

/// The full opcode table, indexed by opcode byte, built once.
pub static OPCODE_TABLE: [Option<OpcodeEntry>; 256] = build_table();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nop() {
        let entry = OPCODE_TABLE[0xEA].expect("NOP must decode");
        assert_eq!(entry.mnemonic, Instruction::NOP);
        assert_eq!(entry.bytes, 1);
        assert_eq!(entry.base_cycles, 2);
    }

    #[test]
    fn rejects_unofficial_opcode() {
        // 0x02 (KIL/JAM) has no legal encoding.
        assert!(OPCODE_TABLE[0x02].is_none());
    }

    #[test]
    fn table_has_151_legal_entries() {
        let count = OPCODE_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(count, 151);
    }
}
