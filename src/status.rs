//! The processor status register.

use bitflags::bitflags;

bitflags! {
    /// The eight 6502 status flags, packed `NVUBDIZC` from bit 7 to bit 0.
    pub struct Status: u8 {
        const CARRY        = 0x01;
        const ZERO         = 0x02;
        const IRQ_DISABLE  = 0x04;
        const DECIMAL      = 0x08;
        const BREAK        = 0x10;
        const UNUSED       = 0x20;
        const OVERFLOW     = 0x40;
        const NEGATIVE     = 0x80;
    }
}

impl Status {
    /// The packed value the CPU carries after power-on/reset: I and U set.
    pub const POWERON: Status = Status::from_bits_truncate(0x24);

    /// The byte PHP/BRK actually push: bits 5 (U) and 4 (B) forced to 1.
    pub fn pushed_byte(self) -> u8 {
        (self | Status::UNUSED | Status::BREAK).bits()
    }

    /// Replace the flags from a popped byte. U and B only ever exist inside
    /// a pushed copy of the status byte: U always reads back as set, and B
    /// is not a persistent flag at all, so it is dropped here.
    pub fn load_popped_byte(byte: u8) -> Status {
        (Status::from_bits_truncate(byte) | Status::UNUSED) & !Status::BREAK
    }
}
