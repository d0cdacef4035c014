//! The iNES v1 ROM header parser and PRG loader.
//!
//! Parsing never touches a `Cpu`; the loader that follows is the only piece
//! that writes into `mem[0x8000..]` and sets up the conformance fixture's
//! fixed entry point.

use bitflags::bitflags;

use crate::cpu::Cpu;
use crate::error::RomError;

const HEADER_LEN: usize = 16;
const TRAINER_LEN: usize = 512;
const MAGIC: [u8; 4] = [b'N', b'E', b'S', 0x1A];

bitflags! {
    /// Flag byte 6 of the iNES header.
    pub struct INesFlags6: u8 {
        /// 0 = horizontal mirroring, 1 = vertical.
        const VERTICAL_MIRRORING = 0x01;
        const BATTERY_BACKED_RAM = 0x02;
        const TRAINER_PRESENT    = 0x04;
        const FOUR_SCREEN_VRAM   = 0x08;
        const MAPPER_LOW_MASK    = 0xF0;
    }
}

bitflags! {
    /// Flag byte 7 of the iNES header.
    pub struct INesFlags7: u8 {
        const VS_UNISYSTEM    = 0x01;
        const NES2_MARKER_MASK = 0x0C;
        const MAPPER_HIGH_MASK = 0xF0;
    }
}

/// A parsed iNES v1 header plus the PRG/CHR payloads that followed it.
pub struct Rom {
    pub prg_size_units: u8,
    pub chr_size_units: u8,
    pub flags6: INesFlags6,
    pub flags7: INesFlags7,
    pub mapper: u8,
    pub pal: bool,
    pub prg: Vec<u8>,
    pub chr: Vec<u8>,
}

impl Rom {
    pub fn vertical_mirroring(&self) -> bool {
        self.flags6.contains(INesFlags6::VERTICAL_MIRRORING)
    }

    pub fn is_nes2(&self) -> bool {
        (self.flags7.bits() & INesFlags7::NES2_MARKER_MASK.bits()) == 0x08
    }

    /// Parses a complete iNES v1 image: 16-byte header, optional 512-byte
    /// trainer, then `prg_size_units * 16KiB` of PRG and
    /// `chr_size_units * 8KiB` of CHR.
    pub fn parse(data: &[u8]) -> Result<Rom, RomError> {
        if data.len() < HEADER_LEN {
            return Err(RomError::ShortRead {
                wanted: HEADER_LEN,
                got: data.len(),
                field: "header",
            });
        }

        if data[0..4] != MAGIC {
            return Err(RomError::BadMagic);
        }

        let prg_size_units = data[4];
        let chr_size_units = data[5];
        let flags6 = INesFlags6::from_bits_truncate(data[6]);
        let flags7 = INesFlags7::from_bits_truncate(data[7]);
        let pal = data.get(9).map(|b| b & 0x01 != 0).unwrap_or(false);

        // Mapper low nibble is flags6 bits 4-7; high nibble is flags7 bits 4-7.
        let mapper = (flags7.bits() & 0xF0) | (flags6.bits() >> 4);

        let mut offset = HEADER_LEN;
        if flags6.contains(INesFlags6::TRAINER_PRESENT) {
            if data.len() < offset + TRAINER_LEN {
                return Err(RomError::ShortRead {
                    wanted: TRAINER_LEN,
                    got: data.len() - offset,
                    field: "trainer",
                });
            }
            offset += TRAINER_LEN;
        }

        let prg_len = prg_size_units as usize * 16 * 1024;
        if data.len() < offset + prg_len {
            return Err(RomError::ShortRead {
                wanted: prg_len,
                got: data.len().saturating_sub(offset),
                field: "PRG ROM",
            });
        }
        let prg = data[offset..offset + prg_len].to_vec();
        offset += prg_len;

        let chr_len = chr_size_units as usize * 8 * 1024;
        if data.len() < offset + chr_len {
            return Err(RomError::ShortRead {
                wanted: chr_len,
                got: data.len().saturating_sub(offset),
                field: "CHR ROM",
            });
        }
        let chr = data[offset..offset + chr_len].to_vec();

        Ok(Rom {
            prg_size_units,
            chr_size_units,
            flags6,
            flags7,
            mapper,
            pal,
            prg,
            chr,
        })
    }

    /// Copies PRG into `mem[0x8000..]`, mirroring a single 16KiB bank at
    /// `mem[0xC000..]` so a NROM image with only one PRG bank appears at
    /// both halves of the cartridge window. Does not touch `PC` or flags;
    /// callers that want the conformance fixture's fixed entry point call
    /// `Cpu::set_pc(0xC000)` themselves afterward.
    pub fn load_into(&self, cpu: &mut Cpu) {
        let base = 0x8000usize;
        for (i, byte) in self.prg.iter().enumerate() {
            cpu.memory[base + (i % 0x8000)] = *byte;
        }
        if self.prg.len() <= 16 * 1024 {
            for (i, byte) in self.prg.iter().enumerate() {
                cpu.memory[0xC000 + i] = *byte;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_header(prg_units: u8, flags6: u8, flags7: u8) -> Vec<u8> {
        let mut header = vec![b'N', b'E', b'S', 0x1A, prg_units, 0, flags6, flags7, 0, 0];
        header.resize(HEADER_LEN, 0);
        header
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = minimal_header(1, 0, 0);
        data[0] = b'X';
        match Rom::parse(&data) {
            Err(RomError::BadMagic) => {}
            other => panic!("expected BadMagic, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn parses_mapper_from_split_nibbles() {
        let mut data = minimal_header(1, 0x10, 0x20);
        data.extend(std::iter::repeat(0u8).take(16 * 1024));
        let rom = Rom::parse(&data).unwrap();
        assert_eq!(rom.mapper, 0x21);
    }

    #[test]
    fn detects_truncated_prg() {
        let mut data = minimal_header(2, 0, 0);
        data.extend(std::iter::repeat(0u8).take(16 * 1024)); // only one bank, need two
        match Rom::parse(&data) {
            Err(RomError::ShortRead { field, .. }) => assert_eq!(field, "PRG ROM"),
            other => panic!("expected ShortRead, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn mirrors_single_bank_prg_at_c000() {
        let mut data = minimal_header(1, 0, 0);
        let mut prg = vec![0u8; 16 * 1024];
        prg[0] = 0xEA;
        data.extend(prg);
        let rom = Rom::parse(&data).unwrap();
        let mut cpu = Cpu::new();
        rom.load_into(&mut cpu);
        assert_eq!(cpu.memory[0x8000], 0xEA);
        assert_eq!(cpu.memory[0xC000], 0xEA);
    }
}
