//! Error types for the ROM loader and the interpreter's one fatal condition.
//!
//! Neither type derives from a macro crate: the loader's failures are a
//! small fixed set, and hand-writing `Display`/`Error` keeps that visible.

use std::error::Error;
use std::fmt;

/// A failure parsing or loading an iNES ROM image.
#[derive(Debug)]
pub enum RomError {
    /// The first four bytes were not `N`, `E`, `S`, `0x1A`.
    BadMagic,
    /// The file ended before the header, trainer, or PRG/CHR data finished.
    ShortRead { wanted: usize, got: usize, field: &'static str },
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomError::BadMagic => write!(f, "not an iNES ROM: missing 'NES\\x1A' magic"),
            RomError::ShortRead { wanted, got, field } => write!(
                f,
                "truncated ROM: {} needs {} bytes, only {} available",
                field, wanted, got
            ),
        }
    }
}

impl Error for RomError {}

/// The interpreter's one fatal condition: an opcode byte the table does not
/// recognize. Unlike a `RomError`, this is raised mid-execution and halts
/// the step loop.
#[derive(Debug)]
pub struct CpuFault {
    pub pc: u16,
    pub opcode: u8,
}

impl fmt::Display for CpuFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown opcode {:02X} at PC={:04X}",
            self.opcode, self.pc
        )
    }
}

impl Error for CpuFault {}
