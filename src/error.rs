// Crate-wide error type
//
// Every failure the core can report is one of these variants. Errors bubble
// up to the frontend, which prints them and exits; the core never retries.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the emulator core.
#[derive(Debug, Error)]
pub enum EmulatorError {
    /// The CPU fetched a byte that is not a documented 6502 opcode.
    #[error("invalid opcode ${opcode:02X} at ${address:04X}")]
    InvalidOpcode { opcode: u8, address: u16 },

    /// The iNES magic did not match, or a structural constraint failed.
    #[error("not a valid iNES image: {0}")]
    InvalidFile(&'static str),

    /// The iNES parser ran past the end of the file.
    #[error("iNES image truncated: needed {needed} byte(s) at offset {offset}")]
    IndexOutOfRange { offset: usize, needed: usize },

    /// The cartridge requests a mapper this emulator does not implement.
    #[error("mapper {0} is not supported")]
    UnsupportedMapper(u16),

    /// The ROM file could not be opened or read.
    #[error("failed to open ROM file '{}'", path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
