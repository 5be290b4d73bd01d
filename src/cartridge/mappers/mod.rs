// Mappers module - per-cartridge memory mapping circuits
//
// A mapper satisfies both buses for cartridge-mapped regions. It is split
// along the bus boundary: a [`PrgMapper`] for the CPU side and a [`ChrMap`]
// for the PPU side, built together by the factory below.

mod mapper0;

pub use mapper0::{ChrNrom, PrgNrom};

use super::{Cartridge, ChrMap, Mirroring, PrgMapper};
use crate::error::EmulatorError;

/// Both halves of an instantiated mapper plus the nametable arrangement the
/// cartridge dictates.
pub struct MapperSet {
    pub prg: Box<dyn PrgMapper>,
    pub chr: Box<dyn ChrMap>,
    pub mirroring: Mirroring,
}

impl std::fmt::Debug for MapperSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperSet")
            .field("mirroring", &self.mirroring)
            .finish_non_exhaustive()
    }
}

/// Instantiate the mapper named by the cartridge header.
///
/// Only mapper 0 (NROM) is implemented; anything else reports
/// `UnsupportedMapper`.
pub fn create_mapper(cartridge: Cartridge) -> Result<MapperSet, EmulatorError> {
    match cartridge.header.mapper {
        0 => mapper0::build(cartridge),
        number => Err(EmulatorError::UnsupportedMapper(number)),
    }
}
