// PPU memory map - decodes the 14-bit PPU address space
//
// ```text
// $0000-$1FFF: pattern tables, delegated to the cartridge CHR map
// $2000-$2FFF: four 1KB nametables, folded by the mirroring mode
// $3000-$3EFF: mirror of $2000-$2EFF
// $3F00-$3FFF: 32 bytes of palette RAM, mirrored every 32 bytes
// ```

use super::constants::{NAMETABLE_SIZE, PALETTE_SIZE};
use crate::bus::PpuBus;
use crate::cartridge::{ChrMap, Mirroring};

/// Concrete [`PpuBus`] wrapping the cartridge CHR map, nametable VRAM and
/// palette RAM.
///
/// VRAM is 4KB so four-screen cartridges get all four tables; the two-bank
/// modes fold into the first 2KB.
pub struct PpuMemoryMap {
    chr: Box<dyn ChrMap>,
    vram: [u8; NAMETABLE_SIZE * 4],
    palette: [u8; PALETTE_SIZE],
    mirroring: Mirroring,
}

impl PpuMemoryMap {
    pub fn new(chr: Box<dyn ChrMap>, mirroring: Mirroring) -> Self {
        PpuMemoryMap {
            chr,
            vram: [0; NAMETABLE_SIZE * 4],
            palette: [0; PALETTE_SIZE],
            mirroring,
        }
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    /// Fold a nametable address into physical VRAM.
    ///
    /// Horizontal mirroring folds table 1 onto 0 and 3 onto 2; vertical
    /// folds 2 onto 0 and 3 onto 1; four-screen keeps all four.
    fn nametable_index(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let bank = match self.mirroring {
            Mirroring::Horizontal => table >> 1,
            Mirroring::Vertical => table & 1,
            Mirroring::FourScreen => table,
        };

        bank * NAMETABLE_SIZE + offset
    }

    /// Fold a palette address into the 32-byte palette RAM.
    ///
    /// $3F10/$3F14/$3F18/$3F1C alias $3F00/$3F04/$3F08/$3F0C.
    fn palette_index(addr: u16) -> usize {
        let index = (addr & 0x001F) as usize;
        if index >= 16 && index % 4 == 0 {
            index - 16
        } else {
            index
        }
    }
}

impl PpuBus for PpuMemoryMap {
    fn read_byte(&mut self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => self.chr.read_byte(addr),
            0x2000..=0x3EFF => self.vram[self.nametable_index(addr)],
            0x3F00..=0x3FFF => self.palette[Self::palette_index(addr)],
            _ => unreachable!(),
        }
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => self.chr.write_byte(addr, value),
            0x2000..=0x3EFF => self.vram[self.nametable_index(addr)] = value,
            0x3F00..=0x3FFF => self.palette[Self::palette_index(addr)] = value,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::mappers::ChrNrom;

    fn map(mirroring: Mirroring) -> PpuMemoryMap {
        PpuMemoryMap::new(Box::new(ChrNrom::new(vec![0; 0x2000], true)), mirroring)
    }

    #[test]
    fn chr_region_delegates_to_the_mapper() {
        let mut map = map(Mirroring::Horizontal);
        map.write_byte(0x0000, 0x42);
        map.write_byte(0x1FFF, 0x99);
        assert_eq!(map.read_byte(0x0000), 0x42);
        assert_eq!(map.read_byte(0x1FFF), 0x99);
    }

    #[test]
    fn horizontal_mirroring_folds_1_onto_0_and_3_onto_2() {
        let mut map = map(Mirroring::Horizontal);

        map.write_byte(0x2000, 0x11);
        assert_eq!(map.read_byte(0x2400), 0x11, "table 1 aliases table 0");

        map.write_byte(0x2800, 0x22);
        assert_eq!(map.read_byte(0x2C00), 0x22, "table 3 aliases table 2");

        assert_ne!(map.read_byte(0x2800), map.read_byte(0x2000));
    }

    #[test]
    fn vertical_mirroring_folds_2_onto_0_and_3_onto_1() {
        let mut map = map(Mirroring::Vertical);

        map.write_byte(0x2000, 0x11);
        assert_eq!(map.read_byte(0x2800), 0x11, "table 2 aliases table 0");

        map.write_byte(0x2400, 0x22);
        assert_eq!(map.read_byte(0x2C00), 0x22, "table 3 aliases table 1");
    }

    #[test]
    fn four_screen_keeps_all_tables_distinct() {
        let mut map = map(Mirroring::FourScreen);
        map.write_byte(0x2000, 0x01);
        map.write_byte(0x2400, 0x02);
        map.write_byte(0x2800, 0x03);
        map.write_byte(0x2C00, 0x04);

        assert_eq!(map.read_byte(0x2000), 0x01);
        assert_eq!(map.read_byte(0x2400), 0x02);
        assert_eq!(map.read_byte(0x2800), 0x03);
        assert_eq!(map.read_byte(0x2C00), 0x04);
    }

    #[test]
    fn region_3000_aliases_2000() {
        let mut map = map(Mirroring::Horizontal);
        map.write_byte(0x2123, 0x55);
        assert_eq!(map.read_byte(0x3123), 0x55);

        map.write_byte(0x3456, 0x66);
        assert_eq!(map.read_byte(0x2456), 0x66);
    }

    #[test]
    fn palette_mirrors_every_32_bytes() {
        let mut map = map(Mirroring::Horizontal);
        map.write_byte(0x3F01, 0x2A);
        assert_eq!(map.read_byte(0x3F21), 0x2A);
        assert_eq!(map.read_byte(0x3FE1), 0x2A);
    }

    #[test]
    fn sprite_backdrop_entries_alias_background_ones() {
        let mut map = map(Mirroring::Horizontal);
        map.write_byte(0x3F10, 0x15);
        assert_eq!(map.read_byte(0x3F00), 0x15);

        map.write_byte(0x3F04, 0x16);
        assert_eq!(map.read_byte(0x3F14), 0x16);

        // Non-multiple-of-four sprite entries stay separate
        map.write_byte(0x3F11, 0x17);
        assert_ne!(map.read_byte(0x3F01), 0x17);
    }

    #[test]
    fn palette_reads_are_stable() {
        let mut map = map(Mirroring::Horizontal);
        map.write_byte(0x3F08, 0x31);
        assert_eq!(map.read_byte(0x3F08), map.read_byte(0x3F08));
    }
}
