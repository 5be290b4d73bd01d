// PPU behavior tests, split by concern.

mod rendering;

use super::memory::PpuMemoryMap;
use super::Ppu;
use crate::cartridge::mappers::ChrNrom;
use crate::cartridge::Mirroring;

/// A PPU over writable CHR-RAM, the setup every test starts from.
fn test_ppu() -> Ppu<PpuMemoryMap> {
    let chr = ChrNrom::new(vec![0; 0x2000], true);
    Ppu::new(PpuMemoryMap::new(Box::new(chr), Mirroring::Horizontal))
}

/// Step the PPU to the given scanline and dot from power-on.
fn run_to(ppu: &mut Ppu<PpuMemoryMap>, scanline: u16, dot: u16) -> bool {
    let mut nmi_seen = false;
    while !(ppu.scanline() == scanline && ppu.dot() == dot) {
        nmi_seen |= ppu.cycle().nmi;
    }
    nmi_seen
}
