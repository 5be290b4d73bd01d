// Emulator driver - wires CPU, PPU, bus and mapper together
//
// The driver loop alternates "CPU executes one instruction" with "PPU
// advances three dots per CPU cycle". The PPU's NMI report is forwarded to
// the CPU, which samples it before its next instruction; the one-
// instruction latency matches the cooperative model.

pub mod config;
pub mod screenshot;

use std::path::Path;

use crate::bus::{CpuBus, SystemBus};
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::Cartridge;
use crate::cpu::{vectors, Cpu};
use crate::error::EmulatorError;
use crate::ppu::memory::PpuMemoryMap;
use crate::ppu::Ppu;

pub use config::EmulatorConfig;
pub use screenshot::save_screenshot;

/// PPU dots per CPU cycle (NTSC).
const PPU_DOTS_PER_CPU_CYCLE: u32 = 3;

/// What one driver step produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInfo {
    /// CPU cycles the instruction consumed.
    pub cycles: u8,
    /// The PPU entered vertical blank during this step.
    pub nmi: bool,
    /// A full frame finished during this step.
    pub frame_complete: bool,
}

/// A complete machine: CPU owning the system bus, which owns the PPU and
/// the cartridge mapper halves.
pub struct Emulator {
    cpu: Cpu<SystemBus>,
}

impl std::fmt::Debug for Emulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emulator").finish_non_exhaustive()
    }
}

impl Emulator {
    /// Build a machine from a parsed cartridge. The entry point comes
    /// from the reset vector in PRG-ROM.
    pub fn from_cartridge(cartridge: Cartridge) -> Result<Self, EmulatorError> {
        let mapper = create_mapper(cartridge)?;

        let ppu_map = PpuMemoryMap::new(mapper.chr, mapper.mirroring);
        let ppu = Ppu::new(ppu_map);
        let mut bus = SystemBus::new(ppu, mapper.prg);

        let entry = bus.read_word(vectors::RESET);
        log::debug!("reset vector ${:04X}", entry);

        Ok(Emulator {
            cpu: Cpu::new(bus, entry),
        })
    }

    /// Load, parse and wire up an iNES ROM from disk.
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, EmulatorError> {
        let cartridge = Cartridge::from_ines_file(path)?;
        Self::from_cartridge(cartridge)
    }

    pub fn cpu(&self) -> &Cpu<SystemBus> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu<SystemBus> {
        &mut self.cpu
    }

    /// The PPU's 256x240 RGBA framebuffer.
    pub fn framebuffer(&self) -> &[u8] {
        self.cpu.bus().ppu().framebuffer()
    }

    /// Execute one CPU instruction and advance the PPU three dots per
    /// consumed cycle, forwarding any NMI back to the CPU.
    pub fn step(&mut self) -> Result<StepInfo, EmulatorError> {
        let frame_before = self.cpu.bus().ppu().frame_count();
        let cycles = self.cpu.execute_instruction()?;

        let mut nmi = false;
        for _ in 0..(cycles as u32 * PPU_DOTS_PER_CPU_CYCLE) {
            nmi |= self.cpu.bus_mut().ppu_mut().cycle().nmi;
        }

        if nmi {
            self.cpu.request_nmi();
        }

        Ok(StepInfo {
            cycles,
            nmi,
            frame_complete: self.cpu.bus().ppu().frame_count() != frame_before,
        })
    }

    /// Step until the PPU completes the current frame.
    pub fn run_frame(&mut self) -> Result<(), EmulatorError> {
        loop {
            if self.step()?.frame_complete {
                return Ok(());
            }
        }
    }
}
