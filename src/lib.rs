// rnes - a partial NES emulator
//
// The engineering core is the cycle-level emulation of a 6502-class CPU
// and a PPU sharing cartridge storage through a mapper. Both cores are
// written against narrow bus traits; the system bus and the PPU memory
// map do all address decoding.

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod emulator;
pub mod error;
pub mod ppu;
pub mod ram;

// Re-export the main types for convenience
pub use bus::{CpuBus, PpuBus, SystemBus};
pub use cartridge::{Cartridge, ChrMap, InesHeader, Mirroring, PrgMapper};
pub use cpu::{Cpu, CpuRegisters};
pub use debug::{
    disassemble_count, disassemble_instruction, disassemble_range, CpuDebugger,
    DisassembledInstruction,
};
pub use emulator::{Emulator, EmulatorConfig, StepInfo};
pub use error::EmulatorError;
pub use ppu::memory::PpuMemoryMap;
pub use ppu::{CycleInfo, Ppu};
pub use ram::Ram;
