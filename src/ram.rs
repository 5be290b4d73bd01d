// Flat 64 KiB memory implementing the CPU bus contract.
//
// This is the substitutability seam in action: CPU unit tests and the
// standalone debugger harness run against this instead of the full system
// bus.

use crate::bus::CpuBus;

/// A flat 64 KiB byte array covering the whole CPU address space.
pub struct Ram {
    bytes: Box<[u8; 0x10000]>,
}

impl Ram {
    pub fn new() -> Self {
        Ram {
            bytes: Box::new([0; 0x10000]),
        }
    }

    /// Copy `data` into memory starting at `addr`, wrapping at $FFFF.
    pub fn load(&mut self, addr: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            let dest = addr.wrapping_add(i as u16);
            self.bytes[dest as usize] = byte;
        }
    }
}

impl CpuBus for Ram {
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}
