// Compare instructions: CMP, CPX, CPY

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::{flags, Cpu};

impl<B: CpuBus> Cpu<B> {
    /// Shared compare: `C = reg >= M`, `Z = reg == M`, `N` from bit 7 of
    /// the difference.
    fn compare(&mut self, register: u8, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        let value = self.read_operand(resolved.operand);
        let result = register.wrapping_sub(value);

        self.update_flag(flags::CARRY, register >= value);
        self.update_flag(flags::ZERO, register == value);
        self.update_flag(flags::NEGATIVE, result & 0x80 != 0);

        self.advance_pc(mode);
        resolved.page_crossed as u8
    }

    pub(crate) fn cmp(&mut self, mode: AddressingMode) -> u8 {
        self.compare(self.a, mode)
    }

    pub(crate) fn cpx(&mut self, mode: AddressingMode) -> u8 {
        self.compare(self.x, mode)
    }

    pub(crate) fn cpy(&mut self, mode: AddressingMode) -> u8 {
        self.compare(self.y, mode)
    }
}
