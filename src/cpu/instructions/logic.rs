// Logical instructions: AND, ORA, EOR, BIT

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::{flags, Cpu};

impl<B: CpuBus> Cpu<B> {
    pub(crate) fn and(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.a &= self.read_operand(resolved.operand);
        self.update_zero_and_negative_flags(self.a);
        self.advance_pc(mode);
        resolved.page_crossed as u8
    }

    pub(crate) fn ora(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.a |= self.read_operand(resolved.operand);
        self.update_zero_and_negative_flags(self.a);
        self.advance_pc(mode);
        resolved.page_crossed as u8
    }

    pub(crate) fn eor(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.a ^= self.read_operand(resolved.operand);
        self.update_zero_and_negative_flags(self.a);
        self.advance_pc(mode);
        resolved.page_crossed as u8
    }

    /// BIT: Z from `A & M`, but V and N are copied from bits 6 and 7 of
    /// the memory operand itself.
    pub(crate) fn bit(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        let value = self.read_operand(resolved.operand);

        self.update_flag(flags::ZERO, self.a & value == 0);
        self.update_flag(flags::OVERFLOW, value & 0x40 != 0);
        self.update_flag(flags::NEGATIVE, value & 0x80 != 0);

        self.advance_pc(mode);
        0
    }
}
