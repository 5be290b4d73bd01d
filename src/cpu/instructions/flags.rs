// Flag manipulation instructions: CLC, CLD, CLI, CLV, SEC, SED, SEI

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::{flags, Cpu};

impl<B: CpuBus> Cpu<B> {
    pub(crate) fn clc(&mut self, mode: AddressingMode) -> u8 {
        self.clear_flag(flags::CARRY);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn cld(&mut self, mode: AddressingMode) -> u8 {
        self.clear_flag(flags::DECIMAL);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn cli(&mut self, mode: AddressingMode) -> u8 {
        self.clear_flag(flags::INTERRUPT_DISABLE);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn clv(&mut self, mode: AddressingMode) -> u8 {
        self.clear_flag(flags::OVERFLOW);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn sec(&mut self, mode: AddressingMode) -> u8 {
        self.set_flag(flags::CARRY);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn sed(&mut self, mode: AddressingMode) -> u8 {
        self.set_flag(flags::DECIMAL);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn sei(&mut self, mode: AddressingMode) -> u8 {
        self.set_flag(flags::INTERRUPT_DISABLE);
        self.advance_pc(mode);
        0
    }
}
