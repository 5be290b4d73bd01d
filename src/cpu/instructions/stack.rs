// Stack instructions: PHA, PHP, PLA, PLP

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::{flags, Cpu};

impl<B: CpuBus> Cpu<B> {
    pub(crate) fn pha(&mut self, mode: AddressingMode) -> u8 {
        self.stack_push(self.a);
        self.advance_pc(mode);
        0
    }

    /// PHP pushes P with both B bits set; they exist only on the stack.
    pub(crate) fn php(&mut self, mode: AddressingMode) -> u8 {
        self.stack_push(self.status | flags::B1 | flags::B2);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn pla(&mut self, mode: AddressingMode) -> u8 {
        self.a = self.stack_pop();
        self.update_zero_and_negative_flags(self.a);
        self.advance_pc(mode);
        0
    }

    /// PLP restores every flag except B1/B2, which are masked away.
    pub(crate) fn plp(&mut self, mode: AddressingMode) -> u8 {
        self.status = self.stack_pop() & flags::B_MASK;
        self.advance_pc(mode);
        0
    }
}
