// Load and store instructions: LDA, LDX, LDY, STA, STX, STY

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::Cpu;

impl<B: CpuBus> Cpu<B> {
    /// LDA - load accumulator, setting Z and N.
    pub(crate) fn lda(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.a = self.read_operand(resolved.operand);
        self.update_zero_and_negative_flags(self.a);
        self.advance_pc(mode);
        resolved.page_crossed as u8
    }

    /// LDX - load X register.
    pub(crate) fn ldx(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.x = self.read_operand(resolved.operand);
        self.update_zero_and_negative_flags(self.x);
        self.advance_pc(mode);
        resolved.page_crossed as u8
    }

    /// LDY - load Y register.
    pub(crate) fn ldy(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.y = self.read_operand(resolved.operand);
        self.update_zero_and_negative_flags(self.y);
        self.advance_pc(mode);
        resolved.page_crossed as u8
    }

    /// STA - store accumulator. No flags.
    pub(crate) fn sta(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.write_operand(resolved.operand, self.a);
        self.advance_pc(mode);
        0
    }

    /// STX - store X register. No flags.
    pub(crate) fn stx(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.write_operand(resolved.operand, self.x);
        self.advance_pc(mode);
        0
    }

    /// STY - store Y register. No flags.
    pub(crate) fn sty(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        self.write_operand(resolved.operand, self.y);
        self.advance_pc(mode);
        0
    }
}
