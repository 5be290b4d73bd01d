// Shift and rotate instructions: ASL, LSR, ROL, ROR
//
// All four work on the accumulator or a memory cell through the operand
// reference, so the read-modify-write path is written once per
// instruction.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::{flags, Cpu};

impl<B: CpuBus> Cpu<B> {
    /// ASL - shift left, 0 into bit 0, bit 7 into carry.
    pub(crate) fn asl(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        let value = self.read_operand(resolved.operand);
        let result = value << 1;
        self.write_operand(resolved.operand, result);

        self.update_flag(flags::CARRY, value & 0x80 != 0);
        self.update_zero_and_negative_flags(result);

        self.advance_pc(mode);
        0
    }

    /// LSR - shift right, 0 into bit 7, bit 0 into carry.
    pub(crate) fn lsr(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        let value = self.read_operand(resolved.operand);
        let result = value >> 1;
        self.write_operand(resolved.operand, result);

        self.update_flag(flags::CARRY, value & 0x01 != 0);
        self.update_zero_and_negative_flags(result);

        self.advance_pc(mode);
        0
    }

    /// ROL - rotate left through carry.
    pub(crate) fn rol(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        let value = self.read_operand(resolved.operand);
        let result = (value << 1) | self.get_flag(flags::CARRY) as u8;
        self.write_operand(resolved.operand, result);

        self.update_flag(flags::CARRY, value & 0x80 != 0);
        self.update_zero_and_negative_flags(result);

        self.advance_pc(mode);
        0
    }

    /// ROR - rotate right through carry.
    pub(crate) fn ror(&mut self, mode: AddressingMode) -> u8 {
        let resolved = self.resolve_operand(mode);
        let value = self.read_operand(resolved.operand);
        let result = (value >> 1) | ((self.get_flag(flags::CARRY) as u8) << 7);
        self.write_operand(resolved.operand, result);

        self.update_flag(flags::CARRY, value & 0x01 != 0);
        self.update_zero_and_negative_flags(result);

        self.advance_pc(mode);
        0
    }
}
