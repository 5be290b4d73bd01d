// Branch instructions: BCC, BCS, BEQ, BMI, BNE, BPL, BVC, BVS
//
// A branch resolves its target against the opcode address and then, taken
// or not, advances by the instruction size. A taken branch therefore
// lands at `opcode + 2 + sign_extend(offset)`.

use crate::bus::CpuBus;
use crate::cpu::addressing::{instruction_size, AddressingMode};
use crate::cpu::{flags, Cpu};

impl<B: CpuBus> Cpu<B> {
    /// Shared branch body. Taken branches cost one extra cycle, two when
    /// the final PC lands on a different page than the fallthrough.
    fn branch_on(&mut self, mode: AddressingMode, condition: bool) -> u8 {
        let target = self.resolve_address(mode);
        let fallthrough = self.pc.wrapping_add(instruction_size(mode));

        if condition {
            self.pc = target;
        }
        self.advance_pc(mode);

        if condition {
            1 + (((fallthrough ^ self.pc) & 0xFF00 != 0) as u8)
        } else {
            0
        }
    }

    pub(crate) fn bcc(&mut self, mode: AddressingMode) -> u8 {
        let taken = !self.get_flag(flags::CARRY);
        self.branch_on(mode, taken)
    }

    pub(crate) fn bcs(&mut self, mode: AddressingMode) -> u8 {
        let taken = self.get_flag(flags::CARRY);
        self.branch_on(mode, taken)
    }

    pub(crate) fn beq(&mut self, mode: AddressingMode) -> u8 {
        let taken = self.get_flag(flags::ZERO);
        self.branch_on(mode, taken)
    }

    pub(crate) fn bmi(&mut self, mode: AddressingMode) -> u8 {
        let taken = self.get_flag(flags::NEGATIVE);
        self.branch_on(mode, taken)
    }

    pub(crate) fn bne(&mut self, mode: AddressingMode) -> u8 {
        let taken = !self.get_flag(flags::ZERO);
        self.branch_on(mode, taken)
    }

    pub(crate) fn bpl(&mut self, mode: AddressingMode) -> u8 {
        let taken = !self.get_flag(flags::NEGATIVE);
        self.branch_on(mode, taken)
    }

    pub(crate) fn bvc(&mut self, mode: AddressingMode) -> u8 {
        let taken = !self.get_flag(flags::OVERFLOW);
        self.branch_on(mode, taken)
    }

    pub(crate) fn bvs(&mut self, mode: AddressingMode) -> u8 {
        let taken = self.get_flag(flags::OVERFLOW);
        self.branch_on(mode, taken)
    }
}
