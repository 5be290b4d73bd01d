// Jump and subroutine instructions: JMP, JSR, RTS

use crate::bus::CpuBus;
use crate::cpu::addressing::{instruction_size, AddressingMode};
use crate::cpu::Cpu;

impl<B: CpuBus> Cpu<B> {
    /// JMP - absolute or indirect jump.
    pub(crate) fn jmp(&mut self, mode: AddressingMode) -> u8 {
        self.pc = self.resolve_address(mode);
        0
    }

    /// JSR pushes the address of the instruction's last byte (`PC + 2`),
    /// not the return address itself; RTS compensates with its +1.
    pub(crate) fn jsr(&mut self, mode: AddressingMode) -> u8 {
        let return_point = self
            .pc
            .wrapping_add(instruction_size(mode))
            .wrapping_sub(1);
        let target = self.resolve_address(mode);
        self.stack_push_u16(return_point);
        self.pc = target;
        0
    }

    /// RTS pops 16 bits and adds 1 to obtain the return address.
    pub(crate) fn rts(&mut self, mode: AddressingMode) -> u8 {
        let _ = mode;
        self.pc = self.stack_pop_u16().wrapping_add(1);
        0
    }
}
