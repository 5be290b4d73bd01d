// Miscellaneous instructions: BRK, NOP, RTI

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::{flags, Cpu};

impl<B: CpuBus> Cpu<B> {
    /// BRK latches the software interrupt, steps past its opcode, and
    /// takes the interrupt within the same instruction slot. The BRK
    /// interrupt path pushes `PC + 1`, so the pushed return address is
    /// the opcode address plus two.
    pub(crate) fn brk(&mut self, mode: AddressingMode) -> u8 {
        self.request_brk();
        self.advance_pc(mode);
        self.handle_interrupts();
        0
    }

    pub(crate) fn nop(&mut self, mode: AddressingMode) -> u8 {
        self.advance_pc(mode);
        0
    }

    /// RTI pops P (with the B bits forced clear) and then the 16-bit
    /// return PC, without the +1 adjustment RTS applies.
    pub(crate) fn rti(&mut self, mode: AddressingMode) -> u8 {
        let _ = mode;
        self.status = self.stack_pop() & flags::B_MASK;
        self.pc = self.stack_pop_u16();
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::CpuBus;
    use crate::cpu::{flags, vectors, Cpu};
    use crate::ram::Ram;

    fn cpu_with(pc: u16, bytes: &[u8]) -> Cpu<Ram> {
        let mut ram = Ram::new();
        ram.load(pc, bytes);
        let mut cpu = Cpu::new(ram, pc);
        cpu.sp = 0xFF;
        cpu
    }

    #[test]
    fn nop_only_advances() {
        let mut cpu = cpu_with(0x0400, &[0xEA]);
        let before = cpu.registers();
        cpu.execute_instruction().unwrap();

        assert_eq!(cpu.pc, 0x0401);
        assert_eq!(cpu.registers().status, before.status);
        assert_eq!(cpu.a, before.a);
        assert_eq!(cpu.sp, before.sp);
    }

    #[test]
    fn brk_then_rti_resumes_after_the_padding_byte() {
        let mut cpu = cpu_with(0x0400, &[0x00, 0xFF, 0xEA]);
        cpu.bus_mut().load(vectors::IRQ, &[0x00, 0x90]);
        cpu.bus_mut().write_byte(0x9000, 0x40); // RTI
        cpu.set_flag(flags::CARRY);

        cpu.execute_instruction().unwrap(); // BRK
        assert_eq!(cpu.pc, 0x9000);
        assert!(cpu.get_flag(flags::INTERRUPT_DISABLE));

        cpu.execute_instruction().unwrap(); // RTI
        assert_eq!(cpu.pc, 0x0402, "BRK return address skips one byte");
        assert!(cpu.get_flag(flags::CARRY), "flags restored from the stack");
        assert!(!cpu.get_flag(flags::B1));
        assert!(!cpu.get_flag(flags::B2));
        assert_eq!(cpu.sp, 0xFF);
    }

    #[test]
    fn rti_restores_p_before_pc() {
        let mut cpu = cpu_with(0x0400, &[0x40]);
        cpu.sp = 0xFC;
        // Stack image: status, then PC low, PC high
        cpu.bus_mut().write_byte(0x01FD, 0xFF);
        cpu.bus_mut().write_byte(0x01FE, 0x34);
        cpu.bus_mut().write_byte(0x01FF, 0x12);

        cpu.execute_instruction().unwrap();

        assert_eq!(cpu.pc, 0x1234, "no +1 adjustment on RTI");
        assert_eq!(cpu.registers().status, 0xFF & flags::B_MASK);
        assert_eq!(cpu.sp, 0xFF);
    }

    #[test]
    fn externally_requested_brk_is_taken_before_the_next_instruction() {
        let mut cpu = cpu_with(0x0400, &[0xEA]);
        cpu.bus_mut().load(vectors::IRQ, &[0x00, 0x90]);

        cpu.request_brk();
        cpu.execute_instruction().unwrap();

        assert_eq!(cpu.pc, 0x9000, "the NOP was preempted");
        // Pushed return address is PC + 1
        assert_eq!(cpu.bus_mut().read_byte(0x01FF), 0x04);
        assert_eq!(cpu.bus_mut().read_byte(0x01FE), 0x01);
    }
}
