// Register transfer instructions: TAX, TAY, TXA, TYA, TSX, TXS

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::Cpu;

impl<B: CpuBus> Cpu<B> {
    pub(crate) fn tax(&mut self, mode: AddressingMode) -> u8 {
        self.x = self.a;
        self.update_zero_and_negative_flags(self.x);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn tay(&mut self, mode: AddressingMode) -> u8 {
        self.y = self.a;
        self.update_zero_and_negative_flags(self.y);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn txa(&mut self, mode: AddressingMode) -> u8 {
        self.a = self.x;
        self.update_zero_and_negative_flags(self.a);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn tya(&mut self, mode: AddressingMode) -> u8 {
        self.a = self.y;
        self.update_zero_and_negative_flags(self.a);
        self.advance_pc(mode);
        0
    }

    pub(crate) fn tsx(&mut self, mode: AddressingMode) -> u8 {
        self.x = self.sp;
        self.update_zero_and_negative_flags(self.x);
        self.advance_pc(mode);
        0
    }

    /// TXS is the one transfer that never touches flags.
    pub(crate) fn txs(&mut self, mode: AddressingMode) -> u8 {
        self.sp = self.x;
        self.advance_pc(mode);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::CpuBus;
    use crate::cpu::{flags, Cpu};
    use crate::ram::Ram;

    fn run(opcode: u8, setup: impl FnOnce(&mut Cpu<Ram>)) -> Cpu<Ram> {
        let mut ram = Ram::new();
        ram.write_byte(0x0400, opcode);
        let mut cpu = Cpu::new(ram, 0x0400);
        setup(&mut cpu);
        cpu.execute_instruction().unwrap();
        cpu
    }

    #[test]
    fn tax_copies_and_sets_flags() {
        let cpu = run(0xAA, |cpu| cpu.a = 0x80);
        assert_eq!(cpu.x, 0x80);
        assert!(cpu.get_flag(flags::NEGATIVE));
        assert_eq!(cpu.pc, 0x0401);
    }

    #[test]
    fn txa_then_tax_is_idempotent() {
        // TXA; TAX leaves A = X = initial X, flags from it
        let mut ram = Ram::new();
        ram.load(0x0400, &[0x8A, 0xAA]);
        let mut cpu = Cpu::new(ram, 0x0400);
        cpu.x = 0x37;
        cpu.a = 0xFF;

        cpu.execute_instruction().unwrap();
        cpu.execute_instruction().unwrap();

        assert_eq!(cpu.a, 0x37);
        assert_eq!(cpu.x, 0x37);
        assert!(!cpu.get_flag(flags::ZERO));
        assert!(!cpu.get_flag(flags::NEGATIVE));
    }

    #[test]
    fn tay_and_tya() {
        let cpu = run(0xA8, |cpu| cpu.a = 0x00);
        assert_eq!(cpu.y, 0x00);
        assert!(cpu.get_flag(flags::ZERO));

        let cpu = run(0x98, |cpu| cpu.y = 0x42);
        assert_eq!(cpu.a, 0x42);
        assert!(!cpu.get_flag(flags::ZERO));
    }

    #[test]
    fn tsx_reads_the_stack_pointer() {
        let cpu = run(0xBA, |cpu| cpu.sp = 0xFD);
        assert_eq!(cpu.x, 0xFD);
        assert!(cpu.get_flag(flags::NEGATIVE));
    }

    #[test]
    fn txs_never_sets_flags() {
        let cpu = run(0x9A, |cpu| {
            cpu.x = 0x00;
            cpu.status = 0x00;
        });
        assert_eq!(cpu.sp, 0x00);
        assert_eq!(cpu.registers().status, 0x00, "TXS with zero X leaves Z clear");
    }
}
