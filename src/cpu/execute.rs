// Instruction execution - fetch, decode, dispatch
//
// One public operation: execute a single instruction. Pending interrupts
// are sampled first; if one is accepted no instruction runs this call.

use crate::bus::CpuBus;
use crate::cpu::opcodes::{Mnemonic, OpcodeInfo, OPCODE_TABLE};
use crate::cpu::Cpu;
use crate::error::EmulatorError;

/// Cycles consumed by an accepted interrupt sequence.
const INTERRUPT_CYCLES: u8 = 7;

impl<B: CpuBus> Cpu<B> {
    /// Execute one instruction (or accept one pending interrupt) and
    /// report the cycles consumed.
    ///
    /// An undecodable opcode is a fatal error; the CPU state is left at
    /// the failed fetch so the debugger can inspect it.
    pub fn execute_instruction(&mut self) -> Result<u8, EmulatorError> {
        if self.handle_interrupts() {
            self.add_cycles(INTERRUPT_CYCLES);
            return Ok(INTERRUPT_CYCLES);
        }

        let opcode = self.bus.read_byte(self.pc);
        let info = OPCODE_TABLE[opcode as usize].ok_or(EmulatorError::InvalidOpcode {
            opcode,
            address: self.pc,
        })?;

        let extra = self.dispatch(info);
        let cycles = info.cycles + extra;
        self.add_cycles(cycles);
        Ok(cycles)
    }

    /// Central dispatch over the instruction enumeration. Each handler
    /// resolves its own operand, performs the effect, manages `PC`, and
    /// returns any extra cycles (page crossings, taken branches).
    fn dispatch(&mut self, info: OpcodeInfo) -> u8 {
        let mode = info.mode;
        match info.mnemonic {
            // Loads and stores
            Mnemonic::Lda => self.lda(mode),
            Mnemonic::Ldx => self.ldx(mode),
            Mnemonic::Ldy => self.ldy(mode),
            Mnemonic::Sta => self.sta(mode),
            Mnemonic::Stx => self.stx(mode),
            Mnemonic::Sty => self.sty(mode),

            // Register transfers
            Mnemonic::Tax => self.tax(mode),
            Mnemonic::Tay => self.tay(mode),
            Mnemonic::Txa => self.txa(mode),
            Mnemonic::Tya => self.tya(mode),
            Mnemonic::Tsx => self.tsx(mode),
            Mnemonic::Txs => self.txs(mode),

            // Stack
            Mnemonic::Pha => self.pha(mode),
            Mnemonic::Php => self.php(mode),
            Mnemonic::Pla => self.pla(mode),
            Mnemonic::Plp => self.plp(mode),

            // Logic
            Mnemonic::And => self.and(mode),
            Mnemonic::Ora => self.ora(mode),
            Mnemonic::Eor => self.eor(mode),
            Mnemonic::Bit => self.bit(mode),

            // Arithmetic
            Mnemonic::Adc => self.adc(mode),
            Mnemonic::Sbc => self.sbc(mode),
            Mnemonic::Inc => self.inc(mode),
            Mnemonic::Inx => self.inx(mode),
            Mnemonic::Iny => self.iny(mode),
            Mnemonic::Dec => self.dec(mode),
            Mnemonic::Dex => self.dex(mode),
            Mnemonic::Dey => self.dey(mode),

            // Compares
            Mnemonic::Cmp => self.cmp(mode),
            Mnemonic::Cpx => self.cpx(mode),
            Mnemonic::Cpy => self.cpy(mode),

            // Shifts and rotates
            Mnemonic::Asl => self.asl(mode),
            Mnemonic::Lsr => self.lsr(mode),
            Mnemonic::Rol => self.rol(mode),
            Mnemonic::Ror => self.ror(mode),

            // Branches
            Mnemonic::Bcc => self.bcc(mode),
            Mnemonic::Bcs => self.bcs(mode),
            Mnemonic::Beq => self.beq(mode),
            Mnemonic::Bmi => self.bmi(mode),
            Mnemonic::Bne => self.bne(mode),
            Mnemonic::Bpl => self.bpl(mode),
            Mnemonic::Bvc => self.bvc(mode),
            Mnemonic::Bvs => self.bvs(mode),

            // Jumps and subroutines
            Mnemonic::Jmp => self.jmp(mode),
            Mnemonic::Jsr => self.jsr(mode),
            Mnemonic::Rts => self.rts(mode),

            // Flag manipulation
            Mnemonic::Clc => self.clc(mode),
            Mnemonic::Cld => self.cld(mode),
            Mnemonic::Cli => self.cli(mode),
            Mnemonic::Clv => self.clv(mode),
            Mnemonic::Sec => self.sec(mode),
            Mnemonic::Sed => self.sed(mode),
            Mnemonic::Sei => self.sei(mode),

            // Miscellaneous
            Mnemonic::Brk => self.brk(mode),
            Mnemonic::Nop => self.nop(mode),
            Mnemonic::Rti => self.rti(mode),
        }
    }
}
