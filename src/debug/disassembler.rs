// Disassembler - 6502 instruction disassembly
//
// Converts raw bytes into readable 6502 assembly through any CPU bus.

use crate::bus::CpuBus;
use crate::cpu::addressing::{instruction_size, sign_extend, AddressingMode};
use crate::cpu::opcodes::OPCODE_TABLE;

/// One disassembled instruction.
#[derive(Debug, Clone)]
pub struct DisassembledInstruction {
    /// Address of the opcode byte.
    pub address: u16,

    /// The opcode byte itself.
    pub opcode: u8,

    /// Mnemonic, or `"???"` for an undocumented opcode.
    pub mnemonic: &'static str,

    /// Addressing mode; `None` for undocumented opcodes.
    pub mode: Option<AddressingMode>,

    /// Operand bytes following the opcode.
    pub operands: Vec<u8>,

    /// Total length in bytes.
    pub length: u8,
}

impl DisassembledInstruction {
    /// Format as assembly, e.g. `LDA #$42` or `JMP $8000`.
    pub fn format_assembly(&self) -> String {
        let Some(mode) = self.mode else {
            return self.mnemonic.to_string();
        };

        let byte = |i: usize| self.operands.get(i).copied().unwrap_or(0);
        let word = || u16::from_le_bytes([byte(0), byte(1)]);

        let operand = match mode {
            AddressingMode::Implied | AddressingMode::Accumulator => String::new(),
            AddressingMode::Immediate => format!(" #${:02X}", byte(0)),
            AddressingMode::ZeroPage => format!(" ${:02X}", byte(0)),
            AddressingMode::ZeroPageX => format!(" ${:02X},X", byte(0)),
            AddressingMode::ZeroPageY => format!(" ${:02X},Y", byte(0)),
            AddressingMode::Absolute => format!(" ${:04X}", word()),
            AddressingMode::AbsoluteX => format!(" ${:04X},X", word()),
            AddressingMode::AbsoluteY => format!(" ${:04X},Y", word()),
            AddressingMode::Indirect => format!(" (${:04X})", word()),
            AddressingMode::IndexedIndirect => format!(" (${:02X},X)", byte(0)),
            AddressingMode::IndirectIndexed => format!(" (${:02X}),Y", byte(0)),
            AddressingMode::Relative => {
                let target = self
                    .address
                    .wrapping_add(2)
                    .wrapping_add(sign_extend(byte(0)));
                format!(" ${:04X}", target)
            }
        };

        format!("{}{}", self.mnemonic, operand)
    }

    /// Format the raw bytes, e.g. `4C 00 80`.
    pub fn format_bytes(&self) -> String {
        let mut result = format!("{:02X}", self.opcode);
        for operand in &self.operands {
            result.push_str(&format!(" {:02X}", operand));
        }
        result
    }
}

impl std::fmt::Display for DisassembledInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${:04X}  {:8}  {}",
            self.address,
            self.format_bytes(),
            self.format_assembly()
        )
    }
}

/// Disassemble the instruction at `addr`.
pub fn disassemble_instruction<B: CpuBus>(addr: u16, bus: &mut B) -> DisassembledInstruction {
    let opcode = bus.read_byte(addr);

    let Some(info) = OPCODE_TABLE[opcode as usize] else {
        return DisassembledInstruction {
            address: addr,
            opcode,
            mnemonic: "???",
            mode: None,
            operands: Vec::new(),
            length: 1,
        };
    };

    let length = instruction_size(info.mode) as u8;
    let operands = (1..length)
        .map(|i| bus.read_byte(addr.wrapping_add(i as u16)))
        .collect();

    DisassembledInstruction {
        address: addr,
        opcode,
        mnemonic: info.mnemonic.as_str(),
        mode: Some(info.mode),
        operands,
        length,
    }
}

/// Disassemble `count` consecutive instructions starting at `start`.
pub fn disassemble_count<B: CpuBus>(
    start: u16,
    count: usize,
    bus: &mut B,
) -> Vec<DisassembledInstruction> {
    let mut instructions = Vec::with_capacity(count);
    let mut addr = start;

    for _ in 0..count {
        let instruction = disassemble_instruction(addr, bus);
        addr = addr.wrapping_add(instruction.length as u16);
        instructions.push(instruction);
    }

    instructions
}

/// Disassemble every instruction from `start` through `end` inclusive.
pub fn disassemble_range<B: CpuBus>(
    start: u16,
    end: u16,
    bus: &mut B,
) -> Vec<DisassembledInstruction> {
    let mut instructions = Vec::new();
    let mut addr = start;

    while addr <= end {
        let instruction = disassemble_instruction(addr, bus);
        let next = addr.wrapping_add(instruction.length as u16);
        instructions.push(instruction);

        if next < addr {
            break; // wrapped past $FFFF
        }
        addr = next;
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ram::Ram;

    #[test]
    fn disassembles_each_addressing_mode() {
        let mut ram = Ram::new();

        let cases: &[(&[u8], &str)] = &[
            (&[0x18], "CLC"),
            (&[0x0A], "ASL"),
            (&[0xA9, 0x42], "LDA #$42"),
            (&[0xA5, 0x80], "LDA $80"),
            (&[0xB5, 0x80], "LDA $80,X"),
            (&[0xB6, 0x80], "LDX $80,Y"),
            (&[0xAD, 0x02, 0x20], "LDA $2002"),
            (&[0xBD, 0x00, 0x20], "LDA $2000,X"),
            (&[0xB9, 0x00, 0x20], "LDA $2000,Y"),
            (&[0x6C, 0x34, 0x12], "JMP ($1234)"),
            (&[0xA1, 0x40], "LDA ($40,X)"),
            (&[0xB1, 0x40], "LDA ($40),Y"),
        ];

        for (bytes, expected) in cases {
            ram.load(0x8000, bytes);
            let instr = disassemble_instruction(0x8000, &mut ram);
            assert_eq!(instr.format_assembly(), *expected);
            assert_eq!(instr.length as usize, bytes.len());
        }
    }

    #[test]
    fn relative_targets_include_the_instruction_size() {
        let mut ram = Ram::new();
        ram.load(0x8000, &[0xD0, 0x0A]); // BNE +10
        let instr = disassemble_instruction(0x8000, &mut ram);
        assert_eq!(instr.format_assembly(), "BNE $800C");

        ram.load(0x8010, &[0xF0, 0xF0]); // BEQ -16
        let instr = disassemble_instruction(0x8010, &mut ram);
        assert_eq!(instr.format_assembly(), "BEQ $8002");
    }

    #[test]
    fn undocumented_opcodes_show_as_unknown() {
        let mut ram = Ram::new();
        ram.write_byte(0x8000, 0x02);
        let instr = disassemble_instruction(0x8000, &mut ram);
        assert_eq!(instr.mnemonic, "???");
        assert_eq!(instr.length, 1);
        assert!(instr.mode.is_none());
    }

    #[test]
    fn format_bytes_lists_operands() {
        let mut ram = Ram::new();
        ram.load(0x8000, &[0x4C, 0x00, 0x80]);
        let instr = disassemble_instruction(0x8000, &mut ram);
        assert_eq!(instr.format_bytes(), "4C 00 80");
    }

    #[test]
    fn count_walks_variable_length_instructions() {
        let mut ram = Ram::new();
        ram.load(0x8000, &[0xEA, 0xA9, 0x42, 0x4C, 0x00, 0x80]);

        let instructions = disassemble_count(0x8000, 3, &mut ram);
        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0].address, 0x8000);
        assert_eq!(instructions[1].address, 0x8001);
        assert_eq!(instructions[2].address, 0x8003);
    }

    #[test]
    fn range_stops_at_the_end_address() {
        let mut ram = Ram::new();
        ram.load(0x8000, &[0xEA, 0xA9, 0x42, 0xEA]);

        let instructions = disassemble_range(0x8000, 0x8003, &mut ram);
        assert_eq!(instructions.len(), 3);
    }

    #[test]
    fn display_format_combines_address_bytes_and_assembly() {
        let mut ram = Ram::new();
        ram.write_byte(0x8000, 0x78);
        let line = format!("{}", disassemble_instruction(0x8000, &mut ram));
        assert!(line.contains("$8000"));
        assert!(line.contains("78"));
        assert!(line.contains("SEI"));
    }
}
