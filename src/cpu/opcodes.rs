// Opcode table - the 151 documented 6502 opcodes
//
// One process-wide constant table indexed by opcode byte. Invalid entries
// are `None`; fetching one is a fatal decode error.

use crate::cpu::addressing::AddressingMode;

/// Instruction mnemonics, one per documented 6502 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

impl Mnemonic {
    /// Assembly spelling, for the disassembler and trace output.
    pub fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

/// One decoded opcode table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Base cycle count. Value-reading instructions add one on a page
    /// cross; taken branches add their own penalty.
    pub cycles: u8,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Option<OpcodeInfo> {
    Some(OpcodeInfo {
        mnemonic,
        mode,
        cycles,
    })
}

use AddressingMode::*;
use Mnemonic::*;

/// The 256-entry decode table. Exactly 151 entries are populated.
pub const OPCODE_TABLE: [Option<OpcodeInfo>; 256] = [
    op(Brk, Implied, 7),          // 0x00
    op(Ora, IndexedIndirect, 6),  // 0x01
    None,                         // 0x02
    None,                         // 0x03
    None,                         // 0x04
    op(Ora, ZeroPage, 3),         // 0x05
    op(Asl, ZeroPage, 5),         // 0x06
    None,                         // 0x07
    op(Php, Implied, 3),          // 0x08
    op(Ora, Immediate, 2),        // 0x09
    op(Asl, Accumulator, 2),      // 0x0A
    None,                         // 0x0B
    None,                         // 0x0C
    op(Ora, Absolute, 4),         // 0x0D
    op(Asl, Absolute, 6),         // 0x0E
    None,                         // 0x0F
    op(Bpl, Relative, 2),         // 0x10
    op(Ora, IndirectIndexed, 5),  // 0x11
    None,                         // 0x12
    None,                         // 0x13
    None,                         // 0x14
    op(Ora, ZeroPageX, 4),        // 0x15
    op(Asl, ZeroPageX, 6),        // 0x16
    None,                         // 0x17
    op(Clc, Implied, 2),          // 0x18
    op(Ora, AbsoluteY, 4),        // 0x19
    None,                         // 0x1A
    None,                         // 0x1B
    None,                         // 0x1C
    op(Ora, AbsoluteX, 4),        // 0x1D
    op(Asl, AbsoluteX, 7),        // 0x1E
    None,                         // 0x1F
    op(Jsr, Absolute, 6),         // 0x20
    op(And, IndexedIndirect, 6),  // 0x21
    None,                         // 0x22
    None,                         // 0x23
    op(Bit, ZeroPage, 3),         // 0x24
    op(And, ZeroPage, 3),         // 0x25
    op(Rol, ZeroPage, 5),         // 0x26
    None,                         // 0x27
    op(Plp, Implied, 4),          // 0x28
    op(And, Immediate, 2),        // 0x29
    op(Rol, Accumulator, 2),      // 0x2A
    None,                         // 0x2B
    op(Bit, Absolute, 4),         // 0x2C
    op(And, Absolute, 4),         // 0x2D
    op(Rol, Absolute, 6),         // 0x2E
    None,                         // 0x2F
    op(Bmi, Relative, 2),         // 0x30
    op(And, IndirectIndexed, 5),  // 0x31
    None,                         // 0x32
    None,                         // 0x33
    None,                         // 0x34
    op(And, ZeroPageX, 4),        // 0x35
    op(Rol, ZeroPageX, 6),        // 0x36
    None,                         // 0x37
    op(Sec, Implied, 2),          // 0x38
    op(And, AbsoluteY, 4),        // 0x39
    None,                         // 0x3A
    None,                         // 0x3B
    None,                         // 0x3C
    op(And, AbsoluteX, 4),        // 0x3D
    op(Rol, AbsoluteX, 7),        // 0x3E
    None,                         // 0x3F
    op(Rti, Implied, 6),          // 0x40
    op(Eor, IndexedIndirect, 6),  // 0x41
    None,                         // 0x42
    None,                         // 0x43
    None,                         // 0x44
    op(Eor, ZeroPage, 3),         // 0x45
    op(Lsr, ZeroPage, 5),         // 0x46
    None,                         // 0x47
    op(Pha, Implied, 3),          // 0x48
    op(Eor, Immediate, 2),        // 0x49
    op(Lsr, Accumulator, 2),      // 0x4A
    None,                         // 0x4B
    op(Jmp, Absolute, 3),         // 0x4C
    op(Eor, Absolute, 4),         // 0x4D
    op(Lsr, Absolute, 6),         // 0x4E
    None,                         // 0x4F
    op(Bvc, Relative, 2),         // 0x50
    op(Eor, IndirectIndexed, 5),  // 0x51
    None,                         // 0x52
    None,                         // 0x53
    None,                         // 0x54
    op(Eor, ZeroPageX, 4),        // 0x55
    op(Lsr, ZeroPageX, 6),        // 0x56
    None,                         // 0x57
    op(Cli, Implied, 2),          // 0x58
    op(Eor, AbsoluteY, 4),        // 0x59
    None,                         // 0x5A
    None,                         // 0x5B
    None,                         // 0x5C
    op(Eor, AbsoluteX, 4),        // 0x5D
    op(Lsr, AbsoluteX, 7),        // 0x5E
    None,                         // 0x5F
    op(Rts, Implied, 6),          // 0x60
    op(Adc, IndexedIndirect, 6),  // 0x61
    None,                         // 0x62
    None,                         // 0x63
    None,                         // 0x64
    op(Adc, ZeroPage, 3),         // 0x65
    op(Ror, ZeroPage, 5),         // 0x66
    None,                         // 0x67
    op(Pla, Implied, 4),          // 0x68
    op(Adc, Immediate, 2),        // 0x69
    op(Ror, Accumulator, 2),      // 0x6A
    None,                         // 0x6B
    op(Jmp, Indirect, 5),         // 0x6C
    op(Adc, Absolute, 4),         // 0x6D
    op(Ror, Absolute, 6),         // 0x6E
    None,                         // 0x6F
    op(Bvs, Relative, 2),         // 0x70
    op(Adc, IndirectIndexed, 5),  // 0x71
    None,                         // 0x72
    None,                         // 0x73
    None,                         // 0x74
    op(Adc, ZeroPageX, 4),        // 0x75
    op(Ror, ZeroPageX, 6),        // 0x76
    None,                         // 0x77
    op(Sei, Implied, 2),          // 0x78
    op(Adc, AbsoluteY, 4),        // 0x79
    None,                         // 0x7A
    None,                         // 0x7B
    None,                         // 0x7C
    op(Adc, AbsoluteX, 4),        // 0x7D
    op(Ror, AbsoluteX, 7),        // 0x7E
    None,                         // 0x7F
    None,                         // 0x80
    op(Sta, IndexedIndirect, 6),  // 0x81
    None,                         // 0x82
    None,                         // 0x83
    op(Sty, ZeroPage, 3),         // 0x84
    op(Sta, ZeroPage, 3),         // 0x85
    op(Stx, ZeroPage, 3),         // 0x86
    None,                         // 0x87
    op(Dey, Implied, 2),          // 0x88
    None,                         // 0x89
    op(Txa, Implied, 2),          // 0x8A
    None,                         // 0x8B
    op(Sty, Absolute, 4),         // 0x8C
    op(Sta, Absolute, 4),         // 0x8D
    op(Stx, Absolute, 4),         // 0x8E
    None,                         // 0x8F
    op(Bcc, Relative, 2),         // 0x90
    op(Sta, IndirectIndexed, 6),  // 0x91
    None,                         // 0x92
    None,                         // 0x93
    op(Sty, ZeroPageX, 4),        // 0x94
    op(Sta, ZeroPageX, 4),        // 0x95
    op(Stx, ZeroPageY, 4),        // 0x96
    None,                         // 0x97
    op(Tya, Implied, 2),          // 0x98
    op(Sta, AbsoluteY, 5),        // 0x99
    op(Txs, Implied, 2),          // 0x9A
    None,                         // 0x9B
    None,                         // 0x9C
    op(Sta, AbsoluteX, 5),        // 0x9D
    None,                         // 0x9E
    None,                         // 0x9F
    op(Ldy, Immediate, 2),        // 0xA0
    op(Lda, IndexedIndirect, 6),  // 0xA1
    op(Ldx, Immediate, 2),        // 0xA2
    None,                         // 0xA3
    op(Ldy, ZeroPage, 3),         // 0xA4
    op(Lda, ZeroPage, 3),         // 0xA5
    op(Ldx, ZeroPage, 3),         // 0xA6
    None,                         // 0xA7
    op(Tay, Implied, 2),          // 0xA8
    op(Lda, Immediate, 2),        // 0xA9
    op(Tax, Implied, 2),          // 0xAA
    None,                         // 0xAB
    op(Ldy, Absolute, 4),         // 0xAC
    op(Lda, Absolute, 4),         // 0xAD
    op(Ldx, Absolute, 4),         // 0xAE
    None,                         // 0xAF
    op(Bcs, Relative, 2),         // 0xB0
    op(Lda, IndirectIndexed, 5),  // 0xB1
    None,                         // 0xB2
    None,                         // 0xB3
    op(Ldy, ZeroPageX, 4),        // 0xB4
    op(Lda, ZeroPageX, 4),        // 0xB5
    op(Ldx, ZeroPageY, 4),        // 0xB6
    None,                         // 0xB7
    op(Clv, Implied, 2),          // 0xB8
    op(Lda, AbsoluteY, 4),        // 0xB9
    op(Tsx, Implied, 2),          // 0xBA
    None,                         // 0xBB
    op(Ldy, AbsoluteX, 4),        // 0xBC
    op(Lda, AbsoluteX, 4),        // 0xBD
    op(Ldx, AbsoluteY, 4),        // 0xBE
    None,                         // 0xBF
    op(Cpy, Immediate, 2),        // 0xC0
    op(Cmp, IndexedIndirect, 6),  // 0xC1
    None,                         // 0xC2
    None,                         // 0xC3
    op(Cpy, ZeroPage, 3),         // 0xC4
    op(Cmp, ZeroPage, 3),         // 0xC5
    op(Dec, ZeroPage, 5),         // 0xC6
    None,                         // 0xC7
    op(Iny, Implied, 2),          // 0xC8
    op(Cmp, Immediate, 2),        // 0xC9
    op(Dex, Implied, 2),          // 0xCA
    None,                         // 0xCB
    op(Cpy, Absolute, 4),         // 0xCC
    op(Cmp, Absolute, 4),         // 0xCD
    op(Dec, Absolute, 6),         // 0xCE
    None,                         // 0xCF
    op(Bne, Relative, 2),         // 0xD0
    op(Cmp, IndirectIndexed, 5),  // 0xD1
    None,                         // 0xD2
    None,                         // 0xD3
    None,                         // 0xD4
    op(Cmp, ZeroPageX, 4),        // 0xD5
    op(Dec, ZeroPageX, 6),        // 0xD6
    None,                         // 0xD7
    op(Cld, Implied, 2),          // 0xD8
    op(Cmp, AbsoluteY, 4),        // 0xD9
    None,                         // 0xDA
    None,                         // 0xDB
    None,                         // 0xDC
    op(Cmp, AbsoluteX, 4),        // 0xDD
    op(Dec, AbsoluteX, 7),        // 0xDE
    None,                         // 0xDF
    op(Cpx, Immediate, 2),        // 0xE0
    op(Sbc, IndexedIndirect, 6),  // 0xE1
    None,                         // 0xE2
    None,                         // 0xE3
    op(Cpx, ZeroPage, 3),         // 0xE4
    op(Sbc, ZeroPage, 3),         // 0xE5
    op(Inc, ZeroPage, 5),         // 0xE6
    None,                         // 0xE7
    op(Inx, Implied, 2),          // 0xE8
    op(Sbc, Immediate, 2),        // 0xE9
    op(Nop, Implied, 2),          // 0xEA
    None,                         // 0xEB
    op(Cpx, Absolute, 4),         // 0xEC
    op(Sbc, Absolute, 4),         // 0xED
    op(Inc, Absolute, 6),         // 0xEE
    None,                         // 0xEF
    op(Beq, Relative, 2),         // 0xF0
    op(Sbc, IndirectIndexed, 5),  // 0xF1
    None,                         // 0xF2
    None,                         // 0xF3
    None,                         // 0xF4
    op(Sbc, ZeroPageX, 4),        // 0xF5
    op(Inc, ZeroPageX, 6),        // 0xF6
    None,                         // 0xF7
    op(Sed, Implied, 2),          // 0xF8
    op(Sbc, AbsoluteY, 4),        // 0xF9
    None,                         // 0xFA
    None,                         // 0xFB
    None,                         // 0xFC
    op(Sbc, AbsoluteX, 4),        // 0xFD
    op(Inc, AbsoluteX, 7),        // 0xFE
    None,                         // 0xFF
];
