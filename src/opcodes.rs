//! # Opcode Table
//!
//! The static bijection between opcode byte values and their
//! (mnemonic, [`Operation`], [`AddressingMode`]) triples. The table is the
//! single source of truth for decoding: execution looks entries up by byte
//! value, assembler front-ends look them up by mnemonic and mode.
//!
//! The table is built once on first use and is immutable and shareable
//! thereafter. Bytes without an entry are undocumented opcodes and decode
//! to [`CpuError::UnknownOpcode`].

use std::fmt;

use lazy_static::lazy_static;

use crate::addressing::AddressingMode;
use crate::instructions::Operation;
use crate::CpuError;

/// One decoded opcode: the instruction byte joined to its mnemonic,
/// operation and addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCode {
    /// The instruction byte value.
    pub code: u8,
    /// Three-letter instruction mnemonic (e.g. `"LDA"`).
    pub mnemonic: &'static str,
    /// The addressing-mode independent instruction body.
    pub operation: Operation,
    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,
}

impl OpCode {
    /// Encoded instruction length in bytes, including the opcode byte.
    pub fn instruction_bytes(&self) -> u8 {
        self.addressing_mode.instruction_bytes()
    }

    /// Looks up the opcode for `code`.
    ///
    /// # Errors
    ///
    /// [`CpuError::UnknownOpcode`] carrying `code` when the byte has no
    /// table entry.
    pub fn from_byte(code: u8) -> Result<&'static OpCode, CpuError> {
        let table: &'static [Option<OpCode>; 256] = &OPCODE_TABLE;
        table[code as usize]
            .as_ref()
            .ok_or(CpuError::UnknownOpcode(code))
    }

    /// Looks up the opcode for `mnemonic` in `addressing_mode`.
    ///
    /// This is the assembler-facing direction of the bijection; mnemonic
    /// matching is case-insensitive.
    pub fn find(mnemonic: &str, addressing_mode: AddressingMode) -> Option<&'static OpCode> {
        let table: &'static [Option<OpCode>; 256] = &OPCODE_TABLE;
        table.iter().flatten().find(|opcode| {
            opcode.mnemonic.eq_ignore_ascii_case(mnemonic)
                && opcode.addressing_mode == addressing_mode
        })
    }

    /// All opcodes that use `addressing_mode`.
    pub fn with_addressing_mode(
        addressing_mode: AddressingMode,
    ) -> impl Iterator<Item = &'static OpCode> {
        let table: &'static [Option<OpCode>; 256] = &OPCODE_TABLE;
        table
            .iter()
            .flatten()
            .filter(move |opcode| opcode.addressing_mode == addressing_mode)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:?})[0x{:02X}]",
            self.mnemonic, self.addressing_mode, self.code
        )
    }
}

lazy_static! {
    /// The 256-slot opcode table, indexed by opcode byte value.
    ///
    /// Defined bytes hold their decoded opcode; undefined bytes hold
    /// `None`. Built once on first use from the definition list below and
    /// read-only from then on.
    pub static ref OPCODE_TABLE: [Option<OpCode>; 256] = {
        let mut table = [None; 256];
        for &(code, mnemonic, operation, addressing_mode) in defs::DEFINITIONS {
            let slot = &mut table[code as usize];
            assert!(slot.is_none(), "duplicate opcode byte 0x{:02X}", code);
            *slot = Some(OpCode {
                code,
                mnemonic,
                operation,
                addressing_mode,
            });
        }
        table
    };
}

mod defs {
    use crate::addressing::AddressingMode;
    use crate::addressing::AddressingMode::*;
    use crate::instructions::Operation;
    use crate::instructions::Operation::*;

    /// Every documented opcode this emulator implements, grouped by
    /// mnemonic.
    pub(super) const DEFINITIONS: &[(u8, &str, Operation, AddressingMode)] = &[
        (0x00, "BRK", Brk, Implied),
        //
        (0x0A, "ASL", Asl, Accumulator),
        (0x06, "ASL", Asl, ZeroPage),
        (0x16, "ASL", Asl, ZeroPageX),
        (0x0E, "ASL", Asl, Absolute),
        (0x1E, "ASL", Asl, AbsoluteX),
        //
        (0x4A, "LSR", Lsr, Accumulator),
        (0x46, "LSR", Lsr, ZeroPage),
        (0x56, "LSR", Lsr, ZeroPageX),
        (0x4E, "LSR", Lsr, Absolute),
        (0x5E, "LSR", Lsr, AbsoluteX),
        //
        (0x2A, "ROL", Rol, Accumulator),
        (0x26, "ROL", Rol, ZeroPage),
        (0x36, "ROL", Rol, ZeroPageX),
        (0x2E, "ROL", Rol, Absolute),
        (0x3E, "ROL", Rol, AbsoluteX),
        //
        (0x6A, "ROR", Ror, Accumulator),
        (0x66, "ROR", Ror, ZeroPage),
        (0x76, "ROR", Ror, ZeroPageX),
        (0x6E, "ROR", Ror, Absolute),
        (0x7E, "ROR", Ror, AbsoluteX),
        //
        (0x69, "ADC", Adc, Immediate),
        (0x65, "ADC", Adc, ZeroPage),
        (0x75, "ADC", Adc, ZeroPageX),
        (0x6D, "ADC", Adc, Absolute),
        (0x7D, "ADC", Adc, AbsoluteX),
        (0x79, "ADC", Adc, AbsoluteY),
        (0x61, "ADC", Adc, IndirectX),
        (0x71, "ADC", Adc, IndirectY),
        //
        (0xE9, "SBC", Sbc, Immediate),
        (0xE5, "SBC", Sbc, ZeroPage),
        (0xF5, "SBC", Sbc, ZeroPageX),
        (0xED, "SBC", Sbc, Absolute),
        (0xFD, "SBC", Sbc, AbsoluteX),
        (0xF9, "SBC", Sbc, AbsoluteY),
        (0xE1, "SBC", Sbc, IndirectX),
        (0xF1, "SBC", Sbc, IndirectY),
        //
        (0xA9, "LDA", Lda, Immediate),
        (0xA5, "LDA", Lda, ZeroPage),
        (0xB5, "LDA", Lda, ZeroPageX),
        (0xAD, "LDA", Lda, Absolute),
        (0xBD, "LDA", Lda, AbsoluteX),
        (0xB9, "LDA", Lda, AbsoluteY),
        (0xA1, "LDA", Lda, IndirectX),
        (0xB1, "LDA", Lda, IndirectY),
        //
        (0xA2, "LDX", Ldx, Immediate),
        (0xA6, "LDX", Ldx, ZeroPage),
        (0xB6, "LDX", Ldx, ZeroPageY),
        (0xAE, "LDX", Ldx, Absolute),
        (0xBE, "LDX", Ldx, AbsoluteY),
        //
        (0xA0, "LDY", Ldy, Immediate),
        (0xA4, "LDY", Ldy, ZeroPage),
        (0xB4, "LDY", Ldy, ZeroPageX),
        (0xAC, "LDY", Ldy, Absolute),
        (0xBC, "LDY", Ldy, AbsoluteX),
        //
        (0x85, "STA", Sta, ZeroPage),
        (0x95, "STA", Sta, ZeroPageX),
        (0x8D, "STA", Sta, Absolute),
        (0x9D, "STA", Sta, AbsoluteX),
        (0x99, "STA", Sta, AbsoluteY),
        (0x81, "STA", Sta, IndirectX),
        (0x91, "STA", Sta, IndirectY),
        //
        (0x86, "STX", Stx, ZeroPage),
        (0x96, "STX", Stx, ZeroPageY),
        (0x8E, "STX", Stx, Absolute),
        //
        (0x84, "STY", Sty, ZeroPage),
        (0x94, "STY", Sty, ZeroPageX),
        (0x8C, "STY", Sty, Absolute),
        //
        (0x29, "AND", And, Immediate),
        (0x25, "AND", And, ZeroPage),
        (0x35, "AND", And, ZeroPageX),
        (0x2D, "AND", And, Absolute),
        (0x3D, "AND", And, AbsoluteX),
        (0x39, "AND", And, AbsoluteY),
        (0x21, "AND", And, IndirectX),
        (0x31, "AND", And, IndirectY),
        //
        (0x09, "ORA", Ora, Immediate),
        (0x05, "ORA", Ora, ZeroPage),
        (0x15, "ORA", Ora, ZeroPageX),
        (0x0D, "ORA", Ora, Absolute),
        (0x1D, "ORA", Ora, AbsoluteX),
        (0x19, "ORA", Ora, AbsoluteY),
        (0x01, "ORA", Ora, IndirectX),
        (0x11, "ORA", Ora, IndirectY),
        //
        (0x49, "EOR", Eor, Immediate),
        (0x45, "EOR", Eor, ZeroPage),
        (0x55, "EOR", Eor, ZeroPageX),
        (0x4D, "EOR", Eor, Absolute),
        (0x5D, "EOR", Eor, AbsoluteX),
        (0x59, "EOR", Eor, AbsoluteY),
        (0x41, "EOR", Eor, IndirectX),
        (0x51, "EOR", Eor, IndirectY),
        //
        (0x24, "BIT", Bit, ZeroPage),
        (0x2C, "BIT", Bit, Absolute),
        //
        (0xC9, "CMP", Cmp, Immediate),
        (0xC5, "CMP", Cmp, ZeroPage),
        (0xD5, "CMP", Cmp, ZeroPageX),
        (0xCD, "CMP", Cmp, Absolute),
        (0xDD, "CMP", Cmp, AbsoluteX),
        (0xD9, "CMP", Cmp, AbsoluteY),
        (0xC1, "CMP", Cmp, IndirectX),
        (0xD1, "CMP", Cmp, IndirectY),
        //
        (0xE0, "CPX", Cpx, Immediate),
        (0xE4, "CPX", Cpx, ZeroPage),
        (0xEC, "CPX", Cpx, Absolute),
        //
        (0xC0, "CPY", Cpy, Immediate),
        (0xC4, "CPY", Cpy, ZeroPage),
        (0xCC, "CPY", Cpy, Absolute),
        //
        (0xE6, "INC", Inc, ZeroPage),
        (0xF6, "INC", Inc, ZeroPageX),
        (0xEE, "INC", Inc, Absolute),
        (0xFE, "INC", Inc, AbsoluteX),
        //
        (0xC6, "DEC", Dec, ZeroPage),
        (0xD6, "DEC", Dec, ZeroPageX),
        (0xCE, "DEC", Dec, Absolute),
        (0xDE, "DEC", Dec, AbsoluteX),
        //
        (0xE8, "INX", Inx, Implied),
        (0xC8, "INY", Iny, Implied),
        (0xCA, "DEX", Dex, Implied),
        (0x88, "DEY", Dey, Implied),
        //
        (0x48, "PHA", Pha, Implied),
        (0x68, "PLA", Pla, Implied),
        (0x08, "PHP", Php, Implied),
        (0x28, "PLP", Plp, Implied),
        //
        (0x4C, "JMP", Jmp, Absolute),
        (0x6C, "JMP", Jmp, Indirect),
        (0x20, "JSR", Jsr, Absolute),
        (0x60, "RTS", Rts, Implied),
        (0x40, "RTI", Rti, Implied),
        //
        (0x10, "BPL", Bpl, Relative),
        (0x30, "BMI", Bmi, Relative),
        (0x50, "BVC", Bvc, Relative),
        (0x70, "BVS", Bvs, Relative),
        (0x90, "BCC", Bcc, Relative),
        (0xB0, "BCS", Bcs, Relative),
        (0xD0, "BNE", Bne, Relative),
        (0xF0, "BEQ", Beq, Relative),
        //
        (0x38, "SEC", Sec, Implied),
        (0x18, "CLC", Clc, Implied),
        (0x78, "SEI", Sei, Implied),
        (0x58, "CLI", Cli, Implied),
        (0xF8, "SED", Sed, Implied),
        (0xD8, "CLD", Cld, Implied),
        (0xB8, "CLV", Clv, Implied),
        //
        (0xAA, "TAX", Tax, Implied),
        (0xA8, "TAY", Tay, Implied),
        (0x8A, "TXA", Txa, Implied),
        (0x98, "TYA", Tya, Implied),
        (0x9A, "TXS", Txs, Implied),
        (0xBA, "TSX", Tsx, Implied),
        //
        (0xEA, "NOP", Nop, Implied),
    ];
}
