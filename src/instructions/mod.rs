//! # Instruction Bodies
//!
//! Addressing-mode independent instruction semantics, organized by
//! category:
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **arithmetic**: ADC, SBC
//! - **logic**: AND, ORA, EOR, BIT
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **compare**: CMP, CPX, CPY
//! - **stack**: PHA, PLA, PHP, PLP (plus the push/pop primitives)
//! - **control**: BRK, RTS, RTI (JMP and JSR are sequenced by the CPU)
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **flags**: SEC, CLC, SEI, CLI, SED, CLD, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TXS, TSX

mod arithmetic;
mod branches;
mod compare;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod logic;
mod shifts;
mod stack;
mod transfer;

pub(crate) use stack::push;

use crate::memory::Memory;
use crate::registers::{Flag, Register, Registers};

/// An addressing-mode independent instruction body.
///
/// Each variant is one of the ~55 base operations of the 6502 instruction
/// set. An [`crate::AddressingMode`] resolves the operand, calls
/// [`Operation::perform`], and writes the returned byte back when the mode
/// addresses a writable location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // Load/store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Arithmetic
    Adc,
    Sbc,
    // Logic
    And,
    Ora,
    Eor,
    Bit,
    // Shift/rotate
    Asl,
    Lsr,
    Rol,
    Ror,
    // Increment/decrement
    Inc,
    Dec,
    Inx,
    Iny,
    Dex,
    Dey,
    // Compare
    Cmp,
    Cpx,
    Cpy,
    // Stack
    Pha,
    Pla,
    Php,
    Plp,
    // Control flow
    Jmp,
    Jsr,
    Rts,
    Rti,
    Brk,
    // Branches
    Bcc,
    Bcs,
    Beq,
    Bne,
    Bmi,
    Bpl,
    Bvc,
    Bvs,
    // Flag manipulation
    Sec,
    Clc,
    Sei,
    Cli,
    Sed,
    Cld,
    Clv,
    // Transfers
    Tax,
    Tay,
    Txa,
    Tya,
    Txs,
    Tsx,
    // No operation
    Nop,
}

impl Operation {
    /// Executes this operation against `value`, returning the byte the
    /// addressing mode should write back.
    ///
    /// Operations without a transformed result return `value` unchanged,
    /// making the write-back an identity; store operations return the
    /// source register instead.
    pub(crate) fn perform<M: Memory>(
        self,
        registers: &mut Registers,
        memory: &mut M,
        value: u8,
    ) -> u8 {
        match self {
            Operation::Lda => load_store::load(registers, Register::Accumulator, value),
            Operation::Ldx => load_store::load(registers, Register::XIndex, value),
            Operation::Ldy => load_store::load(registers, Register::YIndex, value),
            Operation::Sta => load_store::store(registers, Register::Accumulator),
            Operation::Stx => load_store::store(registers, Register::XIndex),
            Operation::Sty => load_store::store(registers, Register::YIndex),

            Operation::Adc => arithmetic::adc(registers, value),
            Operation::Sbc => arithmetic::sbc(registers, value),

            Operation::And => logic::and(registers, value),
            Operation::Ora => logic::ora(registers, value),
            Operation::Eor => logic::eor(registers, value),
            Operation::Bit => logic::bit(registers, value),

            Operation::Asl => shifts::asl(registers, value),
            Operation::Lsr => shifts::lsr(registers, value),
            Operation::Rol => shifts::rol(registers, value),
            Operation::Ror => shifts::ror(registers, value),

            Operation::Inc => inc_dec::increment(registers, value),
            Operation::Dec => inc_dec::decrement(registers, value),
            Operation::Inx => inc_dec::increment_register(registers, Register::XIndex, value),
            Operation::Iny => inc_dec::increment_register(registers, Register::YIndex, value),
            Operation::Dex => inc_dec::decrement_register(registers, Register::XIndex, value),
            Operation::Dey => inc_dec::decrement_register(registers, Register::YIndex, value),

            Operation::Cmp => compare::compare(registers, Register::Accumulator, value),
            Operation::Cpx => compare::compare(registers, Register::XIndex, value),
            Operation::Cpy => compare::compare(registers, Register::YIndex, value),

            Operation::Pha => stack::pha(registers, memory, value),
            Operation::Pla => stack::pla(registers, memory, value),
            Operation::Php => stack::php(registers, memory, value),
            Operation::Plp => stack::plp(registers, memory, value),

            // JMP and JSR carry word-sized targets and are sequenced by
            // the CPU's dispatch loop.
            Operation::Jmp | Operation::Jsr => value,
            Operation::Rts => control::rts(registers, memory, value),
            Operation::Rti => control::rti(registers, memory, value),
            Operation::Brk => control::brk(registers, memory, value),

            Operation::Bcc => branches::branch_if(registers, value, |r| !r.get_flag(Flag::Carry)),
            Operation::Bcs => branches::branch_if(registers, value, |r| r.get_flag(Flag::Carry)),
            Operation::Beq => branches::branch_if(registers, value, |r| r.get_flag(Flag::Zero)),
            Operation::Bne => branches::branch_if(registers, value, |r| !r.get_flag(Flag::Zero)),
            Operation::Bmi => branches::branch_if(registers, value, |r| r.get_flag(Flag::Negative)),
            Operation::Bpl => branches::branch_if(registers, value, |r| !r.get_flag(Flag::Negative)),
            Operation::Bvs => branches::branch_if(registers, value, |r| r.get_flag(Flag::Overflow)),
            Operation::Bvc => branches::branch_if(registers, value, |r| !r.get_flag(Flag::Overflow)),

            Operation::Sec => flags::set(registers, Flag::Carry, value),
            Operation::Clc => flags::clear(registers, Flag::Carry, value),
            Operation::Sei => flags::set(registers, Flag::IrqDisable, value),
            Operation::Cli => flags::clear(registers, Flag::IrqDisable, value),
            Operation::Sed => flags::set(registers, Flag::DecimalMode, value),
            Operation::Cld => flags::clear(registers, Flag::DecimalMode, value),
            Operation::Clv => flags::clear(registers, Flag::Overflow, value),

            Operation::Tax => {
                transfer::copy(registers, Register::Accumulator, Register::XIndex, value)
            }
            Operation::Tay => {
                transfer::copy(registers, Register::Accumulator, Register::YIndex, value)
            }
            Operation::Txa => {
                transfer::copy(registers, Register::XIndex, Register::Accumulator, value)
            }
            Operation::Tya => {
                transfer::copy(registers, Register::YIndex, Register::Accumulator, value)
            }
            Operation::Txs => {
                transfer::copy(registers, Register::XIndex, Register::StackPointer, value)
            }
            Operation::Tsx => transfer::tsx(registers, value),

            Operation::Nop => value,
        }
    }
}
