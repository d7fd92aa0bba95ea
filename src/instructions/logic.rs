//! AND, ORA, EOR and BIT instruction bodies.

use crate::alu;
use crate::registers::{Flag, Register, Registers};

pub(crate) fn and(registers: &mut Registers, value: u8) -> u8 {
    let a = registers.get_register(Register::Accumulator);
    let result = alu::and(a, value);
    registers.set_flags_based_on(result);
    registers.set_register(Register::Accumulator, result);
    value
}

pub(crate) fn ora(registers: &mut Registers, value: u8) -> u8 {
    let a = registers.get_register(Register::Accumulator);
    let result = alu::or(a, value);
    registers.set_flags_based_on(result);
    registers.set_register(Register::Accumulator, result);
    value
}

pub(crate) fn eor(registers: &mut Registers, value: u8) -> u8 {
    let a = registers.get_register(Register::Accumulator);
    let result = alu::xor(a, value);
    registers.set_flags_based_on(result);
    registers.set_register(Register::Accumulator, result);
    value
}

/// Bit test. Zero is set when the masked result equals the accumulator
/// (every accumulator bit survives the mask), not when the result is zero;
/// Overflow and Negative come straight from bits 6 and 7 of the operand.
/// The accumulator itself is left untouched.
pub(crate) fn bit(registers: &mut Registers, value: u8) -> u8 {
    let a = registers.get_register(Register::Accumulator);
    let result = alu::and(a, value);

    registers.set_flag_to(Flag::Zero, result == a);
    registers.set_flag_to(Flag::Overflow, value & 0x40 != 0);
    registers.set_flag_to(Flag::Negative, value & 0x80 != 0);
    value
}
