//! Increment and decrement instruction bodies.
//!
//! These ride the ALU's add/subtract machinery with Carry forced to the
//! value that makes the step exactly one, then restore the saved status so
//! that only N/Z are published.

use crate::alu;
use crate::registers::{Flag, Register, Registers};

/// `value + 1`, affecting only N/Z.
pub(crate) fn increment(registers: &mut Registers, value: u8) -> u8 {
    let status = registers.get_register(Register::Status);
    registers.clear_flag(Flag::Carry);
    let result = alu::add(registers, value, 1);
    registers.set_register(Register::Status, status);
    registers.set_flags_based_on(result);
    result
}

/// `value - 1`, affecting only N/Z.
pub(crate) fn decrement(registers: &mut Registers, value: u8) -> u8 {
    let status = registers.get_register(Register::Status);
    registers.set_flag(Flag::Carry);
    let result = alu::sub(registers, value, 1);
    registers.set_register(Register::Status, status);
    registers.set_flags_based_on(result);
    result
}

pub(crate) fn increment_register(registers: &mut Registers, register: Register, value: u8) -> u8 {
    let current = registers.get_register(register);
    let result = increment(registers, current);
    registers.set_register(register, result);
    value
}

pub(crate) fn decrement_register(registers: &mut Registers, register: Register, value: u8) -> u8 {
    let current = registers.get_register(register);
    let result = decrement(registers, current);
    registers.set_register(register, result);
    value
}
