//! Shift and rotate instruction bodies.
//!
//! The ALU handles the carry traffic; these bodies publish N/Z and hand
//! the shifted byte back to the addressing mode for write-back.

use crate::alu;
use crate::registers::Registers;

pub(crate) fn asl(registers: &mut Registers, value: u8) -> u8 {
    let result = alu::asl(registers, value);
    registers.set_flags_based_on(result);
    result
}

pub(crate) fn lsr(registers: &mut Registers, value: u8) -> u8 {
    let result = alu::lsr(registers, value);
    registers.set_flags_based_on(result);
    result
}

pub(crate) fn rol(registers: &mut Registers, value: u8) -> u8 {
    let result = alu::rol(registers, value);
    registers.set_flags_based_on(result);
    result
}

pub(crate) fn ror(registers: &mut Registers, value: u8) -> u8 {
    let result = alu::ror(registers, value);
    registers.set_flags_based_on(result);
    result
}
