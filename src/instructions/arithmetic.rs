//! ADC and SBC instruction bodies.

use crate::alu;
use crate::registers::{Register, Registers};

/// Add with carry: `A = A + value + C`, N/Z from the result, C/V from the
/// ALU.
pub(crate) fn adc(registers: &mut Registers, value: u8) -> u8 {
    let a = registers.get_register(Register::Accumulator);
    let result = alu::add(registers, a, value);
    registers.set_flags_based_on(result);
    registers.set_register(Register::Accumulator, result);
    value
}

/// Subtract with borrow: `A = A - value - (1 - C)`.
pub(crate) fn sbc(registers: &mut Registers, value: u8) -> u8 {
    let a = registers.get_register(Register::Accumulator);
    let result = alu::sub(registers, a, value);
    registers.set_flags_based_on(result);
    registers.set_register(Register::Accumulator, result);
    value
}
