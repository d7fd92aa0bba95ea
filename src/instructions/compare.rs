//! CMP, CPX and CPY instruction bodies.

use crate::alu;
use crate::registers::{Flag, Register, Registers};

/// Compares `register` against `value` by silent subtraction: Carry is
/// forced high (no incoming borrow), the numeric result is discarded, and
/// only N/Z/C survive the status restore. The compared register is never
/// written.
pub(crate) fn compare(registers: &mut Registers, register: Register, value: u8) -> u8 {
    let register_value = registers.get_register(register);

    let status = registers.get_register(Register::Status);
    registers.set_flag(Flag::Carry);
    let result = alu::sub(registers, register_value, value);
    let carry = registers.get_flag(Flag::Carry);
    registers.set_register(Register::Status, status);

    registers.set_flag_to(Flag::Carry, carry);
    registers.set_flags_based_on(result);
    value
}
