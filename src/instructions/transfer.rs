//! Register transfer instruction bodies.
//!
//! Transfers copy one register into another without touching the flags;
//! TSX is the one exception and publishes N/Z from the copied value.

use crate::registers::{Register, Registers};

pub(crate) fn copy(registers: &mut Registers, from: Register, to: Register, value: u8) -> u8 {
    let copied = registers.get_register(from);
    registers.set_register(to, copied);
    value
}

pub(crate) fn tsx(registers: &mut Registers, value: u8) -> u8 {
    let sp = registers.get_register(Register::StackPointer);
    registers.set_register(Register::XIndex, sp);
    registers.set_flags_based_on(sp);
    value
}
