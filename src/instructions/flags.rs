//! Flag manipulation instruction bodies (SEC, CLC, SEI, CLI, SED, CLD,
//! CLV).

use crate::registers::{Flag, Registers};

pub(crate) fn set(registers: &mut Registers, flag: Flag, value: u8) -> u8 {
    registers.set_flag(flag);
    value
}

pub(crate) fn clear(registers: &mut Registers, flag: Flag, value: u8) -> u8 {
    registers.clear_flag(flag);
    value
}
