//! Conditional branch instruction bodies.
//!
//! The relative addressing mode hands over the raw offset byte; when the
//! branch condition holds, the offset is sign-extended and added across
//! the full 16-bit program counter, which at that point is already past
//! the offset operand.

use log::debug;

use crate::registers::Registers;

/// Takes the branch when `condition(registers)` holds.
pub(crate) fn branch_if(
    registers: &mut Registers,
    offset: u8,
    condition: impl Fn(&Registers) -> bool,
) -> u8 {
    if condition(registers) {
        let pc = registers.get_pc();
        let target = pc.wrapping_add(offset as i8 as u16);
        debug!("branch 0x{:04X} -> 0x{:04X}", pc, target);
        registers.set_pc(target);
    }
    offset
}
