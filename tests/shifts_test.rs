//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use mos6502::{Cpu, Flag, Memory, Register, SimpleMemory};

const ORIGIN: u16 = 0x0200;

fn cpu_with_program(program: &[u8]) -> Cpu<SimpleMemory> {
    let mut memory = SimpleMemory::new();
    memory.set_block(ORIGIN, program);
    memory.set_block(0xFFFC, &[(ORIGIN >> 8) as u8, ORIGIN as u8]);
    let mut cpu = Cpu::new(memory);
    cpu.reset();
    cpu
}

// ========== ASL ==========

#[test]
fn asl_accumulator_doubles_and_carries_bit_7() {
    let mut cpu = cpu_with_program(&[0xA9, 0b1000_0001, 0x0A]);
    cpu.step_n(2).unwrap();

    assert_eq!(
        cpu.registers().get_register(Register::Accumulator),
        0b0000_0010
    );
    assert!(cpu.registers().get_flag(Flag::Carry));
}

#[test]
fn asl_zero_page_rewrites_the_cell() {
    let mut cpu = cpu_with_program(&[0x06, 0x10]);
    cpu.memory_mut().set_byte_at(0x0010, 0b0100_0000);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().get_byte(0x0010), 0b1000_0000);
    assert!(!cpu.registers().get_flag(Flag::Carry));
    assert!(cpu.registers().get_flag(Flag::Negative));
}

#[test]
fn asl_to_zero_sets_zero_and_carry() {
    let mut cpu = cpu_with_program(&[0xA9, 0x80, 0x0A]);
    cpu.step_n(2).unwrap();
    assert!(cpu.registers().get_flag(Flag::Zero));
    assert!(cpu.registers().get_flag(Flag::Carry));
}

// ========== LSR ==========

#[test]
fn lsr_halves_and_carries_bit_0() {
    let mut cpu = cpu_with_program(&[0xA9, 0b0000_0101, 0x4A]);
    cpu.step_n(2).unwrap();

    assert_eq!(
        cpu.registers().get_register(Register::Accumulator),
        0b0000_0010
    );
    assert!(cpu.registers().get_flag(Flag::Carry));
    assert!(!cpu.registers().get_flag(Flag::Negative));
}

#[test]
fn lsr_absolute_x() {
    let mut cpu = cpu_with_program(&[0x5E, 0x30, 0x00]);
    cpu.registers_mut().set_register(Register::XIndex, 0x02);
    cpu.memory_mut().set_byte_at(0x3002, 0b0000_0010);
    cpu.step().unwrap();
    assert_eq!(cpu.memory().get_byte(0x3002), 0b0000_0001);
}

// ========== ROL ==========

#[test]
fn rol_rotates_carry_into_bit_0() {
    // SEC; LDA #$40; ROL A
    let mut cpu = cpu_with_program(&[0x38, 0xA9, 0x40, 0x2A]);
    cpu.step_n(3).unwrap();

    assert_eq!(cpu.registers().get_register(Register::Accumulator), 0x81);
    assert!(!cpu.registers().get_flag(Flag::Carry));
}

#[test]
fn rol_zero_page_pushes_bit_7_into_carry() {
    let mut cpu = cpu_with_program(&[0x26, 0x10]);
    cpu.memory_mut().set_byte_at(0x0010, 0b1000_0000);
    cpu.step().unwrap();

    assert_eq!(cpu.memory().get_byte(0x0010), 0x00);
    assert!(cpu.registers().get_flag(Flag::Carry));
    assert!(cpu.registers().get_flag(Flag::Zero));
}

// ========== ROR ==========

#[test]
fn ror_rotates_carry_into_bit_7() {
    // SEC; LDA #$02; ROR A
    let mut cpu = cpu_with_program(&[0x38, 0xA9, 0x02, 0x6A]);
    cpu.step_n(3).unwrap();

    assert_eq!(cpu.registers().get_register(Register::Accumulator), 0x81);
    assert!(!cpu.registers().get_flag(Flag::Carry));
    assert!(cpu.registers().get_flag(Flag::Negative));
}

#[test]
fn ror_memory_forms_rewrite_their_cell() {
    let mut cpu = cpu_with_program(&[0x66, 0x10, 0x6E, 0x30, 0x00]);
    cpu.memory_mut().set_byte_at(0x0010, 0b0000_0001);
    cpu.memory_mut().set_byte_at(0x3000, 0b0000_0100);

    cpu.step().unwrap(); // ROR $10: bit 0 out to carry
    assert_eq!(cpu.memory().get_byte(0x0010), 0x00);
    assert!(cpu.registers().get_flag(Flag::Carry));

    cpu.step().unwrap(); // ROR $0030: carry rotates back in at bit 7
    assert_eq!(cpu.memory().get_byte(0x3000), 0b1000_0010);
    assert!(!cpu.registers().get_flag(Flag::Carry));
}

#[test]
fn shift_chain_preserves_value_through_rol_then_ror() {
    // CLC; ROL A then ROR A round-trips when no carry is pending.
    let mut cpu = cpu_with_program(&[0x18, 0xA9, 0x2A, 0x2A, 0x6A]);
    cpu.step_n(4).unwrap();
    assert_eq!(cpu.registers().get_register(Register::Accumulator), 0x2A);
}
