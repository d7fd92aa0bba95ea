//! Tests for JMP, JSR, RTS, RTI and BRK.

use mos6502::{Cpu, CpuError, Flag, Memory, Register, SimpleMemory};

const ORIGIN: u16 = 0x0200;

fn cpu_with_program(program: &[u8]) -> Cpu<SimpleMemory> {
    let mut memory = SimpleMemory::new();
    memory.set_block(ORIGIN, program);
    memory.set_block(0xFFFC, &[(ORIGIN >> 8) as u8, ORIGIN as u8]);
    let mut cpu = Cpu::new(memory);
    cpu.reset();
    cpu
}

// ========== JMP ==========

#[test]
fn jmp_absolute_sets_pc_to_the_operand() {
    let mut cpu = cpu_with_program(&[0x4C, 0x30, 0x00]);
    cpu.step().unwrap();
    assert_eq!(cpu.registers().get_pc(), 0x3000);
}

#[test]
fn jmp_indirect_follows_the_pointer() {
    let mut cpu = cpu_with_program(&[0x6C, 0x12, 0x34]);
    cpu.memory_mut().set_block(0x1234, &[0x56, 0x78]);
    cpu.step().unwrap();
    assert_eq!(cpu.registers().get_pc(), 0x5678);
}

#[test]
fn jmp_mutates_nothing_but_pc() {
    let mut cpu = cpu_with_program(&[0x4C, 0x30, 0x00]);
    let status = cpu.registers().get_register(Register::Status);
    let sp = cpu.registers().get_register(Register::StackPointer);
    cpu.step().unwrap();
    assert_eq!(cpu.registers().get_register(Register::Status), status);
    assert_eq!(cpu.registers().get_register(Register::StackPointer), sp);
}

// ========== JSR / RTS ==========

#[test]
fn jsr_pushes_the_return_address_and_jumps() {
    let mut cpu = cpu_with_program(&[0x20, 0x30, 0x00]);
    cpu.step().unwrap();

    assert_eq!(cpu.registers().get_pc(), 0x3000);
    // Return address (0x0203, the byte after the operand): PCH then PCL.
    assert_eq!(cpu.memory().get_byte(0x01FF), 0x02);
    assert_eq!(cpu.memory().get_byte(0x01FE), 0x03);
    assert_eq!(cpu.registers().get_register(Register::StackPointer), 0xFD);
}

#[test]
fn rts_returns_to_the_instruction_after_the_call() {
    let mut cpu = cpu_with_program(&[0x20, 0x30, 0x00, 0xA9, 0x42]);
    cpu.memory_mut().set_byte_at(0x3000, 0x60); // RTS

    cpu.step_n(2).unwrap();
    assert_eq!(cpu.registers().get_pc(), ORIGIN + 3);
    assert_eq!(cpu.registers().get_register(Register::StackPointer), 0xFF);

    cpu.step().unwrap(); // the LDA after the call site
    assert_eq!(cpu.registers().get_register(Register::Accumulator), 0x42);
}

#[test]
fn nested_subroutines_unwind_in_order() {
    let mut cpu = cpu_with_program(&[0x20, 0x30, 0x00]); // JSR $3000
    cpu.memory_mut().set_block(0x3000, &[0x20, 0x40, 0x00, 0x60]); // JSR $4000; RTS
    cpu.memory_mut().set_byte_at(0x4000, 0x60); // RTS

    cpu.step_n(2).unwrap(); // outer and inner calls
    assert_eq!(cpu.registers().get_pc(), 0x4000);

    cpu.step().unwrap(); // inner RTS
    assert_eq!(cpu.registers().get_pc(), 0x3003);

    cpu.step().unwrap(); // outer RTS
    assert_eq!(cpu.registers().get_pc(), 0x0203);
}

// ========== BRK / RTI ==========

#[test]
fn brk_pushes_state_and_takes_the_irq_vector() {
    let mut cpu = cpu_with_program(&[0x00]);
    cpu.memory_mut().set_block(0xFFFE, &[0x80, 0x00]);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().get_pc(), 0x8000);
    // Saved PC is the BRK address + 2: PCH, PCL, then status.
    assert_eq!(cpu.memory().get_byte(0x01FF), 0x02);
    assert_eq!(cpu.memory().get_byte(0x01FE), 0x02);
    assert_eq!(cpu.registers().get_register(Register::StackPointer), 0xFC);
}

#[test]
fn brk_forces_the_break_bit_on_the_stacked_status() {
    let mut cpu = cpu_with_program(&[0x00]);
    cpu.memory_mut().set_block(0xFFFE, &[0x80, 0x00]);
    // Clear Break in the live status to see BRK force it on the stack.
    cpu.registers_mut().clear_flag(Flag::Break);

    cpu.step().unwrap();
    let stacked_status = cpu.memory().get_byte(0x01FD);
    assert_eq!(stacked_status & Flag::Break.mask(), Flag::Break.mask());
}

#[test]
fn rti_restores_status_and_pc() {
    let mut cpu = cpu_with_program(&[0x00]); // BRK
    cpu.memory_mut().set_block(0xFFFE, &[0x80, 0x00]);
    cpu.memory_mut().set_byte_at(0x8000, 0x40); // RTI

    cpu.step().unwrap(); // BRK
    cpu.step().unwrap(); // RTI

    assert_eq!(cpu.registers().get_pc(), 0x0202);
    assert_eq!(cpu.registers().get_register(Register::StackPointer), 0xFF);
}

#[test]
fn unknown_opcode_stops_execution_cold() {
    let mut cpu = cpu_with_program(&[0xEA, 0x02]);
    cpu.step().unwrap();

    let before = cpu.registers().clone();
    assert_eq!(cpu.step(), Err(CpuError::UnknownOpcode(0x02)));
    assert_eq!(cpu.registers(), &before);

    // Deterministic: the same state produces the same error again.
    assert_eq!(cpu.step(), Err(CpuError::UnknownOpcode(0x02)));
}

#[test]
fn step_n_propagates_the_first_error() {
    let mut cpu = cpu_with_program(&[0xEA, 0xEA, 0x02, 0xEA]);
    assert_eq!(cpu.step_n(4), Err(CpuError::UnknownOpcode(0x02)));
    // The two NOPs before the bad byte stay executed.
    assert_eq!(cpu.registers().get_pc(), ORIGIN + 2);
}
