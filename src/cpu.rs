//! # CPU Orchestration
//!
//! The fetch/decode/execute loop, reset sequencing and host-driven
//! interrupt delivery.
//!
//! Execution is single-threaded and synchronous: [`Cpu::step`] runs one
//! instruction to completion and returns; nothing suspends or yields
//! mid-instruction. Interrupts are delivered only when the host calls
//! [`Cpu::irq`] or [`Cpu::nmi`] between steps; there is no internal
//! polling or scheduling.

use log::debug;

use crate::addressing::{self, AddressingMode};
use crate::instructions::{self, Operation};
use crate::memory::Memory;
use crate::opcodes::OpCode;
use crate::registers::{Flag, Register, Registers};
use crate::CpuError;

/// Where the reset sequence reads the initial program counter.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// Where IRQ and BRK take the program counter from.
pub const IRQ_VECTOR: u16 = 0xFFFE;
/// Where NMI takes the program counter from.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// The status byte installed by reset: IRQ disable, Break and the unused
/// bit set.
const RESET_STATUS: u8 = 0x34;

/// Which interrupt line fired, for [`StepObserver::on_interrupt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// Maskable interrupt request.
    Irq,
    /// Non-maskable interrupt.
    Nmi,
}

/// Observation hook for hosts that want visibility into execution
/// (debug front-ends, trace recorders).
///
/// Installed at construction via [`Cpu::with_observer`] and invoked only
/// when present; the default callbacks do nothing, so implementors
/// override just what they need.
pub trait StepObserver {
    /// Called after a reset completes, with the freshly initialized
    /// registers.
    fn on_reset(&mut self, _registers: &Registers) {}

    /// Called once per instruction, after decode and before the
    /// instruction body runs. `pc` is the address the opcode byte was
    /// fetched from.
    fn on_instruction(&mut self, _pc: u16, _opcode: &OpCode) {}

    /// Called when a host-driven interrupt is delivered.
    fn on_interrupt(&mut self, _interrupt: Interrupt) {}
}

/// An instruction-level MOS 6502.
///
/// The CPU owns its register bank and the memory implementation it was
/// constructed with; the host reaches both through the accessors.
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, Memory, SimpleMemory};
///
/// let mut memory = SimpleMemory::new();
/// memory.set_block(0xFFFC, &[0x02, 0x00]); // reset to 0x0200
/// memory.set_byte_at(0x0200, 0xEA); // NOP
///
/// let mut cpu = Cpu::new(memory);
/// cpu.reset();
/// cpu.step().unwrap();
/// assert_eq!(cpu.registers().get_pc(), 0x0201);
/// ```
pub struct Cpu<M: Memory> {
    registers: Registers,
    memory: M,
    observer: Option<Box<dyn StepObserver>>,
}

impl<M: Memory> Cpu<M> {
    /// Creates a CPU over `memory`.
    ///
    /// The register bank starts in its power-on state; call
    /// [`Cpu::reset`] to load the program counter from the reset vector
    /// before stepping.
    pub fn new(memory: M) -> Self {
        Self {
            registers: Registers::new(),
            memory,
            observer: None,
        }
    }

    /// Creates a CPU with an observation hook installed.
    pub fn with_observer(memory: M, observer: Box<dyn StepObserver>) -> Self {
        Self {
            registers: Registers::new(),
            memory,
            observer: Some(observer),
        }
    }

    /// Resets the CPU, as the RESET pin would.
    ///
    /// Zeroes A, X and Y, installs the reset status byte (0x34), moves the
    /// stack pointer to the top of the stack page, and loads the program
    /// counter from the vector at 0xFFFC/0xFFFD (high byte first). Memory
    /// is left untouched.
    pub fn reset(&mut self) {
        debug!("RESET");
        self.registers.set_register(Register::Accumulator, 0);
        self.registers.set_register(Register::XIndex, 0);
        self.registers.set_register(Register::YIndex, 0);
        self.registers.set_register(Register::Status, RESET_STATUS);
        self.registers.set_register(Register::StackPointer, 0xFF);
        let pc = self.memory.get_word(RESET_VECTOR);
        self.registers.set_pc(pc);

        if let Some(observer) = self.observer.as_mut() {
            observer.on_reset(&self.registers);
        }
    }

    /// Executes the next instruction.
    ///
    /// The opcode byte at PC is read and decoded before anything else
    /// happens: on an unknown opcode the error is returned with the
    /// program counter, registers and memory exactly as they were, so one
    /// `step` either completes a whole instruction or mutates nothing.
    ///
    /// # Errors
    ///
    /// [`CpuError::UnknownOpcode`] when the fetched byte has no table
    /// entry. The error is never caught internally.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let pc = self.registers.get_pc();
        let opcode = OpCode::from_byte(self.memory.get_byte(pc))?;
        self.registers.get_and_step_program_counter();

        debug!("{} @ 0x{:04X}", opcode, pc);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_instruction(pc, opcode);
        }

        match opcode.operation {
            // JMP and JSR take word-sized targets, which the byte-valued
            // resolve/perform pipeline cannot carry.
            Operation::Jmp => self.jump(opcode.addressing_mode),
            Operation::Jsr => self.jump_to_subroutine(),
            operation => {
                opcode
                    .addressing_mode
                    .resolve(&mut self.registers, &mut self.memory, operation)
            }
        }
        Ok(())
    }

    /// Executes `n` instructions in sequence.
    ///
    /// The first error propagates immediately; instructions already
    /// executed stay executed (no atomicity across the batch).
    pub fn step_n(&mut self, n: usize) -> Result<(), CpuError> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    /// Delivers a maskable interrupt request, as the IRQ pin would.
    ///
    /// Pushes PCH, PCL and Status (unmodified), sets IRQ-disable, and
    /// continues at the handler named by the 0xFFFE/0xFFFF vector.
    pub fn irq(&mut self) {
        debug!("IRQ");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_interrupt(Interrupt::Irq);
        }
        self.interrupt(IRQ_VECTOR);
    }

    /// Delivers a non-maskable interrupt, as the NMI pin would.
    ///
    /// Identical to [`Cpu::irq`] except for the 0xFFFA/0xFFFB vector.
    pub fn nmi(&mut self) {
        debug!("NMI");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_interrupt(Interrupt::Nmi);
        }
        self.interrupt(NMI_VECTOR);
    }

    /// Read access to the register bank.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Write access to the register bank, for hosts and debug front-ends.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    /// Read access to the memory this CPU executes against.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Write access to the memory this CPU executes against.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    fn jump(&mut self, mode: AddressingMode) {
        let operand = addressing::next_program_word(&mut self.registers, &self.memory);
        let target = match mode {
            AddressingMode::Indirect => self.memory.get_word(operand),
            _ => operand,
        };
        self.registers.set_pc(target);
    }

    /// JSR: the pushed return address is the instruction after the
    /// two-byte operand; RTS restores it without adjustment.
    fn jump_to_subroutine(&mut self) {
        let target = addressing::next_program_word(&mut self.registers, &self.memory);
        let hi = self.registers.get_register(Register::ProgramCounterHi);
        let lo = self.registers.get_register(Register::ProgramCounterLow);
        instructions::push(&mut self.registers, &mut self.memory, hi);
        instructions::push(&mut self.registers, &mut self.memory, lo);
        self.registers.set_pc(target);
    }

    fn interrupt(&mut self, vector: u16) {
        let hi = self.registers.get_register(Register::ProgramCounterHi);
        let lo = self.registers.get_register(Register::ProgramCounterLow);
        let status = self.registers.get_register(Register::Status);
        instructions::push(&mut self.registers, &mut self.memory, hi);
        instructions::push(&mut self.registers, &mut self.memory, lo);
        instructions::push(&mut self.registers, &mut self.memory, status);

        self.registers.set_flag(Flag::IrqDisable);
        let handler = self.memory.get_word(vector);
        self.registers.set_pc(handler);
    }
}
