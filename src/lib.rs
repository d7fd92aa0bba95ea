//! # MOS 6502 CPU Emulator Core
//!
//! An instruction-level emulator for the MOS Technology 6502 8-bit
//! microprocessor: fetch/decode/execute, register and flag state, all 13
//! addressing modes, and reset/IRQ/NMI sequencing.
//!
//! This crate models the 6502 at instruction granularity. One call to
//! [`Cpu::step`] executes exactly one instruction to completion; there is no
//! cycle counting, no decimal mode, and no undocumented opcode support.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{Cpu, Memory, Register, SimpleMemory};
//!
//! let mut memory = SimpleMemory::new();
//!
//! // Program: CLC; LDA #$01; ADC #$01
//! memory.set_block(0x0200, &[0x18, 0xA9, 0x01, 0x69, 0x01]);
//!
//! // Reset vector (high byte at the lower address) pointing at the program
//! memory.set_byte_at(0xFFFC, 0x02);
//! memory.set_byte_at(0xFFFD, 0x00);
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.reset();
//! cpu.step_n(3).unwrap();
//!
//! assert_eq!(cpu.registers().get_register(Register::Accumulator), 0x02);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from the memory implementation
//!   via the [`Memory`] trait
//! - **Table-driven dispatch**: a static 256-slot [`OPCODE_TABLE`] joins
//!   each opcode byte to its ([`Operation`], [`AddressingMode`]) pair
//! - **Determinism**: no internal polling or timers; interrupts are
//!   delivered only when the host calls [`Cpu::irq`] / [`Cpu::nmi`]
//!
//! ## Modules
//!
//! - `cpu` - CPU orchestration: reset, stepping, interrupt delivery
//! - `registers` - register bank and status flags
//! - `addressing` - addressing mode resolution
//! - `opcodes` - the opcode table
//! - `memory` - the `Memory` trait and a flat 64KB implementation
//!
//! ## Byte order
//!
//! The emulated system is internally big-endian: a word read from memory
//! takes its high byte from the lower address, two-byte operands encode the
//! high byte first, and the reset/interrupt vectors hold the high byte at
//! the vector address. This is consistent across the whole crate.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal: the ALU and instruction bodies are reached through `Operation`.
mod alu;
mod instructions;

pub use addressing::AddressingMode;
pub use cpu::{Cpu, Interrupt, StepObserver};
pub use instructions::Operation;
pub use memory::{Memory, SimpleMemory};
pub use opcodes::{OpCode, OPCODE_TABLE};
pub use registers::{Flag, Register, Registers};

use thiserror::Error;

/// Errors raised by the emulator core.
///
/// The core never recovers from its own errors: they propagate out of
/// [`Cpu::step`] (or out of table/assembly-time lookups) and the host
/// decides whether to halt, log, or reset. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The fetched byte has no entry in the opcode table.
    ///
    /// Raised before the offending instruction mutates any register or
    /// memory state; execution must stop.
    #[error("unknown opcode 0x{0:02X}")]
    UnknownOpcode(u8),

    /// An addressing mode was asked for an X/Y-indexed variant it does not
    /// support. Raised at table-construction or assembly time, never
    /// during [`Cpu::step`].
    #[error("{mode:?} cannot be {index}-indexed")]
    UnknownAddressingModeConversion {
        /// The mode the conversion was attempted on.
        mode: AddressingMode,
        /// Which index register the conversion asked for.
        index: char,
    },
}
