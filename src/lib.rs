//! # 6502 CPU Simulator Core
//!
//! A cycle-counting MOS 6502 CPU simulator built around a trait-based memory
//! bus and a table-driven opcode decoder.
//!
//! The crate models the documented behavior of the load/store, transfer,
//! stack, logical, and control-transfer instruction families, including the
//! idiosyncratic addressing-mode cycle penalties (zero-page index wrap,
//! page-boundary crossings).
//!
//! ## Quick Start
//!
//! ```rust
//! use m6502::{Cpu, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! let mut cpu = Cpu::new();
//! cpu.reset(&mut memory);
//!
//! // Execution begins at the reset vector (0xFFFC by default).
//! memory.write(0xFFFC, 0xA9); // LDA #$42
//! memory.write(0xFFFD, 0x42);
//!
//! let used = cpu.execute(&mut memory, 2);
//! assert_eq!(used, 2);
//! assert_eq!(cpu.a, 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the [`MemoryBus`]
//!   trait; the CPU borrows the bus only for the duration of one call.
//! - **Cycle accounting**: every memory access costs one cycle, internal
//!   operations cost their documented extras, and [`Cpu::execute`] charges
//!   whole instructions atomically against the caller's budget.
//! - **Table-driven decode**: all opcode metadata lives in [`OPCODE_TABLE`],
//!   one immutable 256-entry array indexed by opcode byte.
//!
//! ## Modules
//!
//! - `cpu` - register file, status flags, and the fetch-decode-execute loop
//! - `memory` - `MemoryBus` trait and the `FlatMemory` implementation
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing modes and operand resolution

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of the public API).
mod instructions;

pub use addressing::AddressingMode;
pub use cpu::{Cpu, Status};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};

/// Decode failure: the fetched byte names no instruction this simulator knows.
///
/// Decode failures are non-fatal. [`Cpu::execute`] logs them and keeps going;
/// [`Cpu::step`] surfaces them so stricter callers can stop instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// The unrecognized opcode byte.
    pub opcode: u8,
    /// Address the byte was fetched from.
    pub addr: u16,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "unknown opcode 0x{:02X} at 0x{:04X}",
            self.opcode, self.addr
        )
    }
}

impl std::error::Error for DecodeError {}
