//! # Instruction Implementations
//!
//! One module per instruction category. Each instruction is a standalone
//! function taking the CPU, the memory bus, and (where operands exist) the
//! addressing mode from the opcode table. Functions return the cycles the
//! instruction consumed beyond the 1-cycle opcode fetch, which the execute
//! loop charges itself.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **stack**: PHA, PHP, PLA, PLP
//! - **logic**: AND, EOR, ORA, BIT
//! - **control**: JMP, JSR, RTS

pub(crate) mod control;
pub(crate) mod load_store;
pub(crate) mod logic;
pub(crate) mod stack;
pub(crate) mod transfer;
