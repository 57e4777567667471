//! # Addressing Modes
//!
//! The addressing modes used by the simulated instruction set, plus the
//! operand resolver: the piece that turns a mode tag into an effective
//! address or immediate value, consuming operand bytes from the instruction
//! stream and accounting their cycle cost.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Addressing mode enumeration.
///
/// The mode determines how many operand bytes follow the opcode and how they
/// are turned into an effective address or immediate value.
///
/// # Operand sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: TAX, PHA, RTS
    Implied,

    /// 8-bit constant embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address into the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero-page address indexed by X; wraps within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero-page address indexed by Y; wraps within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X. +1 cycle when a page boundary is crossed.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y. +1 cycle when a page boundary is crossed.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// 16-bit pointer dereferenced to the jump target. Used only by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) names a zero-page pointer to dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP names a pointer, Y is added to the pointee.
    /// +1 cycle when the addition crosses a page boundary.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

/// An effective address produced by the resolver.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedAddress {
    /// The effective address the instruction will read or write.
    pub addr: u16,
    /// Cycles spent fetching operand bytes, reading pointers, and indexing.
    /// Does not include the page-cross penalty; see `page_crossed`.
    pub cycles: u32,
    /// True when indexing carried into the address high byte.
    pub page_crossed: bool,
}

/// Page-cross test: the penalty applies iff indexing changed bits 8-15.
fn crosses_page(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

impl Cpu {
    /// Resolves the effective address for an address-taking mode.
    ///
    /// Consumes the instruction's operand bytes (advancing PC) and returns
    /// the address together with the cycles those fetches and any pointer
    /// reads or index additions cost. Zero-page indexing always charges one
    /// cycle and wraps within the page; absolute/indirect indexing instead
    /// reports `page_crossed`, and the caller decides what that costs for
    /// its access pattern.
    pub(crate) fn operand_address<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        memory: &M,
    ) -> ResolvedAddress {
        match mode {
            AddressingMode::ZeroPage => {
                let zp = self.fetch_byte(memory);
                ResolvedAddress {
                    addr: zp as u16,
                    cycles: 1,
                    page_crossed: false,
                }
            }
            AddressingMode::ZeroPageX => {
                let zp = self.fetch_byte(memory);
                // The index addition stays in the zero page and costs a cycle.
                ResolvedAddress {
                    addr: zp.wrapping_add(self.x) as u16,
                    cycles: 2,
                    page_crossed: false,
                }
            }
            AddressingMode::ZeroPageY => {
                let zp = self.fetch_byte(memory);
                ResolvedAddress {
                    addr: zp.wrapping_add(self.y) as u16,
                    cycles: 2,
                    page_crossed: false,
                }
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word(memory);
                ResolvedAddress {
                    addr,
                    cycles: 2,
                    page_crossed: false,
                }
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(memory);
                let addr = base.wrapping_add(self.x as u16);
                ResolvedAddress {
                    addr,
                    cycles: 2,
                    page_crossed: crosses_page(base, addr),
                }
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(memory);
                let addr = base.wrapping_add(self.y as u16);
                ResolvedAddress {
                    addr,
                    cycles: 2,
                    page_crossed: crosses_page(base, addr),
                }
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word(memory);
                ResolvedAddress {
                    addr: memory.read_word(ptr),
                    cycles: 4,
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte(memory).wrapping_add(self.x);
                ResolvedAddress {
                    addr: memory.read_word(zp as u16),
                    cycles: 4,
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte(memory);
                let base = memory.read_word(zp as u16);
                let addr = base.wrapping_add(self.y as u16);
                ResolvedAddress {
                    addr,
                    cycles: 3,
                    page_crossed: crosses_page(base, addr),
                }
            }
            AddressingMode::Implied | AddressingMode::Immediate => {
                unreachable!("{:?} does not form an effective address", mode)
            }
        }
    }

    /// Resolves and reads the operand value for a read-style instruction.
    ///
    /// Immediate operands are the fetched byte itself; every other mode
    /// resolves an address and reads through it (one more cycle), charging
    /// the page-cross penalty when the resolver reports one.
    pub(crate) fn operand_value<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        memory: &M,
    ) -> (u8, u32) {
        if mode == AddressingMode::Immediate {
            let value = self.fetch_byte(memory);
            return (value, 1);
        }

        let resolved = self.operand_address(mode, memory);
        let value = memory.read(resolved.addr);
        (value, resolved.cycles + 1 + resolved.page_crossed as u32)
    }
}
