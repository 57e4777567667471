//! # Opcode Metadata Table
//!
//! The single source of truth for instruction decoding: one immutable
//! 256-entry table indexed by opcode byte. Populated entries carry the
//! mnemonic, addressing mode, documented base cycle cost, and encoded size;
//! the rest decode to `None` and are reported as decode failures by the
//! execution loop.

use crate::addressing::AddressingMode;

/// Instruction mnemonic.
///
/// The execution engine dispatches on this tag; the addressing mode in the
/// table entry selects the operand resolution for the concrete opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    Pha,
    Php,
    Pla,
    Plp,
    And,
    Eor,
    Ora,
    Bit,
    Jmp,
    Jsr,
    Rts,
}

/// Static metadata for one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction name.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Documented cycle cost before page-crossing penalties.
    pub base_cycles: u8,

    /// Encoded size in bytes, opcode included (1-3).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> Self {
        let size_bytes = match addressing_mode {
            AddressingMode::Implied => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        };
        Self {
            mnemonic,
            addressing_mode,
            base_cycles,
            size_bytes,
        }
    }
}

/// Complete 256-entry opcode table indexed by opcode byte.
///
/// Entries for bytes outside the supported instruction set are `None`;
/// fetching one is a decode failure, not undefined behavior.
///
/// # Examples
///
/// ```
/// use m6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut table = [None; 256];

    macro_rules! ins {
        ($opcode:expr, $mnemonic:expr, $mode:expr, $cycles:expr) => {
            table[$opcode] = Some(OpcodeMetadata::new($mnemonic, $mode, $cycles));
        };
    }

    // Load
    ins!(0xA9, Lda, Immediate, 2);
    ins!(0xA5, Lda, ZeroPage, 3);
    ins!(0xB5, Lda, ZeroPageX, 4);
    ins!(0xAD, Lda, Absolute, 4);
    ins!(0xBD, Lda, AbsoluteX, 4);
    ins!(0xB9, Lda, AbsoluteY, 4);
    ins!(0xA1, Lda, IndirectX, 6);
    ins!(0xB1, Lda, IndirectY, 5);

    ins!(0xA2, Ldx, Immediate, 2);
    ins!(0xA6, Ldx, ZeroPage, 3);
    ins!(0xB6, Ldx, ZeroPageY, 4);
    ins!(0xAE, Ldx, Absolute, 4);
    ins!(0xBE, Ldx, AbsoluteY, 4);

    ins!(0xA0, Ldy, Immediate, 2);
    ins!(0xA4, Ldy, ZeroPage, 3);
    ins!(0xB4, Ldy, ZeroPageX, 4);
    ins!(0xAC, Ldy, Absolute, 4);
    ins!(0xBC, Ldy, AbsoluteX, 4);

    // Store
    ins!(0x85, Sta, ZeroPage, 3);
    ins!(0x95, Sta, ZeroPageX, 4);
    ins!(0x8D, Sta, Absolute, 4);
    ins!(0x9D, Sta, AbsoluteX, 5);
    ins!(0x99, Sta, AbsoluteY, 5);
    ins!(0x81, Sta, IndirectX, 6);
    ins!(0x91, Sta, IndirectY, 5);

    ins!(0x86, Stx, ZeroPage, 3);
    ins!(0x96, Stx, ZeroPageY, 4);
    ins!(0x8E, Stx, Absolute, 4);

    ins!(0x84, Sty, ZeroPage, 3);
    ins!(0x94, Sty, ZeroPageX, 4);
    ins!(0x8C, Sty, Absolute, 4);

    // Register transfer
    ins!(0xAA, Tax, Implied, 1);
    ins!(0xA8, Tay, Implied, 1);
    ins!(0x8A, Txa, Implied, 1);
    ins!(0x98, Tya, Implied, 1);
    ins!(0xBA, Tsx, Implied, 1);
    ins!(0x9A, Txs, Implied, 1);

    // Stack
    ins!(0x48, Pha, Implied, 3);
    ins!(0x08, Php, Implied, 3);
    ins!(0x68, Pla, Implied, 4);
    ins!(0x28, Plp, Implied, 4);

    // Logical
    ins!(0x29, And, Immediate, 2);
    ins!(0x25, And, ZeroPage, 3);
    ins!(0x35, And, ZeroPageX, 4);
    ins!(0x2D, And, Absolute, 4);
    ins!(0x3D, And, AbsoluteX, 4);
    ins!(0x39, And, AbsoluteY, 4);
    ins!(0x21, And, IndirectX, 6);
    ins!(0x31, And, IndirectY, 5);

    ins!(0x49, Eor, Immediate, 2);
    ins!(0x45, Eor, ZeroPage, 3);
    ins!(0x55, Eor, ZeroPageX, 4);
    ins!(0x4D, Eor, Absolute, 4);
    ins!(0x5D, Eor, AbsoluteX, 4);
    ins!(0x59, Eor, AbsoluteY, 4);
    ins!(0x41, Eor, IndirectX, 6);
    ins!(0x51, Eor, IndirectY, 5);

    ins!(0x09, Ora, Immediate, 2);
    ins!(0x05, Ora, ZeroPage, 3);
    ins!(0x15, Ora, ZeroPageX, 4);
    ins!(0x0D, Ora, Absolute, 4);
    ins!(0x1D, Ora, AbsoluteX, 4);
    ins!(0x19, Ora, AbsoluteY, 4);
    ins!(0x01, Ora, IndirectX, 6);
    ins!(0x11, Ora, IndirectY, 5);

    ins!(0x24, Bit, ZeroPage, 3);
    ins!(0x2C, Bit, Absolute, 4);

    // Jumps and calls
    ins!(0x4C, Jmp, Absolute, 3);
    ins!(0x6C, Jmp, Indirect, 5);
    ins!(0x20, Jsr, Absolute, 6);
    ins!(0x60, Rts, Implied, 6);

    table
}
