//! # CPU State and Execution
//!
//! The [`Cpu`] struct is the register file (A, X, Y, PC, SP, packed status
//! flags) plus the fetch-decode-execute engine. It owns no memory: every
//! `reset`/`step`/`execute` call borrows a [`MemoryBus`] for its duration,
//! so all mutable state stays with the caller and repeated calls with small
//! cycle budgets behave exactly like one call with the summed budget.
//!
//! ## Execution model
//!
//! - [`Cpu::step`] executes one instruction and returns its cycle cost, or a
//!   [`DecodeError`] when the fetched byte names no known instruction (the
//!   fetch cycle is still charged and PC has moved past the byte).
//! - [`Cpu::execute`] runs instructions until a cycle budget is spent.
//!   Instructions are atomic, so the final one may overshoot the budget by
//!   at most its own cost; the overshoot is charged against the next call.

use crate::instructions::{control, load_store, logic, stack, transfer};
use crate::memory::MemoryBus;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::DecodeError;

use bitflags::bitflags;

bitflags! {
    /// Packed processor status byte.
    ///
    /// One canonical bit order is fixed here and used uniformly for push,
    /// pull, and bulk access: C=bit 0, Z=1, I=2, D=3, B=4, bit 5 unused,
    /// V=6, N=7.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Status: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3;
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

/// 6502 register file and execution engine.
///
/// # Examples
///
/// ```
/// use m6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// let mut cpu = Cpu::new();
/// cpu.reset(&mut memory);
///
/// memory.write(0xFFFC, 0xA9); // LDA #$00
/// memory.write(0xFFFD, 0x00);
///
/// let used = cpu.execute(&mut memory, 2);
/// assert_eq!(used, 2);
/// assert_eq!(cpu.pc, 0xFFFE);
/// assert!(cpu.flag(m6502::Status::ZERO));
/// ```
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Accumulator.
    pub a: u8,

    /// X index register.
    pub x: u8,

    /// Y index register.
    pub y: u8,

    /// Program counter: address of the next byte to fetch.
    pub pc: u16,

    /// Stack pointer: offset into the stack page at [`Cpu::STACK_BASE`].
    /// The stack grows downward; push writes then decrements.
    pub sp: u8,

    /// Packed status flags.
    pub status: Status,

    /// Total cycles executed since the last reset.
    cycles: u64,

    /// Cycles the previous `execute` call spent past its budget. Charged
    /// against the next call so split budgets replay identically.
    overrun: u32,
}

impl Cpu {
    /// Default reset vector: execution begins here after [`Cpu::reset`].
    pub const RESET_VECTOR: u16 = 0xFFFC;

    /// Base address of the 256-byte stack window (0x0100-0x01FF).
    pub const STACK_BASE: u16 = 0x0100;

    /// Stack pointer offset after reset (stack top, grows downward).
    pub const SP_INIT: u8 = 0xFF;

    /// Creates a CPU in the post-reset register state.
    ///
    /// Memory is not touched; call [`Cpu::reset`] to zero-fill it and
    /// restart execution at the reset vector.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: Self::RESET_VECTOR,
            sp: Self::SP_INIT,
            status: Status::empty(),
            cycles: 0,
            overrun: 0,
        }
    }

    /// Resets the CPU and zero-fills memory.
    ///
    /// PC is set to [`Cpu::RESET_VECTOR`], SP to [`Cpu::SP_INIT`], and the
    /// registers and flags are cleared.
    pub fn reset<M: MemoryBus>(&mut self, memory: &mut M) {
        self.reset_to(memory, Self::RESET_VECTOR);
    }

    /// Like [`Cpu::reset`], but starts execution at `vector` instead of the
    /// default reset vector.
    pub fn reset_to<M: MemoryBus>(&mut self, memory: &mut M, vector: u16) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.pc = vector;
        self.sp = Self::SP_INIT;
        self.status = Status::empty();
        self.cycles = 0;
        self.overrun = 0;
        memory.zero_fill();
    }

    /// Executes instructions until `budget` cycles are spent.
    ///
    /// Returns the cycles consumed by this call. Instructions are atomic:
    /// the final instruction always completes, so the return value may
    /// exceed `budget` by at most that instruction's cost. The excess is
    /// remembered and deducted from the next call's budget, which makes
    /// `execute(m, a)` followed by `execute(m, b)` land in the same state
    /// as a single `execute(m, a + b)`.
    ///
    /// Unknown opcodes are logged at `warn` level and skipped at the cost
    /// of the 1-cycle fetch; use [`Cpu::step`] to treat them as fatal.
    pub fn execute<M: MemoryBus>(&mut self, memory: &mut M, budget: u32) -> u32 {
        let paid = self.overrun.min(budget);
        self.overrun -= paid;
        let budget = budget - paid;

        let mut consumed: u32 = 0;
        while consumed < budget {
            match self.step(memory) {
                Ok(cycles) => consumed += cycles,
                Err(err) => {
                    log::warn!("{err}");
                    consumed += 1;
                }
            }
        }

        self.overrun += consumed - budget;
        consumed
    }

    /// Executes a single instruction and returns its cycle cost.
    ///
    /// On a decode failure the opcode fetch has still happened: one cycle
    /// is charged, PC has advanced past the unknown byte, and no other
    /// state changes.
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) -> Result<u32, DecodeError> {
        let at = self.pc;
        let opcode = self.fetch_byte(memory);

        let Some(meta) = OPCODE_TABLE[opcode as usize] else {
            self.cycles += 1;
            return Err(DecodeError { opcode, addr: at });
        };

        log::trace!(
            "0x{:04X}  {:?} {:?}",
            at,
            meta.mnemonic,
            meta.addressing_mode
        );

        let mode = meta.addressing_mode;
        let cycles = 1 + match meta.mnemonic {
            Mnemonic::Lda => load_store::lda(self, memory, mode),
            Mnemonic::Ldx => load_store::ldx(self, memory, mode),
            Mnemonic::Ldy => load_store::ldy(self, memory, mode),
            Mnemonic::Sta => load_store::sta(self, memory, mode),
            Mnemonic::Stx => load_store::stx(self, memory, mode),
            Mnemonic::Sty => load_store::sty(self, memory, mode),
            Mnemonic::Tax => transfer::tax(self),
            Mnemonic::Tay => transfer::tay(self),
            Mnemonic::Txa => transfer::txa(self),
            Mnemonic::Tya => transfer::tya(self),
            Mnemonic::Tsx => transfer::tsx(self),
            Mnemonic::Txs => transfer::txs(self),
            Mnemonic::Pha => stack::pha(self, memory),
            Mnemonic::Php => stack::php(self, memory),
            Mnemonic::Pla => stack::pla(self, memory),
            Mnemonic::Plp => stack::plp(self, memory),
            Mnemonic::And => logic::and(self, memory, mode),
            Mnemonic::Eor => logic::eor(self, memory, mode),
            Mnemonic::Ora => logic::ora(self, memory, mode),
            Mnemonic::Bit => logic::bit(self, memory, mode),
            Mnemonic::Jmp => control::jmp(self, memory, mode),
            Mnemonic::Jsr => control::jsr(self, memory),
            Mnemonic::Rts => control::rts(self, memory),
        };

        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Total cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Flag access ==========

    /// Returns true when every flag in `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Sets or clears the given flag(s).
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }

    /// Returns the status register packed into a byte (PHP's view).
    pub fn flags(&self) -> u8 {
        self.status.bits()
    }

    /// Restores the status register wholesale from a byte (PLP's view).
    pub fn set_flags(&mut self, bits: u8) {
        self.status = Status::from_bits_retain(bits);
    }

    /// Sets Z and N from a register value.
    ///
    /// Z = (value == 0), N = bit 7. Every load, flag-affecting transfer,
    /// and logical instruction derives Z/N through this one helper.
    pub(crate) fn update_zn(&mut self, value: u8) {
        self.status.set(Status::ZERO, value == 0);
        self.status.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    // ========== Instruction-stream fetch ==========

    /// Fetches the byte at PC and advances PC. Costs one cycle.
    pub(crate) fn fetch_byte<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        let data = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        data
    }

    /// Fetches a little-endian word at PC and advances PC by two.
    /// Costs two cycles (two reads).
    pub(crate) fn fetch_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let data = memory.read_word(self.pc);
        self.pc = self.pc.wrapping_add(2);
        data
    }

    // ========== Stack access ==========
    //
    // The stack lives in the page at STACK_BASE and grows downward: push
    // writes at STACK_BASE + SP and decrements, pull increments and reads.
    // SP wraps mod 256 and never leaves the page.

    /// Pushes one byte. Costs one cycle (the write).
    pub(crate) fn push_byte<M: MemoryBus>(&mut self, memory: &mut M, value: u8) {
        memory.write(Self::STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls one byte. Costs one cycle (the read).
    pub(crate) fn pull_byte<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        memory.read(Self::STACK_BASE + self.sp as u16)
    }

    /// Pushes a word, high byte first, so the low byte sits at the lower
    /// address. Costs two cycles.
    pub(crate) fn push_word<M: MemoryBus>(&mut self, memory: &mut M, value: u16) {
        self.push_byte(memory, (value >> 8) as u8);
        self.push_byte(memory, value as u8);
    }

    /// Pulls a word, low byte first (the inverse of [`Cpu::push_word`]).
    /// Costs two cycles.
    pub(crate) fn pull_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let lo = self.pull_byte(memory) as u16;
        let hi = self.pull_byte(memory) as u16;
        (hi << 8) | lo
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
