//! # Memory Bus Abstraction
//!
//! The [`MemoryBus`] trait decouples the CPU from any particular memory
//! implementation, so the same core can drive flat RAM, ROM/RAM splits, or
//! banked layouts. The CPU never owns the bus; callers pass a borrow into
//! each `reset`/`execute`/`step` call.
//!
//! Following 6502 hardware behavior there are no bus errors: addresses are
//! 16-bit values, so every access is in range, and reads/writes always
//! succeed.

/// Memory bus trait the CPU reads and writes bytes through.
///
/// # Examples
///
/// ```
/// use m6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing custom memory
///
/// ```
/// use m6502::MemoryBus;
///
/// struct RomRam {
///     ram: [u8; 0x8000], // 0x0000-0x7FFF
///     rom: [u8; 0x8000], // 0x8000-0xFFFF
/// }
///
/// impl MemoryBus for RomRam {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are silently ignored.
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the given 16-bit address. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the given 16-bit address. Must never panic.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The high-byte address wraps at the end of the address space.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Resets every byte to zero.
    ///
    /// The default implementation walks the whole address space through
    /// `write`; concrete stores should override it with a bulk fill.
    fn zero_fill(&mut self) {
        for addr in 0..=0xFFFFu16 {
            self.write(addr, 0x00);
        }
    }
}

/// Simple 64 KiB flat memory.
///
/// Every address (0x0000-0xFFFF) is writable RAM, zero-initialized. Useful
/// for tests and for programs that don't need a ROM/RAM distinction.
///
/// # Examples
///
/// ```
/// use m6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0xA9); // LDA #$01 at the reset vector
/// memory.write(0xFFFD, 0x01);
///
/// let mut cpu = Cpu::new();
/// assert_eq!(cpu.pc, 0xFFFC);
/// ```
pub struct FlatMemory {
    /// 64 KiB contiguous backing array.
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a flat memory with all bytes zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn zero_fill(&mut self) {
        self.data.fill(0x00);
    }
}
