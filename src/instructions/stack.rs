//! # Stack Instructions
//!
//! Push and pull the accumulator or the packed status byte through the
//! stack page. Pulling into A re-derives Z/N; pulling the flags restores
//! the byte wholesale without re-deriving anything.
//!
//! Costs: pushes are 3 cycles total (fetch + write + SP adjust), pulls are
//! 4 (fetch + read + two internal cycles).

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// PHA: push the accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u32 {
    cpu.push_byte(memory, cpu.a);
    2
}

/// PHP: push the packed status byte.
pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u32 {
    let flags = cpu.flags();
    cpu.push_byte(memory, flags);
    2
}

/// PLA: pull into the accumulator and update Z/N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u32 {
    cpu.a = cpu.pull_byte(memory);
    cpu.update_zn(cpu.a);
    3
}

/// PLP: pull the status byte and restore all flags at once.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u32 {
    let flags = cpu.pull_byte(memory);
    cpu.set_flags(flags);
    3
}
