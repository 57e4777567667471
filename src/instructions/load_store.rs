//! # Load and Store Instructions
//!
//! Loads resolve an operand, move it into a register, and derive Z/N from
//! the new value. Stores resolve an address and write a register to it
//! without touching any flag.
//!
//! Cycle notes: read-style indexing charges the page-cross penalty only
//! when a page is actually crossed; STA through AbsoluteX/AbsoluteY always
//! pays one cycle for the index fixup, and STA through IndirectY pays it
//! only on a cross.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// LDA: load the accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    let (value, cycles) = cpu.operand_value(mode, memory);
    cpu.a = value;
    cpu.update_zn(cpu.a);
    cycles
}

/// LDX: load the X index register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    let (value, cycles) = cpu.operand_value(mode, memory);
    cpu.x = value;
    cpu.update_zn(cpu.x);
    cycles
}

/// LDY: load the Y index register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    let (value, cycles) = cpu.operand_value(mode, memory);
    cpu.y = value;
    cpu.update_zn(cpu.y);
    cycles
}

/// STA: store the accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    store(cpu, memory, mode, |cpu| cpu.a)
}

/// STX: store the X index register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    store(cpu, memory, mode, |cpu| cpu.x)
}

/// STY: store the Y index register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    store(cpu, memory, mode, |cpu| cpu.y)
}

fn store<M: MemoryBus>(
    cpu: &mut Cpu,
    memory: &mut M,
    mode: AddressingMode,
    register: impl Fn(&Cpu) -> u8,
) -> u32 {
    let resolved = cpu.operand_address(mode, memory);

    // Stores re-read the target on indexed absolute addressing, so the
    // index fixup cycle is unconditional there; indirect-indexed stores
    // charge it only when the addition crossed a page.
    let penalty = match mode {
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 1,
        AddressingMode::IndirectY => resolved.page_crossed as u32,
        _ => 0,
    };

    memory.write(resolved.addr, register(cpu));
    resolved.cycles + penalty + 1
}
