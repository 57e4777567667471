//! # Control Transfer Instructions
//!
//! JMP replaces PC with the resolved target. JSR pushes the address of the
//! last byte of its own 3-byte encoding (PC - 1 after the operand fetch)
//! and jumps; RTS pulls that word and resumes at value + 1, so a matched
//! JSR/RTS pair lands on the instruction after the JSR with SP restored.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// JMP: set PC to the target address (absolute or indirect).
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    let resolved = cpu.operand_address(mode, memory);
    cpu.pc = resolved.addr;
    resolved.cycles
}

/// JSR: push the return address and jump to the subroutine.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u32 {
    let target = cpu.fetch_word(memory);
    // PC now points past the 3-byte JSR; push one less so RTS's +1 resumes
    // exactly there.
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(memory, return_addr);
    cpu.pc = target;
    // 2 operand fetches + 2 stack writes + 1 internal cycle.
    5
}

/// RTS: pull the return address and resume after the matching JSR.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M) -> u32 {
    let return_addr = cpu.pull_word(memory);
    cpu.pc = return_addr.wrapping_add(1);
    // 2 stack reads + 3 internal cycles.
    5
}
