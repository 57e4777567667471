//! # Logical Instructions
//!
//! AND, EOR, and ORA combine the accumulator with the resolved operand and
//! update Z/N from the result. BIT is the odd one out: it ANDs only to
//! derive Z, takes V and N straight from bits 6 and 7 of the operand, and
//! leaves A untouched.

use crate::addressing::AddressingMode;
use crate::cpu::{Cpu, Status};
use crate::memory::MemoryBus;

/// AND: A &= operand.
pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    let (value, cycles) = cpu.operand_value(mode, memory);
    cpu.a &= value;
    cpu.update_zn(cpu.a);
    cycles
}

/// EOR: A ^= operand.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    let (value, cycles) = cpu.operand_value(mode, memory);
    cpu.a ^= value;
    cpu.update_zn(cpu.a);
    cycles
}

/// ORA: A |= operand.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    let (value, cycles) = cpu.operand_value(mode, memory);
    cpu.a |= value;
    cpu.update_zn(cpu.a);
    cycles
}

/// BIT: test accumulator bits against memory.
///
/// Z = (A & operand) == 0; V and N come from the operand itself, not from
/// the AND result. The accumulator is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu, memory: &mut M, mode: AddressingMode) -> u32 {
    let (value, cycles) = cpu.operand_value(mode, memory);
    cpu.set_flag(Status::ZERO, cpu.a & value == 0);
    cpu.set_flag(Status::OVERFLOW, value & (1 << 6) != 0);
    cpu.set_flag(Status::NEGATIVE, value & (1 << 7) != 0);
    cycles
}
