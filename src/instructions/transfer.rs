//! # Register Transfer Instructions
//!
//! Copies between registers. TAX, TAY, TXA, TYA, and TSX derive Z/N from
//! the copied value; TXS does not affect any flag. All transfers are
//! implied-mode and cost nothing beyond the opcode fetch.

use crate::cpu::Cpu;

/// TAX: copy A into X.
pub(crate) fn tax(cpu: &mut Cpu) -> u32 {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
    0
}

/// TAY: copy A into Y.
pub(crate) fn tay(cpu: &mut Cpu) -> u32 {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
    0
}

/// TXA: copy X into A.
pub(crate) fn txa(cpu: &mut Cpu) -> u32 {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
    0
}

/// TYA: copy Y into A.
pub(crate) fn tya(cpu: &mut Cpu) -> u32 {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
    0
}

/// TSX: copy SP into X.
pub(crate) fn tsx(cpu: &mut Cpu) -> u32 {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
    0
}

/// TXS: copy X into SP. No flags.
pub(crate) fn txs(cpu: &mut Cpu) -> u32 {
    cpu.sp = cpu.x;
    0
}
