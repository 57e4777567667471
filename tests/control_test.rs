//! Tests for control transfer (JMP, JSR, RTS), including the JSR/RTS
//! round-trip invariant: after a matched pair, PC sits on the instruction
//! after the 3-byte JSR and SP is back to its pre-JSR value.

use m6502::{Cpu, FlatMemory, MemoryBus};

fn setup() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_jmp_absolute() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x4C);
    memory.write(0xFFFD, 0xAA);
    memory.write(0xFFFE, 0xBB);

    let used = cpu.execute(&mut memory, 3);

    assert_eq!(used, 3);
    assert_eq!(cpu.pc, 0xBBAA);
    assert_eq!(cpu.flags(), 0x00);
}

#[test]
fn test_jmp_indirect() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x6C);
    memory.write(0xFFFD, 0xAA);
    memory.write(0xFFFE, 0xBB);
    memory.write(0xBBAA, 0x42);
    memory.write(0xBBAB, 0x42);

    let used = cpu.execute(&mut memory, 5);

    assert_eq!(used, 5);
    assert_eq!(cpu.pc, 0x4242);
}

#[test]
fn test_jsr_pushes_return_address_and_jumps() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x20);
    memory.write(0xFFFD, 0xAA);
    memory.write(0xFFFE, 0xBB);

    let used = cpu.execute(&mut memory, 6);

    assert_eq!(used, 6);
    assert_eq!(cpu.pc, 0xBBAA);
    assert_eq!(cpu.sp, 0xFD);
    // Pushed word is the JSR's last byte address: 0xFFFC + 2.
    assert_eq!(memory.read(0x01FE), 0xFE); // low
    assert_eq!(memory.read(0x01FF), 0xFF); // high
}

#[test]
fn test_jsr_rts_round_trip() {
    let (mut cpu, mut memory) = setup();

    // JSR $BBAA at the reset vector; subroutine is LDA #$03 then RTS.
    memory.write(0xFFFC, 0x20);
    memory.write(0xFFFD, 0xAA);
    memory.write(0xFFFE, 0xBB);
    memory.write(0xBBAA, 0xA9);
    memory.write(0xBBAB, 0x03);
    memory.write(0xBBAC, 0x60);

    let used = cpu.execute(&mut memory, 14);

    assert_eq!(used, 14); // 6 + 2 + 6
    assert_eq!(cpu.a, 0x03);
    // Resume after the 3-byte JSR: 0xFFFC + 3.
    assert_eq!(cpu.pc, 0xFFFF);
    assert_eq!(cpu.sp, 0xFF);
}

#[test]
fn test_nested_jsr_rts() {
    let (mut cpu, mut memory) = setup();
    cpu.reset_to(&mut memory, 0x0200);

    // main: JSR $1000
    memory.write(0x0200, 0x20);
    memory.write(0x0201, 0x00);
    memory.write(0x0202, 0x10);
    // sub1: JSR $2000 then RTS
    memory.write(0x1000, 0x20);
    memory.write(0x1001, 0x00);
    memory.write(0x1002, 0x20);
    memory.write(0x1003, 0x60);
    // sub2: RTS
    memory.write(0x2000, 0x60);

    let initial_sp = cpu.sp;

    cpu.execute(&mut memory, 6);
    assert_eq!(cpu.pc, 0x1000);
    assert_eq!(cpu.sp, initial_sp.wrapping_sub(2));

    cpu.execute(&mut memory, 6);
    assert_eq!(cpu.pc, 0x2000);
    assert_eq!(cpu.sp, initial_sp.wrapping_sub(4));

    cpu.execute(&mut memory, 6);
    assert_eq!(cpu.pc, 0x1003);
    assert_eq!(cpu.sp, initial_sp.wrapping_sub(2));

    cpu.execute(&mut memory, 6);
    assert_eq!(cpu.pc, 0x0203);
    assert_eq!(cpu.sp, initial_sp);
}

#[test]
fn test_jsr_rts_preserves_registers_and_flags() {
    let (mut cpu, mut memory) = setup();
    cpu.reset_to(&mut memory, 0x0200);

    memory.write(0x0200, 0x20); // JSR $3000
    memory.write(0x0201, 0x00);
    memory.write(0x0202, 0x30);
    memory.write(0x3000, 0x60); // RTS

    cpu.a = 0x11;
    cpu.x = 0x22;
    cpu.y = 0x33;
    cpu.set_flags(0b1000_0011);

    cpu.execute(&mut memory, 12);

    assert_eq!(cpu.pc, 0x0203);
    assert_eq!(cpu.a, 0x11);
    assert_eq!(cpu.x, 0x22);
    assert_eq!(cpu.y, 0x33);
    assert_eq!(cpu.flags(), 0b1000_0011);
}
