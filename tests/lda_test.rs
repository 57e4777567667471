//! Tests for the load family (LDA, LDX, LDY).
//!
//! Covers every addressing mode, the Z/N contract shared by all loads, the
//! zero-page index wrap rule, and page-cross cycle penalties.

use m6502::{Cpu, FlatMemory, MemoryBus, Status};

fn setup() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

// ========== LDA addressing modes ==========

#[test]
fn test_lda_immediate() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xA9);
    memory.write(0xFFFD, 0x03);

    let used = cpu.execute(&mut memory, 2);

    assert_eq!(used, 2);
    assert_eq!(cpu.a, 0x03);
    assert_eq!(cpu.pc, 0xFFFE);
    assert!(!cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_lda_zero_page() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xA5);
    memory.write(0xFFFD, 0x42);
    memory.write(0x0042, 0x37);

    let used = cpu.execute(&mut memory, 3);

    assert_eq!(used, 3);
    assert_eq!(cpu.a, 0x37);
    assert_eq!(cpu.pc, 0xFFFE);
}

#[test]
fn test_lda_zero_page_x() {
    let (mut cpu, mut memory) = setup();

    cpu.x = 0x05;
    memory.write(0xFFFC, 0xB5);
    memory.write(0xFFFD, 0x42);
    memory.write(0x0047, 0x37);

    let used = cpu.execute(&mut memory, 4);

    assert_eq!(used, 4);
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_zero_page_x_wraps_within_page() {
    let (mut cpu, mut memory) = setup();

    // 0xFF + 0x01 wraps to 0x00; cost stays 4, there is no page to cross.
    cpu.x = 0x01;
    memory.write(0xFFFC, 0xB5);
    memory.write(0xFFFD, 0xFF);
    memory.write(0x0000, 0x37);

    let used = cpu.execute(&mut memory, 4);

    assert_eq!(used, 4);
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_absolute() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xAD);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x44); // 0x4480
    memory.write(0x4480, 0x37);

    let used = cpu.execute(&mut memory, 4);

    assert_eq!(used, 4);
    assert_eq!(cpu.a, 0x37);
    assert_eq!(cpu.pc, 0xFFFF);
}

#[test]
fn test_lda_absolute_x_without_page_cross() {
    let (mut cpu, mut memory) = setup();

    cpu.x = 0x01;
    memory.write(0xFFFC, 0xBD);
    memory.write(0xFFFD, 0x00);
    memory.write(0xFFFE, 0x44); // 0x4400 + 0x01
    memory.write(0x4401, 0x37);

    let used = cpu.execute(&mut memory, 4);

    assert_eq!(used, 4);
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_absolute_x_with_page_cross() {
    let (mut cpu, mut memory) = setup();

    cpu.x = 0x01;
    memory.write(0xFFFC, 0xBD);
    memory.write(0xFFFD, 0xFF);
    memory.write(0xFFFE, 0x44); // 0x44FF + 0x01 = 0x4500, crosses
    memory.write(0x4500, 0x37);

    let used = cpu.execute(&mut memory, 5);

    assert_eq!(used, 5);
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_absolute_y_with_page_cross() {
    let (mut cpu, mut memory) = setup();

    cpu.y = 0x01;
    memory.write(0xFFFC, 0xB9);
    memory.write(0xFFFD, 0xFF);
    memory.write(0xFFFE, 0x44);
    memory.write(0x4500, 0x37);

    let used = cpu.execute(&mut memory, 5);

    assert_eq!(used, 5);
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_indirect_x() {
    let (mut cpu, mut memory) = setup();

    cpu.x = 0x04;
    memory.write(0xFFFC, 0xA1);
    memory.write(0xFFFD, 0x02);
    // Pointer at (0x02 + 0x04) = 0x06 -> 0x8000
    memory.write(0x0006, 0x00);
    memory.write(0x0007, 0x80);
    memory.write(0x8000, 0x37);

    let used = cpu.execute(&mut memory, 6);

    assert_eq!(used, 6);
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let (mut cpu, mut memory) = setup();

    cpu.x = 0x01;
    memory.write(0xFFFC, 0xA1);
    memory.write(0xFFFD, 0xFF); // 0xFF + 0x01 wraps to pointer at 0x00
    memory.write(0x0000, 0x00);
    memory.write(0x0001, 0x80);
    memory.write(0x8000, 0x37);

    let used = cpu.execute(&mut memory, 6);

    assert_eq!(used, 6);
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_indirect_y_without_page_cross() {
    let (mut cpu, mut memory) = setup();

    cpu.y = 0x04;
    memory.write(0xFFFC, 0xB1);
    memory.write(0xFFFD, 0x02);
    // Pointer at 0x02 -> 0x8000, + Y = 0x8004
    memory.write(0x0002, 0x00);
    memory.write(0x0003, 0x80);
    memory.write(0x8004, 0x37);

    let used = cpu.execute(&mut memory, 5);

    assert_eq!(used, 5);
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_indirect_y_with_page_cross() {
    let (mut cpu, mut memory) = setup();

    cpu.y = 0x01;
    memory.write(0xFFFC, 0xB1);
    memory.write(0xFFFD, 0x02);
    // Pointer at 0x02 -> 0x80FF, + Y = 0x8100, crosses
    memory.write(0x0002, 0xFF);
    memory.write(0x0003, 0x80);
    memory.write(0x8100, 0x37);

    let used = cpu.execute(&mut memory, 6);

    assert_eq!(used, 6);
    assert_eq!(cpu.a, 0x37);
}

// ========== Z/N contract ==========

#[test]
fn test_lda_sets_zero_flag() {
    let (mut cpu, mut memory) = setup();

    cpu.a = 0x44;
    memory.write(0xFFFC, 0xA9);
    memory.write(0xFFFD, 0x00);

    cpu.execute(&mut memory, 2);

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flag(Status::ZERO));
    assert!(!cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_lda_sets_negative_flag() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xA9);
    memory.write(0xFFFD, 0xFF);

    cpu.execute(&mut memory, 2);

    assert_eq!(cpu.a, 0xFF);
    assert!(!cpu.flag(Status::ZERO));
    assert!(cpu.flag(Status::NEGATIVE));
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_immediate() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xA2);
    memory.write(0xFFFD, 0x03);

    let used = cpu.execute(&mut memory, 2);

    assert_eq!(used, 2);
    assert_eq!(cpu.x, 0x03);
}

#[test]
fn test_ldx_zero_page_y() {
    let (mut cpu, mut memory) = setup();

    cpu.y = 0x05;
    memory.write(0xFFFC, 0xB6);
    memory.write(0xFFFD, 0x42);
    memory.write(0x0047, 0x37);

    let used = cpu.execute(&mut memory, 4);

    assert_eq!(used, 4);
    assert_eq!(cpu.x, 0x37);
}

#[test]
fn test_ldx_absolute_y_with_page_cross() {
    let (mut cpu, mut memory) = setup();

    cpu.y = 0x01;
    memory.write(0xFFFC, 0xBE);
    memory.write(0xFFFD, 0xFF);
    memory.write(0xFFFE, 0x44);
    memory.write(0x4500, 0x37);

    let used = cpu.execute(&mut memory, 5);

    assert_eq!(used, 5);
    assert_eq!(cpu.x, 0x37);
}

#[test]
fn test_ldy_immediate() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xA0);
    memory.write(0xFFFD, 0x80);

    let used = cpu.execute(&mut memory, 2);

    assert_eq!(used, 2);
    assert_eq!(cpu.y, 0x80);
    assert!(cpu.flag(Status::NEGATIVE));
}

#[test]
fn test_ldy_absolute_x_without_page_cross() {
    let (mut cpu, mut memory) = setup();

    cpu.x = 0x10;
    memory.write(0xFFFC, 0xBC);
    memory.write(0xFFFD, 0x00);
    memory.write(0xFFFE, 0x44);
    memory.write(0x4410, 0x37);

    let used = cpu.execute(&mut memory, 4);

    assert_eq!(used, 4);
    assert_eq!(cpu.y, 0x37);
}
