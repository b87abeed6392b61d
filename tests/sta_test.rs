//! Tests for the STA (Store Accumulator) instruction.
//!
//! Stores never touch flags, and the indexed forms always pay the extra
//! cycle whether or not the page changes.

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU reset to 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x8000);
    cpu
}

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();

    // STA $80
    cpu.memory_mut().load(0x8000, &[0x85, 0x80]);
    cpu.set_a(0x2F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0080), 0x2F);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_sta_does_not_affect_flags() {
    let mut cpu = setup_cpu();

    // STA $80
    cpu.memory_mut().load(0x8000, &[0x85, 0x80]);
    cpu.set_a(0x00);
    cpu.set_status(0xA5);

    cpu.step().unwrap();

    assert_eq!(cpu.status(), 0xA5);
    assert_eq!(cpu.a(), 0x00);
}

#[test]
fn test_sta_zero_page_x() {
    let mut cpu = setup_cpu();

    // STA $80,X with X=$0F
    cpu.memory_mut().load(0x8000, &[0x95, 0x80]);
    cpu.set_a(0x42);
    cpu.set_x(0x0F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x008F), 0x42);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();

    // STA $8000 overwrites its own opcode byte
    cpu.memory_mut().load(0x8000, &[0x8D, 0x00, 0x80]);
    cpu.set_a(0x2F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x8000), 0x2F);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_sta_absolute_x_always_five_cycles() {
    let mut cpu = setup_cpu();

    // STA $4000,X without a page crossing
    cpu.memory_mut().load(0x8000, &[0x9D, 0x00, 0x40]);
    cpu.set_a(0x42);
    cpu.set_x(0x0F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x400F), 0x42);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_sta_absolute_x_page_cross_still_five_cycles() {
    let mut cpu = setup_cpu();

    // STA $40FF,X with X=$01 => $4100
    cpu.memory_mut().load(0x8000, &[0x9D, 0xFF, 0x40]);
    cpu.set_a(0x42);
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x4100), 0x42);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_sta_absolute_y() {
    let mut cpu = setup_cpu();

    // STA $4000,Y
    cpu.memory_mut().load(0x8000, &[0x99, 0x00, 0x40]);
    cpu.set_a(0x42);
    cpu.set_y(0x0F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x400F), 0x42);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_sta_indirect_x() {
    let mut cpu = setup_cpu();

    // STA ($20,X) with X=$0F => pointer at $2F
    cpu.memory_mut().load(0x8000, &[0x81, 0x20]);
    cpu.memory_mut().write_word(0x002F, 0x8000 + 0x0080);
    cpu.set_a(0x42);
    cpu.set_x(0x0F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x8080), 0x42);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu();

    // STA ($20),Y with pointer $8000, Y=$0F
    cpu.memory_mut().load(0x8000, &[0x91, 0x20]);
    cpu.memory_mut().write_word(0x0020, 0x8000);
    cpu.set_a(0x42);
    cpu.set_y(0x0F);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x800F), 0x42);
    assert_eq!(cpu.cycles(), 6);
}
