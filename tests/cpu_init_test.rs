//! CPU reset tests
//!
//! Verifies the register, flag and memory state after construction and reset.

use cpu6502::{FlatMemory, MemoryBus, CPU};

#[test]
fn test_reset_invariants() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0xFFFC);

    assert_eq!(cpu.pc(), 0xFFFC);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.cycles(), 0);

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_i());
    assert!(!cpu.flag_d());
    assert!(!cpu.flag_b());
    assert!(!cpu.flag_u());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.status(), 0x00);

    assert!(cpu.memory().as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_reset_clears_previous_run() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x8000);

    // LDA #$80; PHA
    cpu.memory_mut().load(0x8000, &[0xA9, 0x80, 0x48]);
    cpu.execute(5).unwrap();
    cpu.set_x(0x11);
    cpu.set_y(0x22);
    cpu.set_status(0xFF);
    assert_eq!(cpu.sp(), 0xFC);

    cpu.reset(0x1234);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.status(), 0x00);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.memory().read(0x8000), 0x00);
    assert_eq!(cpu.memory().read(0x01FD), 0x00);
}

#[test]
fn test_reset_vector_is_the_pc_itself() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x0000);
    assert_eq!(cpu.pc(), 0x0000);

    cpu.reset(0xFFFF);
    assert_eq!(cpu.pc(), 0xFFFF);
}

#[test]
fn test_default_cpu() {
    let cpu: CPU<FlatMemory> = CPU::default();
    assert_eq!(cpu.pc(), cpu6502::DEFAULT_RESET_VECTOR);
    assert_eq!(cpu.sp(), 0xFD);
}
