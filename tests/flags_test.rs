//! Tests for the flag instructions CLC, SEC, CLI, SEI, CLD, SED and CLV.

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU reset to 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x8000);
    cpu
}

/// Runs one flag instruction from `status` and returns the resulting status.
fn run_flag_op(opcode: u8, status: u8) -> u8 {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.set_status(status);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
    cpu.status()
}

#[test]
fn test_clear_instructions() {
    assert_eq!(run_flag_op(0x18, 0xFF), 0xFE); // CLC
    assert_eq!(run_flag_op(0x58, 0xFF), 0xFB); // CLI
    assert_eq!(run_flag_op(0xD8, 0xFF), 0xF7); // CLD
    assert_eq!(run_flag_op(0xB8, 0xFF), 0xBF); // CLV
}

#[test]
fn test_set_instructions() {
    assert_eq!(run_flag_op(0x38, 0x00), 0x01); // SEC
    assert_eq!(run_flag_op(0x78, 0x00), 0x04); // SEI
    assert_eq!(run_flag_op(0xF8, 0x00), 0x08); // SED
}

#[test]
fn test_flag_ops_are_idempotent() {
    assert_eq!(run_flag_op(0x18, 0x00), 0x00); // CLC
    assert_eq!(run_flag_op(0x38, 0x01), 0x01); // SEC
}

#[test]
fn test_sec_then_clc() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x38, 0x18]);

    cpu.step().unwrap();
    assert!(cpu.flag_c());

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 4);
}
