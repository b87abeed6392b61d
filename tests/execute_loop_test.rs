//! Execution loop tests
//!
//! Verifies fetch-decode-execute, the cycle budget contract and unknown-opcode handling.

use cpu6502::{ExecutionError, FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU reset to 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x8000);
    cpu
}

#[test]
fn test_zero_budget_executes_nothing() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);

    assert_eq!(cpu.execute(0), Ok(0));
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_instruction_runs_past_budget() {
    let mut cpu = setup_cpu();

    // LDA #$84 needs 2 cycles
    cpu.memory_mut().load(0x8000, &[0xA9, 0x84]);

    assert_eq!(cpu.execute(1), Ok(2));
    assert_eq!(cpu.a(), 0x84);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_budget_met_exactly() {
    let mut cpu = setup_cpu();

    // Three NOPs, 2 cycles each
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA, 0xEA, 0xEA]);

    assert_eq!(cpu.execute(6), Ok(6));
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_budget_overshoot_by_long_instruction() {
    let mut cpu = setup_cpu();

    // NOP (2) then JSR (6): budget of 3 runs both
    cpu.memory_mut().load(0x8000, &[0xEA, 0x20, 0x00, 0x90]);

    assert_eq!(cpu.execute(3), Ok(8));
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn test_execute_reports_only_cycles_of_this_call() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xEA, 0xEA, 0xEA]);

    assert_eq!(cpu.execute(2), Ok(2));
    assert_eq!(cpu.execute(2), Ok(2));
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_unknown_opcode_stops_execution() {
    let mut cpu = setup_cpu();

    // NOP, then undocumented 0xFF
    cpu.memory_mut().load(0x8000, &[0xEA, 0xFF]);

    match cpu.execute(10) {
        Err(ExecutionError::UnknownOpcode { opcode, address }) => {
            assert_eq!(opcode, 0xFF);
            assert_eq!(address, 0x8001);
        }
        other => panic!("Expected UnknownOpcode, got {:?}", other),
    }

    // The NOP completed, the bad opcode left nothing behind
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_interrupt_instructions_are_unknown() {
    for opcode in [0x00u8, 0x40] {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode);

        assert_eq!(
            cpu.step(),
            Err(ExecutionError::UnknownOpcode {
                opcode,
                address: 0x8000
            })
        );
    }
}

#[test]
fn test_unknown_opcode_display() {
    let error = ExecutionError::UnknownOpcode {
        opcode: 0x02,
        address: 0x1234,
    };
    assert_eq!(error.to_string(), "Unknown opcode 0x02 at 0x1234");
}

#[test]
fn test_step_advances_program_counter() {
    let mut cpu = setup_cpu();

    // LDA immediate - 2 bytes
    cpu.memory_mut().load(0x8000, &[0xA9, 0x42]);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8002, "PC should advance by 2 for LDA immediate");
}

#[test]
fn test_pc_wraps_at_top_of_memory() {
    let mut cpu = setup_cpu();
    cpu.reset(0xFFFF);
    cpu.memory_mut().write(0xFFFF, 0xEA);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0000);
}
