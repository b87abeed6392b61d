//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image around a program
//! counter, then executes a short burst of instructions looking for panics
//! and state changes on rejected opcodes.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{ExecutionError, FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    pc: u16,
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte, all 8 bits
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location
    code: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(input.cpu_state.pc);

    let memory = cpu.memory_mut();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.load(input.cpu_state.pc, &input.memory.code);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for _ in 0..(input.steps % 16) {
        let pc = cpu.pc();
        let cycles = cpu.cycles();
        let a = cpu.a();
        let sp = cpu.sp();
        let status = cpu.status();

        match cpu.step() {
            Ok(()) => {
                // Shortest instruction is 2 cycles, longest 7
                let used = cpu.cycles() - cycles;
                assert!((2..=7).contains(&used), "used {} cycles", used);
            }
            Err(ExecutionError::UnknownOpcode { address, .. }) => {
                assert_eq!(address, pc);
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.cycles(), cycles);
                assert_eq!(cpu.a(), a);
                assert_eq!(cpu.sp(), sp);
                assert_eq!(cpu.status(), status);
                break;
            }
        }
    }
});
