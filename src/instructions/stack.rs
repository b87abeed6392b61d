//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The stack lives at 0x0100-0x01FF and grows downward; see `crate::stack`
//! for the push/pop primitives these build on.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Cycles: 3 (opcode, dummy read, push). Flags affected: None.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0x8000);
/// cpu.memory_mut().write(0x8000, 0x48); // PHA
/// cpu.set_a(0x42);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.memory().read(0x01FD), 0x42);
/// assert_eq!(cpu.sp(), 0xFC);
/// assert_eq!(cpu.pc(), 0x8001);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.push_byte(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the status byte exactly as `status()` packs it.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.push_byte(cpu.status());
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Cycles: 4 (opcode, dummy read, SP increment, pull). Sets Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.tick();
    let value = cpu.pop_byte();
    cpu.a = value;
    cpu.set_zero_and_negative(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All eight status bits are replaced by the pulled byte.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.tick();
    let status = cpu.pop_byte();
    cpu.set_status(status);
}
