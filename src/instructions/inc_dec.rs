//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC: Increment Memory
//! - DEC: Decrement Memory
//! - INX: Increment X Register
//! - INY: Increment Y Register
//! - DEX: Decrement X Register
//! - DEY: Decrement Y Register
//!
//! All wrap modulo 256 and update only Z and N. INC/DEC are read-modify-write:
//! read the operand, spend one cycle modifying it, write it back.

use crate::addressing::Access;
use crate::{AddressingMode, MemoryBus, CPU};

/// Reads, transforms and writes back a memory operand, returning the new value.
pub(crate) fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: impl FnOnce(&mut CPU<M>, u8) -> u8,
) -> u8 {
    let addr = cpu.effective_address(mode, Access::Write);
    let value = cpu.read_byte(addr);
    cpu.tick();
    let result = op(cpu, value);
    cpu.write_byte(addr, result);
    result
}

/// Executes the INC (Increment Memory) instruction.
///
/// Cycles: Zero Page 5, Zero Page,X 6, Absolute 6, Absolute,X 7.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0x8000);
/// cpu.memory_mut().load(0x8000, &[0xE6, 0x10]); // INC $10
/// cpu.memory_mut().write(0x0010, 0xFF);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.memory().read(0x0010), 0x00);
/// assert!(cpu.flag_z());
/// assert_eq!(cpu.cycles(), 5);
/// ```
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = read_modify_write(cpu, mode, |_, value| value.wrapping_add(1));
    cpu.set_zero_and_negative(result);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let result = read_modify_write(cpu, mode, |_, value| value.wrapping_sub(1));
    cpu.set_zero_and_negative(result);
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zero_and_negative(cpu.x);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zero_and_negative(cpu.y);
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zero_and_negative(cpu.x);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zero_and_negative(cpu.y);
}
