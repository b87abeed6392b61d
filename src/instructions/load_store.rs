//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Z and N from the loaded value and pay the page-crossing cycle in
//! indexed modes. Stores affect no flags and always pay the flat indexed cost.

use crate::addressing::Access;
use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0x8000);
/// cpu.set_x(0xFF);
///
/// // LDA $4480,X reads $457F and crosses a page
/// cpu.memory_mut().load(0x8000, &[0xBD, 0x80, 0x44]);
/// cpu.memory_mut().write(0x457F, 0x37);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x37);
/// assert_eq!(cpu.cycles(), 5);
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a = value;
    cpu.set_zero_and_negative(value);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Sets Z and N from the loaded value.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.x = value;
    cpu.set_zero_and_negative(value);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Sets Z and N from the loaded value.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.y = value;
    cpu.set_zero_and_negative(value);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the accumulator at the effective address. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode, Access::Write);
    cpu.write_byte(addr, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode, Access::Write);
    cpu.write_byte(addr, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.effective_address(mode, Access::Write);
    cpu.write_byte(addr, cpu.y);
}
