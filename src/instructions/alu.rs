//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Exclusive OR
//! - BIT: Bit Test
//! - CMP: Compare Accumulator
//! - CPX: Compare X Register
//! - CPY: Compare Y Register
//!
//! Arithmetic is binary only; the decimal flag is stored but never consulted.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Overflow (V): Set if A and M share a sign that the result does not
/// - Zero (Z), Negative (N): From the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.add_to_accumulator(value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C), computed as A + !M + C so that carry and overflow
/// follow the same two's-complement rules as ADC. Carry clear after SBC
/// means a borrow occurred.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0x8000);
/// cpu.memory_mut().load(0x8000, &[0xE9, 0x01]); // SBC #$01
/// cpu.set_a(0x80); // -128
/// cpu.set_flag_c(false); // borrow pending
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x7E); // -128 - 1 - 1 = +126 (wrapped)
/// assert!(cpu.flag_c());
/// assert!(cpu.flag_v());
/// ```
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.add_to_accumulator(!value);
}

/// Executes the AND (Logical AND) instruction.
///
/// A = A & M. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a &= value;
    cpu.set_zero_and_negative(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// A = A | M. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a |= value;
    cpu.set_zero_and_negative(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// A = A ^ M. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.a ^= value;
    cpu.set_zero_and_negative(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0
/// - Negative (N): Bit 7 of M (not of the AND result)
/// - Overflow (V): Bit 6 of M
/// - The accumulator is not modified
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_n = (value & 0x80) != 0;
    cpu.flag_v = (value & 0x40) != 0;
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.compare(cpu.a, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.compare(cpu.x, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.read_operand(mode);
    cpu.compare(cpu.y, value);
}
