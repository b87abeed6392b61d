//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each works on the accumulator (2 cycles) or on memory as a
//! read-modify-write. The bit shifted out lands in C; Z and N follow the result.

use super::inc_dec::read_modify_write;
use crate::{AddressingMode, MemoryBus, CPU};

fn shift<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: fn(&mut CPU<M>, u8) -> u8,
) {
    let result = if mode == AddressingMode::Accumulator {
        cpu.tick();
        let value = cpu.a;
        let result = op(cpu, value);
        cpu.a = result;
        result
    } else {
        read_modify_write(cpu, mode, op)
    };

    cpu.set_zero_and_negative(result);
}

fn asl<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = (value & 0x80) != 0;
    value << 1
}

fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.flag_c = (value & 0x01) != 0;
    value >> 1
}

fn rol<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = cpu.flag_c as u8;
    cpu.flag_c = (value & 0x80) != 0;
    (value << 1) | carry_in
}

fn ror<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = (cpu.flag_c as u8) << 7;
    cpu.flag_c = (value & 0x01) != 0;
    (value >> 1) | carry_in
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to C, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    shift(cpu, mode, asl);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to C, bit 7 becomes 0 (so N is always cleared).
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    shift(cpu, mode, lsr);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old C enters bit 0, bit 7 goes to C.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    shift(cpu, mode, rol);
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old C enters bit 7, bit 0 goes to C.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0x8000);
/// cpu.memory_mut().write(0x8000, 0x6A); // ROR A
/// cpu.set_a(0x01);
/// cpu.set_flag_c(true);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_c());
/// assert!(cpu.flag_n());
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    shift(cpu, mode, ror);
}
