//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All take 2 cycles. Every transfer except TXS updates Z and N from the
//! copied value.

use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.x = cpu.a;
    cpu.set_zero_and_negative(cpu.x);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.y = cpu.a;
    cpu.set_zero_and_negative(cpu.y);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.a = cpu.x;
    cpu.set_zero_and_negative(cpu.a);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.a = cpu.y;
    cpu.set_zero_and_negative(cpu.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
///
/// Copies SP into X and sets Z and N from it.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.x = cpu.sp;
    cpu.set_zero_and_negative(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Copies X into SP. Unlike the other transfers, no flags are affected.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0x8000);
/// cpu.memory_mut().write(0x8000, 0x9A); // TXS
/// cpu.set_x(0x00);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.sp(), 0x00);
/// assert!(!cpu.flag_z()); // Z untouched despite the zero value
/// ```
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.sp = cpu.x;
}
