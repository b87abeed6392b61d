//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - NOP: No Operation
//!
//! JSR pushes the address of its own last byte (PC - 1 once the operand is
//! fetched); RTS pops it and adds one, resuming after the call.

use crate::addressing::Access;
use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Cycle timing:
/// - Absolute: 3 cycles
/// - Indirect: 5 cycles
///
/// Indirect mode keeps the NMOS page-wrap bug: JMP ($10FF) reads the target
/// from $10FF and $1000 (not $1100).
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.pc = cpu.effective_address(mode, Access::Read);
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Cycles: 6 (opcode, two operand bytes, internal, two pushes). Flags: None.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0xFF00);
/// cpu.memory_mut().load(0xFF00, &[0x20, 0x00, 0x80]); // JSR $8000
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFB);
/// // Return address is the last byte of the JSR: $FF02
/// assert_eq!(cpu.memory().read(0x01FD), 0xFF);
/// assert_eq!(cpu.memory().read(0x01FC), 0x02);
/// assert_eq!(cpu.cycles(), 6);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let target = cpu.fetch_word();
    cpu.tick();
    cpu.push_word(cpu.pc.wrapping_sub(1));
    cpu.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Cycles: 6 (opcode, dummy read, SP increment, two pulls, PC increment).
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
    cpu.tick();
    let return_address = cpu.pop_word();
    cpu.tick();
    cpu.pc = return_address.wrapping_add(1);
}

/// Executes the NOP (No Operation) instruction.
///
/// Takes 2 cycles and changes nothing but PC.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.tick();
}
