//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch if Carry Clear / Set
//! - BNE / BEQ: Branch if Not Equal / Equal (Z clear / set)
//! - BPL / BMI: Branch if Plus / Minus (N clear / set)
//! - BVC / BVS: Branch if Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the instruction that follows the branch.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::{page_crossed, relative_target};
use crate::{MemoryBus, Mnemonic, CPU};

fn condition<M: MemoryBus>(cpu: &CPU<M>, mnemonic: Mnemonic) -> bool {
    match mnemonic {
        Mnemonic::Bcc => !cpu.flag_c,
        Mnemonic::Bcs => cpu.flag_c,
        Mnemonic::Bne => !cpu.flag_z,
        Mnemonic::Beq => cpu.flag_z,
        Mnemonic::Bpl => !cpu.flag_n,
        Mnemonic::Bmi => cpu.flag_n,
        Mnemonic::Bvc => !cpu.flag_v,
        Mnemonic::Bvs => cpu.flag_v,
        _ => unreachable!("{} is not a branch", mnemonic),
    }
}

/// Executes one of the eight conditional branches. No flags are affected.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.reset(0x1000);
/// cpu.memory_mut().load(0x1000, &[0xF0, 0x33]); // BEQ +$33
/// cpu.set_flag_z(true);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.pc(), 0x1035);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic) {
    let offset = cpu.fetch_byte();

    if !condition(cpu, mnemonic) {
        return;
    }

    cpu.tick();
    let target = relative_target(cpu.pc, offset);
    if page_crossed(cpu.pc, target) {
        cpu.tick();
    }
    cpu.pc = target;
}
