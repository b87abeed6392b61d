//! # Status Flags
//!
//! Layout of the processor status byte and the flag-computation rules shared
//! by many instructions.
//!
//! ```text
//! +---+---+---+---+---+---+---+---+
//! | N | V | U | B | D | I | Z | C |
//! +---+---+---+---+---+---+---+---+
//!   7   6   5   4   3   2   1   0
//! ```
//!
//! All eight bits are stored. The Unused bit is carried through PHP/PLP and
//! `status()`/`set_status()` but no instruction tests it.

use crate::{MemoryBus, CPU};

pub const FLAG_CARRY: u8 = 0b0000_0001;
pub const FLAG_ZERO: u8 = 0b0000_0010;
pub const FLAG_INTERRUPT_DISABLE: u8 = 0b0000_0100;
pub const FLAG_DECIMAL: u8 = 0b0000_1000;
pub const FLAG_BREAK: u8 = 0b0001_0000;
pub const FLAG_UNUSED: u8 = 0b0010_0000;
pub const FLAG_OVERFLOW: u8 = 0b0100_0000;
pub const FLAG_NEGATIVE: u8 = 0b1000_0000;

/// Outcome of an 8-bit binary add with carry-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddResult {
    pub value: u8,
    /// Unsigned overflow out of bit 7.
    pub carry: bool,
    /// Signed overflow: both inputs share a sign the result does not.
    pub overflow: bool,
}

/// Adds `a + operand + carry_in` in two's complement.
///
/// Subtraction is `add_with_carry(a, !operand, carry)`: the carry flag acts as
/// an inverted borrow.
pub fn add_with_carry(a: u8, operand: u8, carry_in: bool) -> AddResult {
    let sum = a as u16 + operand as u16 + carry_in as u16;
    let value = sum as u8;
    AddResult {
        value,
        carry: sum > 0xFF,
        overflow: ((a ^ value) & (operand ^ value) & 0x80) != 0,
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Returns the status register as a packed byte (NV-BDIZC layout above).
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), 0x00);
    ///
    /// cpu.set_flag_n(true);
    /// cpu.set_flag_c(true);
    /// assert_eq!(cpu.status(), 0b1000_0001);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status = 0;

        if self.flag_n {
            status |= FLAG_NEGATIVE;
        }
        if self.flag_v {
            status |= FLAG_OVERFLOW;
        }
        if self.flag_u {
            status |= FLAG_UNUSED;
        }
        if self.flag_b {
            status |= FLAG_BREAK;
        }
        if self.flag_d {
            status |= FLAG_DECIMAL;
        }
        if self.flag_i {
            status |= FLAG_INTERRUPT_DISABLE;
        }
        if self.flag_z {
            status |= FLAG_ZERO;
        }
        if self.flag_c {
            status |= FLAG_CARRY;
        }

        status
    }

    /// Sets all eight flags from a packed status byte.
    pub fn set_status(&mut self, status: u8) {
        self.flag_n = status & FLAG_NEGATIVE != 0;
        self.flag_v = status & FLAG_OVERFLOW != 0;
        self.flag_u = status & FLAG_UNUSED != 0;
        self.flag_b = status & FLAG_BREAK != 0;
        self.flag_d = status & FLAG_DECIMAL != 0;
        self.flag_i = status & FLAG_INTERRUPT_DISABLE != 0;
        self.flag_z = status & FLAG_ZERO != 0;
        self.flag_c = status & FLAG_CARRY != 0;
    }

    /// Z = value is zero, N = bit 7 of value. Nothing else changes.
    pub(crate) fn set_zero_and_negative(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    /// A = A + operand + C, updating N, V, Z, C.
    pub(crate) fn add_to_accumulator(&mut self, operand: u8) {
        let result = add_with_carry(self.a, operand, self.flag_c);
        self.a = result.value;
        self.flag_c = result.carry;
        self.flag_v = result.overflow;
        self.set_zero_and_negative(result.value);
    }

    /// Compares `register` with `operand` as CMP/CPX/CPY do.
    ///
    /// C = register >= operand (unsigned), Z and N from `register - operand`.
    /// V is not affected.
    pub(crate) fn compare(&mut self, register: u8, operand: u8) {
        let result = register.wrapping_sub(operand);
        self.flag_c = register >= operand;
        self.set_zero_and_negative(result);
    }
}
