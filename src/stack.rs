//! # Stack Discipline
//!
//! The 6502 stack is the fixed page 0x0100-0x01FF and grows downward. The
//! stack pointer holds only the low byte; it wraps modulo 256 on overflow and
//! underflow, so the stack never leaves page 0x01.
//!
//! Each byte pushed or popped is one bus access and one cycle. Words are
//! pushed high byte first, leaving the low byte on top.

use crate::{MemoryBus, CPU};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

impl<M: MemoryBus> CPU<M> {
    /// Writes `value` at 0x0100 + SP, then decrements SP.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.push_byte(0x42);
    ///
    /// assert_eq!(cpu.memory().read(0x01FD), 0x42);
    /// assert_eq!(cpu.sp(), 0xFC);
    /// assert_eq!(cpu.cycles(), 1);
    /// ```
    pub fn push_byte(&mut self, value: u8) {
        self.write_byte(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads the byte at 0x0100 + SP.
    pub fn pop_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_byte(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte((value & 0xFF) as u8);
    }

    /// Pops a word, low byte first.
    pub fn pop_word(&mut self) -> u16 {
        let lo = self.pop_byte() as u16;
        let hi = self.pop_byte() as u16;
        (hi << 8) | lo
    }
}
