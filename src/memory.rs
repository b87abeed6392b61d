//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from its
//! memory backend, and `FlatMemory`, the 64KB RAM the core normally runs on.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - every 16-bit address is valid, reads/writes always succeed
//! - Word accesses are little-endian (low byte at the lower address)
//! - No cycle accounting here; the CPU charges cycles for its own accesses

/// Memory bus trait for CPU to read/write bytes.
///
/// Only `read` and `write` are required. The word accessors, `load` and
/// `reset` are provided in terms of them.
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.write_word(0x2000, 0xBEEF);
/// assert_eq!(mem.read(0x2000), 0xEF);
/// assert_eq!(mem.read(0x2001), 0xBE);
/// assert_eq!(mem.read_word(0x2000), 0xBEEF);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The high-byte address is `addr + 1` modulo 65536, so a read at `0xFFFF`
    /// takes its high byte from `0x0000`.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word, low byte first.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past `0xFFFF`.
    fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Sets every cell to zero.
    ///
    /// Called by `CPU::reset`. The default writes all 65536 addresses
    /// through `write`.
    fn reset(&mut self) {
        for addr in 0..=0xFFFFu16 {
            self.write(addr, 0x00);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cpu6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x1000, &[0xA9, 0xFF]);
/// assert_eq!(mem.read(0x1000), 0xA9);
/// assert_eq!(mem.read(0x1001), 0xFF);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Returns the whole address space as a slice, indexed by address.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn reset(&mut self) {
        self.data.fill(0x00);
    }
}
