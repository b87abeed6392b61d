//! # 6502 Instruction Execution Core
//!
//! A cycle-counting emulation of the 6502 fetch-decode-execute engine: the
//! register file, status flags, a flat 64KB address space, the addressing-mode
//! resolver, stack discipline and the documented instruction set (minus the
//! interrupt instructions and decimal mode).
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//! cpu.reset(0x8000);
//!
//! // LDA #$42
//! cpu.memory_mut().write(0x8000, 0xA9);
//! cpu.memory_mut().write(0x8001, 0x42);
//!
//! let used = cpu.execute(2).unwrap();
//! assert_eq!(used, 2);
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, bus primitives and the execution loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `addressing` - Addressing modes and effective-address resolution
//! - `status` - Status byte layout and flag-computation rules
//! - `stack` - Push/pop through page 0x01
//! - `opcodes` - Opcode enumeration and metadata table

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod stack;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, DEFAULT_RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, Opcode, OpcodeMetadata, OPCODE_TABLE};

/// Errors that stop CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at the program counter is not an implemented opcode.
    ///
    /// `address` is where the opcode was found. The CPU is left untouched: PC
    /// still points at the offending byte and no cycle was charged.
    UnknownOpcode { opcode: u8, address: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, address } => {
                write!(f, "Unknown opcode 0x{:02X} at 0x{:04X}", opcode, address)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

/// Errors from [`CPU::load_program`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The image is too short to hold the two-byte load address.
    MissingLoadAddress { len: usize },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadError::MissingLoadAddress { len } => write!(
                f,
                "Program image of {} byte(s) has no two-byte load address",
                len
            ),
        }
    }
}

impl std::error::Error for LoadError {}
