//! # Addressing Modes
//!
//! This module defines the 6502 addressing modes and the resolver that turns
//! an instruction's operand bytes into an effective address. Resolution is
//! done through the CPU's bus primitives, so every byte fetched or read while
//! resolving is charged its cycle here.
//!
//! Page-crossing rule: Absolute,X / Absolute,Y / (Indirect),Y add the index
//! with a full 16-bit add. When the high byte changes, the fix-up costs one
//! extra cycle. Writes always pay that cycle, reads only on a crossing.
//! Zero-page indexing wraps inside page 0 and never crosses.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X with X=0xFF reads 0x007F
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Kind of bus access an instruction makes through its effective address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    /// Loads, logical, arithmetic and compare: fix-up cycle only on page crossing.
    Read,
    /// Stores and read-modify-write: fix-up cycle always paid.
    Write,
}

/// Result of resolving an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// The byte following the opcode is the value itself.
    Immediate(u8),
    /// The value lives in memory at this effective address.
    Address(u16),
}

/// Returns true if `a` and `b` lie on different 256-byte pages.
pub fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Applies a branch displacement to the address of the next instruction.
///
/// `offset` is the raw operand byte, read as two's complement and sign-extended
/// before a wrapping 16-bit add.
pub fn relative_target(next_pc: u16, offset: u8) -> u16 {
    next_pc.wrapping_add_signed(offset as i8 as i16)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand of a reading instruction.
    ///
    /// Immediate mode yields the fetched byte; every other mode yields the
    /// effective address without reading it.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            _ => Operand::Address(self.effective_address(mode, Access::Read)),
        }
    }

    /// Resolves and reads the operand value for a reading instruction.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> u8 {
        match self.resolve_operand(mode) {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.read_byte(addr),
        }
    }

    /// Computes the effective address for a memory addressing mode.
    ///
    /// # Panics
    ///
    /// Panics for Implicit, Accumulator, Immediate and Relative, which have no
    /// effective address. The opcode table never routes those here.
    pub(crate) fn effective_address(&mut self, mode: AddressingMode, access: Access) -> u16 {
        match mode {
            AddressingMode::ZeroPage => self.fetch_byte() as u16,
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                self.tick();
                base.wrapping_add(self.x) as u16
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                self.tick();
                base.wrapping_add(self.y) as u16
            }
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                self.index_absolute(base, self.x, access)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                self.index_absolute(base, self.y, access)
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                self.read_word_within_page(pointer)
            }
            AddressingMode::IndirectX => {
                let base = self.fetch_byte();
                self.tick();
                self.read_zero_page_word(base.wrapping_add(self.x))
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte();
                let base = self.read_zero_page_word(pointer);
                self.index_absolute(base, self.y, access)
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => {
                unreachable!("{:?} has no effective address", mode)
            }
        }
    }

    fn index_absolute(&mut self, base: u16, index: u8, access: Access) -> u16 {
        let addr = base.wrapping_add(index as u16);
        if access == Access::Write || page_crossed(base, addr) {
            self.tick();
        }
        addr
    }

    /// Reads a pointer stored in zero page; the high byte wraps to `$00`.
    fn read_zero_page_word(&mut self, pointer: u8) -> u16 {
        let lo = self.read_byte(pointer as u16) as u16;
        let hi = self.read_byte(pointer.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// JMP ($xxFF) takes its high byte from $xx00 on the NMOS 6502.
    fn read_word_within_page(&mut self, pointer: u16) -> u16 {
        let lo = self.read_byte(pointer) as u16;
        let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
        let hi = self.read_byte(hi_addr) as u16;
        (hi << 8) | lo
    }
}
