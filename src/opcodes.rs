//! # Opcode Definitions
//!
//! This module is the single source of truth for the instruction set the
//! core executes. Every implemented opcode byte maps to exactly one `Opcode`
//! variant, and every variant carries its `OpcodeMetadata`:
//!
//! - Mnemonic (instruction family)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Instruction size in bytes
//!
//! Bytes with no variant (BRK, RTI and the undocumented opcodes) decode to
//! `None` and stop execution with `ExecutionError::UnknownOpcode`.

use crate::addressing::AddressingMode;

/// Instruction families, one per 6502 mnemonic implemented by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Three-letter assembler name, e.g. `"LDA"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }

    /// True for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
        )
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Mnemonic, Opcode};
///
/// let lda_imm = Opcode::LdaImmediate.metadata();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction family.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, including the opcode fetch.
    ///
    /// Loads in Absolute,X / Absolute,Y / (Indirect),Y add one on page
    /// crossing; branches add one when taken and another on page crossing.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

macro_rules! opcodes {
    ($($byte:literal => $variant:ident, $mnemonic:ident, $mode:ident, $cycles:literal, $size:literal;)*) => {
        /// Every opcode the core executes, keyed by its byte value.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum Opcode {
            $($variant = $byte,)*
        }

        impl Opcode {
            /// All implemented opcodes, grouped by instruction family.
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant,)*];

            /// Decodes an opcode byte, `None` if no instruction is implemented for it.
            pub const fn from_byte(byte: u8) -> Option<Opcode> {
                match byte {
                    $($byte => Some(Opcode::$variant),)*
                    _ => None,
                }
            }

            /// Static decode information for this opcode.
            pub const fn metadata(self) -> OpcodeMetadata {
                match self {
                    $(Opcode::$variant => OpcodeMetadata {
                        mnemonic: Mnemonic::$mnemonic,
                        addressing_mode: AddressingMode::$mode,
                        base_cycles: $cycles,
                        size_bytes: $size,
                    },)*
                }
            }
        }
    };
}

opcodes! {
    // Load/Store
    0xA9 => LdaImmediate, Lda, Immediate, 2, 2;
    0xA5 => LdaZeroPage, Lda, ZeroPage, 3, 2;
    0xB5 => LdaZeroPageX, Lda, ZeroPageX, 4, 2;
    0xAD => LdaAbsolute, Lda, Absolute, 4, 3;
    0xBD => LdaAbsoluteX, Lda, AbsoluteX, 4, 3;
    0xB9 => LdaAbsoluteY, Lda, AbsoluteY, 4, 3;
    0xA1 => LdaIndirectX, Lda, IndirectX, 6, 2;
    0xB1 => LdaIndirectY, Lda, IndirectY, 5, 2;
    0xA2 => LdxImmediate, Ldx, Immediate, 2, 2;
    0xA6 => LdxZeroPage, Ldx, ZeroPage, 3, 2;
    0xB6 => LdxZeroPageY, Ldx, ZeroPageY, 4, 2;
    0xAE => LdxAbsolute, Ldx, Absolute, 4, 3;
    0xBE => LdxAbsoluteY, Ldx, AbsoluteY, 4, 3;
    0xA0 => LdyImmediate, Ldy, Immediate, 2, 2;
    0xA4 => LdyZeroPage, Ldy, ZeroPage, 3, 2;
    0xB4 => LdyZeroPageX, Ldy, ZeroPageX, 4, 2;
    0xAC => LdyAbsolute, Ldy, Absolute, 4, 3;
    0xBC => LdyAbsoluteX, Ldy, AbsoluteX, 4, 3;
    0x85 => StaZeroPage, Sta, ZeroPage, 3, 2;
    0x95 => StaZeroPageX, Sta, ZeroPageX, 4, 2;
    0x8D => StaAbsolute, Sta, Absolute, 4, 3;
    0x9D => StaAbsoluteX, Sta, AbsoluteX, 5, 3;
    0x99 => StaAbsoluteY, Sta, AbsoluteY, 5, 3;
    0x81 => StaIndirectX, Sta, IndirectX, 6, 2;
    0x91 => StaIndirectY, Sta, IndirectY, 6, 2;
    0x86 => StxZeroPage, Stx, ZeroPage, 3, 2;
    0x96 => StxZeroPageY, Stx, ZeroPageY, 4, 2;
    0x8E => StxAbsolute, Stx, Absolute, 4, 3;
    0x84 => StyZeroPage, Sty, ZeroPage, 3, 2;
    0x94 => StyZeroPageX, Sty, ZeroPageX, 4, 2;
    0x8C => StyAbsolute, Sty, Absolute, 4, 3;

    // Register Transfers
    0xAA => Tax, Tax, Implicit, 2, 1;
    0xA8 => Tay, Tay, Implicit, 2, 1;
    0x8A => Txa, Txa, Implicit, 2, 1;
    0x98 => Tya, Tya, Implicit, 2, 1;
    0xBA => Tsx, Tsx, Implicit, 2, 1;
    0x9A => Txs, Txs, Implicit, 2, 1;

    // Stack Operations
    0x48 => Pha, Pha, Implicit, 3, 1;
    0x08 => Php, Php, Implicit, 3, 1;
    0x68 => Pla, Pla, Implicit, 4, 1;
    0x28 => Plp, Plp, Implicit, 4, 1;

    // Logical
    0x29 => AndImmediate, And, Immediate, 2, 2;
    0x25 => AndZeroPage, And, ZeroPage, 3, 2;
    0x35 => AndZeroPageX, And, ZeroPageX, 4, 2;
    0x2D => AndAbsolute, And, Absolute, 4, 3;
    0x3D => AndAbsoluteX, And, AbsoluteX, 4, 3;
    0x39 => AndAbsoluteY, And, AbsoluteY, 4, 3;
    0x21 => AndIndirectX, And, IndirectX, 6, 2;
    0x31 => AndIndirectY, And, IndirectY, 5, 2;
    0x49 => EorImmediate, Eor, Immediate, 2, 2;
    0x45 => EorZeroPage, Eor, ZeroPage, 3, 2;
    0x55 => EorZeroPageX, Eor, ZeroPageX, 4, 2;
    0x4D => EorAbsolute, Eor, Absolute, 4, 3;
    0x5D => EorAbsoluteX, Eor, AbsoluteX, 4, 3;
    0x59 => EorAbsoluteY, Eor, AbsoluteY, 4, 3;
    0x41 => EorIndirectX, Eor, IndirectX, 6, 2;
    0x51 => EorIndirectY, Eor, IndirectY, 5, 2;
    0x09 => OraImmediate, Ora, Immediate, 2, 2;
    0x05 => OraZeroPage, Ora, ZeroPage, 3, 2;
    0x15 => OraZeroPageX, Ora, ZeroPageX, 4, 2;
    0x0D => OraAbsolute, Ora, Absolute, 4, 3;
    0x1D => OraAbsoluteX, Ora, AbsoluteX, 4, 3;
    0x19 => OraAbsoluteY, Ora, AbsoluteY, 4, 3;
    0x01 => OraIndirectX, Ora, IndirectX, 6, 2;
    0x11 => OraIndirectY, Ora, IndirectY, 5, 2;
    0x24 => BitZeroPage, Bit, ZeroPage, 3, 2;
    0x2C => BitAbsolute, Bit, Absolute, 4, 3;

    // Arithmetic
    0x69 => AdcImmediate, Adc, Immediate, 2, 2;
    0x65 => AdcZeroPage, Adc, ZeroPage, 3, 2;
    0x75 => AdcZeroPageX, Adc, ZeroPageX, 4, 2;
    0x6D => AdcAbsolute, Adc, Absolute, 4, 3;
    0x7D => AdcAbsoluteX, Adc, AbsoluteX, 4, 3;
    0x79 => AdcAbsoluteY, Adc, AbsoluteY, 4, 3;
    0x61 => AdcIndirectX, Adc, IndirectX, 6, 2;
    0x71 => AdcIndirectY, Adc, IndirectY, 5, 2;
    0xE9 => SbcImmediate, Sbc, Immediate, 2, 2;
    0xE5 => SbcZeroPage, Sbc, ZeroPage, 3, 2;
    0xF5 => SbcZeroPageX, Sbc, ZeroPageX, 4, 2;
    0xED => SbcAbsolute, Sbc, Absolute, 4, 3;
    0xFD => SbcAbsoluteX, Sbc, AbsoluteX, 4, 3;
    0xF9 => SbcAbsoluteY, Sbc, AbsoluteY, 4, 3;
    0xE1 => SbcIndirectX, Sbc, IndirectX, 6, 2;
    0xF1 => SbcIndirectY, Sbc, IndirectY, 5, 2;
    0xC9 => CmpImmediate, Cmp, Immediate, 2, 2;
    0xC5 => CmpZeroPage, Cmp, ZeroPage, 3, 2;
    0xD5 => CmpZeroPageX, Cmp, ZeroPageX, 4, 2;
    0xCD => CmpAbsolute, Cmp, Absolute, 4, 3;
    0xDD => CmpAbsoluteX, Cmp, AbsoluteX, 4, 3;
    0xD9 => CmpAbsoluteY, Cmp, AbsoluteY, 4, 3;
    0xC1 => CmpIndirectX, Cmp, IndirectX, 6, 2;
    0xD1 => CmpIndirectY, Cmp, IndirectY, 5, 2;
    0xE0 => CpxImmediate, Cpx, Immediate, 2, 2;
    0xE4 => CpxZeroPage, Cpx, ZeroPage, 3, 2;
    0xEC => CpxAbsolute, Cpx, Absolute, 4, 3;
    0xC0 => CpyImmediate, Cpy, Immediate, 2, 2;
    0xC4 => CpyZeroPage, Cpy, ZeroPage, 3, 2;
    0xCC => CpyAbsolute, Cpy, Absolute, 4, 3;

    // Increments & Decrements
    0xE6 => IncZeroPage, Inc, ZeroPage, 5, 2;
    0xF6 => IncZeroPageX, Inc, ZeroPageX, 6, 2;
    0xEE => IncAbsolute, Inc, Absolute, 6, 3;
    0xFE => IncAbsoluteX, Inc, AbsoluteX, 7, 3;
    0xC6 => DecZeroPage, Dec, ZeroPage, 5, 2;
    0xD6 => DecZeroPageX, Dec, ZeroPageX, 6, 2;
    0xCE => DecAbsolute, Dec, Absolute, 6, 3;
    0xDE => DecAbsoluteX, Dec, AbsoluteX, 7, 3;
    0xE8 => Inx, Inx, Implicit, 2, 1;
    0xC8 => Iny, Iny, Implicit, 2, 1;
    0xCA => Dex, Dex, Implicit, 2, 1;
    0x88 => Dey, Dey, Implicit, 2, 1;

    // Shifts
    0x0A => AslAccumulator, Asl, Accumulator, 2, 1;
    0x06 => AslZeroPage, Asl, ZeroPage, 5, 2;
    0x16 => AslZeroPageX, Asl, ZeroPageX, 6, 2;
    0x0E => AslAbsolute, Asl, Absolute, 6, 3;
    0x1E => AslAbsoluteX, Asl, AbsoluteX, 7, 3;
    0x4A => LsrAccumulator, Lsr, Accumulator, 2, 1;
    0x46 => LsrZeroPage, Lsr, ZeroPage, 5, 2;
    0x56 => LsrZeroPageX, Lsr, ZeroPageX, 6, 2;
    0x4E => LsrAbsolute, Lsr, Absolute, 6, 3;
    0x5E => LsrAbsoluteX, Lsr, AbsoluteX, 7, 3;
    0x2A => RolAccumulator, Rol, Accumulator, 2, 1;
    0x26 => RolZeroPage, Rol, ZeroPage, 5, 2;
    0x36 => RolZeroPageX, Rol, ZeroPageX, 6, 2;
    0x2E => RolAbsolute, Rol, Absolute, 6, 3;
    0x3E => RolAbsoluteX, Rol, AbsoluteX, 7, 3;
    0x6A => RorAccumulator, Ror, Accumulator, 2, 1;
    0x66 => RorZeroPage, Ror, ZeroPage, 5, 2;
    0x76 => RorZeroPageX, Ror, ZeroPageX, 6, 2;
    0x6E => RorAbsolute, Ror, Absolute, 6, 3;
    0x7E => RorAbsoluteX, Ror, AbsoluteX, 7, 3;

    // Jumps & Calls
    0x4C => JmpAbsolute, Jmp, Absolute, 3, 3;
    0x6C => JmpIndirect, Jmp, Indirect, 5, 3;
    0x20 => Jsr, Jsr, Absolute, 6, 3;
    0x60 => Rts, Rts, Implicit, 6, 1;

    // Branches
    0x90 => Bcc, Bcc, Relative, 2, 2;
    0xB0 => Bcs, Bcs, Relative, 2, 2;
    0xF0 => Beq, Beq, Relative, 2, 2;
    0x30 => Bmi, Bmi, Relative, 2, 2;
    0xD0 => Bne, Bne, Relative, 2, 2;
    0x10 => Bpl, Bpl, Relative, 2, 2;
    0x50 => Bvc, Bvc, Relative, 2, 2;
    0x70 => Bvs, Bvs, Relative, 2, 2;

    // Status Flag Changes
    0x18 => Clc, Clc, Implicit, 2, 1;
    0xD8 => Cld, Cld, Implicit, 2, 1;
    0x58 => Cli, Cli, Implicit, 2, 1;
    0xB8 => Clv, Clv, Implicit, 2, 1;
    0x38 => Sec, Sec, Implicit, 2, 1;
    0xF8 => Sed, Sed, Implicit, 2, 1;
    0x78 => Sei, Sei, Implicit, 2, 1;

    // System Functions
    0xEA => Nop, Nop, Implicit, 2, 1;
}

impl Opcode {
    /// The opcode byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Fails with the unmapped byte itself.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Opcode::from_byte(byte).ok_or(byte)
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode.byte()
    }
}

/// 256-entry opcode metadata table indexed by opcode byte value.
///
/// `None` marks bytes that do not decode to an implemented instruction.
///
/// # Examples
///
/// ```
/// use cpu6502::{Mnemonic, OPCODE_TABLE};
///
/// let jsr = OPCODE_TABLE[0x20].unwrap();
/// assert_eq!(jsr.mnemonic, Mnemonic::Jsr);
/// assert_eq!(jsr.base_cycles, 6);
///
/// // BRK is outside the implemented set
/// assert!(OPCODE_TABLE[0x00].is_none());
/// ```
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut byte = 0;
    while byte < 256 {
        table[byte] = match Opcode::from_byte(byte as u8) {
            Some(opcode) => Some(opcode.metadata()),
            None => None,
        };
        byte += 1;
    }
    table
}
