//! Opcode table validation tests
//!
//! Verifies that the opcode metadata table is complete, consistent with the
//! decoder, and that every opcode actually costs what the table says.

use cpu6502::{AddressingMode, FlatMemory, MemoryBus, Mnemonic, Opcode, CPU, OPCODE_TABLE};

#[test]
fn test_table_matches_decoder() {
    for byte in 0..=255u8 {
        let decoded = Opcode::from_byte(byte).map(Opcode::metadata);
        assert_eq!(
            OPCODE_TABLE[byte as usize], decoded,
            "Table entry for 0x{:02X} disagrees with the decoder",
            byte
        );
    }
}

#[test]
fn test_implemented_opcode_count() {
    let implemented = OPCODE_TABLE.iter().filter(|m| m.is_some()).count();
    assert_eq!(implemented, 149);
    assert_eq!(Opcode::ALL.len(), implemented);
}

#[test]
fn test_opcode_bytes_round_trip() {
    for &opcode in Opcode::ALL {
        assert_eq!(Opcode::try_from(opcode.byte()), Ok(opcode));
        assert_eq!(u8::from(opcode), opcode.byte());
    }
    assert_eq!(Opcode::try_from(0xFFu8), Err(0xFF));
}

#[test]
fn test_size_matches_addressing_mode() {
    for &opcode in Opcode::ALL {
        let metadata = opcode.metadata();
        assert_eq!(
            metadata.size_bytes,
            1 + metadata.addressing_mode.operand_bytes(),
            "{:?} size disagrees with {:?}",
            opcode,
            metadata.addressing_mode
        );
    }
}

#[test]
fn test_interrupt_and_illegal_opcodes_absent() {
    // BRK, RTI and a sample of undocumented opcodes
    for byte in [0x00u8, 0x40, 0x02, 0x1A, 0x80, 0xA3, 0xEB, 0xFF] {
        assert!(
            OPCODE_TABLE[byte as usize].is_none(),
            "0x{:02X} should not be implemented",
            byte
        );
    }
}

#[test]
fn test_known_entries() {
    let jmp_indirect = Opcode::JmpIndirect.metadata();
    assert_eq!(jmp_indirect.mnemonic, Mnemonic::Jmp);
    assert_eq!(jmp_indirect.addressing_mode, AddressingMode::Indirect);
    assert_eq!(jmp_indirect.base_cycles, 5);
    assert_eq!(jmp_indirect.size_bytes, 3);

    let sta_indirect_y = Opcode::StaIndirectY.metadata();
    assert_eq!(sta_indirect_y.base_cycles, 6);

    let inc_absolute_x = Opcode::IncAbsoluteX.metadata();
    assert_eq!(inc_absolute_x.base_cycles, 7);

    assert_eq!(Mnemonic::Lda.to_string(), "LDA");
    assert!(Mnemonic::Bvs.is_branch());
    assert!(!Mnemonic::Jmp.is_branch());
}

/// Status that makes the given branch fall through.
fn not_taken_status(mnemonic: Mnemonic) -> u8 {
    match mnemonic {
        Mnemonic::Bcc | Mnemonic::Bne | Mnemonic::Bpl | Mnemonic::Bvc => 0xFF,
        _ => 0x00,
    }
}

#[test]
fn test_every_opcode_costs_base_cycles() {
    for &opcode in Opcode::ALL {
        let metadata = opcode.metadata();

        let mut cpu = CPU::new(FlatMemory::new());
        cpu.reset(0x8000);

        // Operand $00 / $2000 with X=Y=0 never crosses a page
        cpu.memory_mut().load(0x8000, &[opcode.byte(), 0x00, 0x20]);
        cpu.set_status(not_taken_status(metadata.mnemonic));

        cpu.step().unwrap();

        assert_eq!(
            cpu.cycles(),
            metadata.base_cycles as u64,
            "{:?} (0x{:02X}) cycle count",
            opcode,
            opcode.byte()
        );

        if !matches!(
            metadata.mnemonic,
            Mnemonic::Jmp | Mnemonic::Jsr | Mnemonic::Rts
        ) {
            assert_eq!(
                cpu.pc(),
                0x8000 + metadata.size_bytes as u16,
                "{:?} (0x{:02X}) program counter advance",
                opcode,
                opcode.byte()
            );
        }
    }
}
