//! Program image loading and whole-program runs.

use cpu6502::{FlatMemory, LoadError, MemoryBus, CPU};

#[test]
fn test_load_program_places_body_at_header_address() {
    let mut cpu = CPU::new(FlatMemory::new());

    let start = cpu.load_program(&[0x00, 0x10, 0xA9, 0xFF, 0x85, 0x90]).unwrap();

    assert_eq!(start, 0x1000);
    assert_eq!(cpu.pc(), 0x1000);
    assert_eq!(cpu.memory().read(0x1000), 0xA9);
    assert_eq!(cpu.memory().read(0x1003), 0x90);
    assert_eq!(cpu.memory().read(0x1004), 0x00);
}

#[test]
fn test_load_program_header_only() {
    let mut cpu = CPU::new(FlatMemory::new());

    assert_eq!(cpu.load_program(&[0x34, 0x12]), Ok(0x1234));
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_load_program_too_short() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.reset(0x8000);

    assert_eq!(
        cpu.load_program(&[]),
        Err(LoadError::MissingLoadAddress { len: 0 })
    );
    assert_eq!(
        cpu.load_program(&[0x10]),
        Err(LoadError::MissingLoadAddress { len: 1 })
    );
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_load_program_wraps_past_top_of_memory() {
    let mut cpu = CPU::new(FlatMemory::new());

    cpu.load_program(&[0xFE, 0xFF, 0x01, 0x02, 0x03]).unwrap();

    assert_eq!(cpu.memory().read(0xFFFE), 0x01);
    assert_eq!(cpu.memory().read(0xFFFF), 0x02);
    assert_eq!(cpu.memory().read(0x0000), 0x03);
}

#[test]
fn test_demo_program() {
    let mut cpu = CPU::new(FlatMemory::new());

    //         lda #$FF
    // start:  sta $90
    //         sta $8000
    //         eor #$CC
    //         jmp start
    let program = [
        0x00, 0x10, 0xA9, 0xFF, 0x85, 0x90, 0x8D, 0x00, 0x80, 0x49, 0xCC, 0x4C, 0x02, 0x10,
    ];
    cpu.load_program(&program).unwrap();

    // LDA 2, then one loop pass: STA zp 3, STA abs 4, EOR 2, JMP 3
    assert_eq!(cpu.execute(14), Ok(14));
    assert_eq!(cpu.pc(), 0x1002);
    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cpu.memory().read(0x0090), 0xFF);
    assert_eq!(cpu.memory().read(0x8000), 0xFF);

    // Second pass stores the flipped value
    assert_eq!(cpu.execute(12), Ok(12));
    assert_eq!(cpu.a(), 0xFF);
    assert_eq!(cpu.memory().read(0x0090), 0x33);
    assert_eq!(cpu.memory().read(0x8000), 0x33);
    assert!(cpu.flag_n());
}

#[test]
fn test_table_sum_loop() {
    let mut cpu = CPU::new(FlatMemory::new());

    // Sums the four bytes at $0200 into $10
    //         ldx #$00
    //         lda #$00
    //         clc
    // loop:   adc $0200,x
    //         inx
    //         cpx #$04
    //         bne loop
    //         sta $10
    let program = [
        0x00, 0x30, 0xA2, 0x00, 0xA9, 0x00, 0x18, 0x7D, 0x00, 0x02, 0xE8, 0xE0, 0x04, 0xD0,
        0xF8, 0x85, 0x10,
    ];
    cpu.load_program(&program).unwrap();
    cpu.memory_mut().load(0x0200, &[0x10, 0x20, 0x30, 0x40]);

    while cpu.pc() != 0x300F {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.memory().read(0x0010), 0xA0);
    assert_eq!(cpu.x(), 0x04);
}
