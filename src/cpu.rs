//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, U, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Cycle Accounting
//!
//! Cycles are charged by the bus primitives in this module and in `stack`:
//! one per byte fetched, read, written, pushed or popped, plus `tick()` for
//! internal cycles with no useful transfer. Instruction handlers never add
//! cycle counts directly.
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `execute()`: Execute whole instructions until a cycle budget is met

use crate::instructions;
use crate::{ExecutionError, LoadError, MemoryBus, Opcode};

/// Address `CPU::new` resets the program counter to.
pub const DEFAULT_RESET_VECTOR: u16 = 0xFFFC;

/// 6502 CPU state and execution context.
///
/// The CPU owns its memory bus exclusively; there is no internal locking.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// let cpu = CPU::new(FlatMemory::new());
///
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.status(), 0x00);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Unused/expansion bit of the status byte
    pub(crate) flag_u: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Decimal mode flag (stored only, arithmetic is always binary)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow, clear on borrow)
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed since the last reset
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over `memory` and resets it to `DEFAULT_RESET_VECTOR`.
    ///
    /// Resetting clears the memory, so program bytes are placed after construction.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            flag_n: false,
            flag_v: false,
            flag_u: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            memory,
        };
        cpu.reset(DEFAULT_RESET_VECTOR);
        cpu
    }

    /// Re-initializes the processor and zeroes memory.
    ///
    /// - PC is set to `reset_vector` itself (it is not read through)
    /// - SP is set to 0xFD, as after the three suppressed reset pushes
    /// - A, X, Y and every status flag are cleared
    /// - The cycle counter is cleared
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.memory_mut().write(0x1234, 0x56);
    /// cpu.set_a(0x10);
    ///
    /// cpu.reset(0x1000);
    ///
    /// assert_eq!(cpu.pc(), 0x1000);
    /// assert_eq!(cpu.a(), 0x00);
    /// assert_eq!(cpu.memory().read(0x1234), 0x00);
    /// ```
    pub fn reset(&mut self, reset_vector: u16) {
        log::debug!("reset: pc=0x{:04X}", reset_vector);

        self.pc = reset_vector;
        self.sp = 0xFD;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.set_status(0x00);
        self.cycles = 0;
        self.memory.reset();
    }

    /// Executes one instruction to completion.
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnknownOpcode` if the byte at PC is not an implemented
    /// opcode. Nothing is modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.reset(0x8000);
    /// cpu.memory_mut().write(0x8000, 0xEA); // NOP
    /// cpu.memory_mut().write(0x8001, 0x02); // undocumented
    ///
    /// cpu.step().unwrap();
    /// assert_eq!(cpu.cycles(), 2);
    ///
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnknownOpcode { opcode: 0x02, address: 0x8001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let address = self.pc;
        let byte = self.memory.read(address);

        let opcode = match Opcode::from_byte(byte) {
            Some(opcode) => opcode,
            None => {
                log::error!("unknown opcode 0x{:02X} at 0x{:04X}", byte, address);
                return Err(ExecutionError::UnknownOpcode {
                    opcode: byte,
                    address,
                });
            }
        };

        if log::log_enabled!(log::Level::Trace) {
            let metadata = opcode.metadata();
            log::trace!(
                "{:04X}  {:02X}  {} {:?}",
                address,
                byte,
                metadata.mnemonic,
                metadata.addressing_mode
            );
        }

        self.fetch_byte();
        instructions::execute(self, opcode);

        Ok(())
    }

    /// Runs whole instructions until at least `cycles` cycles have been consumed.
    ///
    /// Instructions are atomic, so the returned count may exceed the request.
    /// A request of zero executes nothing.
    ///
    /// # Errors
    ///
    /// Stops at the first unknown opcode. Instructions before it stay executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.reset(0x8000);
    /// cpu.memory_mut().write(0x8000, 0xA9); // LDA #$84
    /// cpu.memory_mut().write(0x8001, 0x84);
    ///
    /// // LDA immediate takes 2 cycles even when only 1 is asked for
    /// assert_eq!(cpu.execute(1).unwrap(), 2);
    /// ```
    pub fn execute(&mut self, cycles: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;

        while self.cycles - start_cycles < cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Loads a program image and points PC at it.
    ///
    /// The first two bytes are the little-endian load address; the rest are
    /// copied into memory from there. Returns the load address.
    ///
    /// # Errors
    ///
    /// `LoadError::MissingLoadAddress` if the image is shorter than two bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// let start = cpu.load_program(&[0x00, 0x10, 0xA9, 0xFF]).unwrap();
    ///
    /// assert_eq!(start, 0x1000);
    /// assert_eq!(cpu.pc(), 0x1000);
    /// assert_eq!(cpu.memory().read(0x1001), 0xFF);
    /// ```
    pub fn load_program(&mut self, program: &[u8]) -> Result<u16, LoadError> {
        let (header, body) = match program {
            [lo, hi, body @ ..] => (u16::from_le_bytes([*lo, *hi]), body),
            _ => {
                return Err(LoadError::MissingLoadAddress { len: program.len() });
            }
        };

        log::debug!(
            "loading {} byte(s) at 0x{:04X}",
            body.len(),
            header
        );

        self.memory.load(header, body);
        self.pc = header;

        Ok(header)
    }

    // ========== Bus Primitives ==========

    /// Charges one internal cycle.
    pub(crate) fn tick(&mut self) {
        self.cycles += 1;
    }

    /// Reads the byte at PC and advances PC. One cycle.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        self.tick();
        value
    }

    /// Reads a little-endian word at PC and advances PC by two. Two cycles.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads one byte without moving PC. One cycle.
    pub(crate) fn read_byte(&mut self, addr: u16) -> u8 {
        self.tick();
        self.memory.read(addr)
    }

    /// Writes one byte without moving PC. One cycle.
    pub(crate) fn write_byte(&mut self, addr: u16, value: u8) {
        self.tick();
        self.memory.write(addr, value);
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// Accesses through it are not charged cycles.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Unused status bit is set.
    pub fn flag_u(&self) -> bool {
        self.flag_u
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters (test setup and inspection) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer (offset into page 0x01).
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets or clears the Unused flag (bit 5 of the status byte).
    pub fn set_flag_u(&mut self, value: bool) {
        self.flag_u = value;
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets or clears the Decimal flag. Arithmetic stays binary either way.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}

impl Default for CPU<crate::FlatMemory> {
    fn default() -> Self {
        Self::new(crate::FlatMemory::new())
    }
}
