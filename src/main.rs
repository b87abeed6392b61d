use clap::Parser;
use cpu6502::{FlatMemory, LoadError, CPU};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::exit;

/// Load address $1000:
///
/// ```text
///         lda #$FF
/// start:  sta $90
///         sta $8000
///         eor #$CC
///         jmp start
/// ```
const DEMO_PROGRAM: [u8; 14] = [
    0x00, 0x10, 0xA9, 0xFF, 0x85, 0x90, 0x8D, 0x00, 0x80, 0x49, 0xCC, 0x4C, 0x02, 0x10,
];

#[derive(Parser, Debug)]
#[command(version, about = "Run a 6502 program image and print the register state", long_about = None)]
struct CommandLineArgs {
    /// Program image: two-byte little-endian load address followed by code.
    /// Runs a built-in demo when omitted.
    program: Option<PathBuf>,

    /// Cycle budget for the run
    #[arg(short, long, default_value_t = 1000)]
    cycles: u64,

    /// Start address in hex, overriding the image's load address
    #[arg(long, value_parser = parse_hex_u16)]
    reset_vector: Option<u16>,

    /// Log every executed instruction
    #[arg(long)]
    trace: bool,
}

fn parse_hex_u16(text: &str) -> Result<u16, String> {
    let digits = text
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('$');
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid address {text:?}: {e}"))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = CommandLineArgs::parse();

    let default_filter = if args.trace { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let image = match &args.program {
        Some(path) => fs::read(path)?,
        None => DEMO_PROGRAM.to_vec(),
    };

    let mut cpu = boot(&image, args.reset_vector)?;

    match cpu.execute(args.cycles) {
        Ok(used) => {
            println!("Cycles: {used}");
            print_registers(&cpu);
            Ok(())
        }
        Err(error) => {
            log::error!("execution halted: {error}");
            print_registers(&cpu);
            exit(1);
        }
    }
}

/// Loads `image` into a freshly reset CPU. PC is the load address unless
/// `start` overrides it.
fn boot(image: &[u8], start: Option<u16>) -> Result<CPU<FlatMemory>, LoadError> {
    let mut cpu = CPU::new(FlatMemory::new());
    let load_address = cpu.load_program(image)?;
    cpu.set_pc(start.unwrap_or(load_address));
    Ok(cpu)
}

fn print_registers(cpu: &CPU<FlatMemory>) {
    println!("PC: 0x{:04X}", cpu.pc());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("A:  0x{:02X}", cpu.a());
    println!("X:  0x{:02X}", cpu.x());
    println!("Y:  0x{:02X}", cpu.y());
    println!(
        "PS: 0x{:02X} (N={} V={} U={} B={} D={} I={} Z={} C={})",
        cpu.status(),
        cpu.flag_n() as u8,
        cpu.flag_v() as u8,
        cpu.flag_u() as u8,
        cpu.flag_b() as u8,
        cpu.flag_d() as u8,
        cpu.flag_i() as u8,
        cpu.flag_z() as u8,
        cpu.flag_c() as u8,
    );
}
