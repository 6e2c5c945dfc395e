//! rvdasm - a RISC-V ELF32 object disassembler
//!
//! Usage:
//!   rvdasm <input> <output>
//!
//! Reads a 32-bit little-endian ELF object containing RISC-V machine
//! code and writes a labeled `.text` instruction listing followed by a
//! `.symtab` dump to the output file.

mod listing;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rvdasm_formats::Elf32;

#[derive(Parser)]
#[command(name = "rvdasm")]
#[command(about = "A RISC-V ELF32 object disassembler", long_about = None)]
struct Cli {
    /// Path to the input ELF object
    input: PathBuf,

    /// Path to the output listing file
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data = fs::read(&cli.input)
        .with_context(|| format!("failed to read ELF file: {}", cli.input.display()))?;

    let elf = Elf32::parse(&data).context("failed to parse ELF file")?;

    // Rendered fully in memory before touching the output path, so the
    // output file is either complete or not created at all.
    let text = listing::render(&elf).context("failed to disassemble .text section")?;

    fs::write(&cli.output, text)
        .with_context(|| format!("failed to write listing: {}", cli.output.display()))?;

    Ok(())
}
