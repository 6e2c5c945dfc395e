//! # rvdasm-formats
//!
//! ELF32 container parsing for rvdasm.
//!
//! This crate locates and extracts the pieces of a 32-bit little-endian
//! ELF object that the disassembler consumes: the file header, the
//! section header table, the `.text` and `.symtab` sections, and the
//! symbol records with their resolved names.

pub mod elf;
pub mod error;

pub use elf::{Elf32, ElfHeader, SectionHeader, SectionInfo, SymbolEntry};
pub use elf::{SymbolBinding, SymbolKind, SymbolVisibility};
pub use error::FormatError;
