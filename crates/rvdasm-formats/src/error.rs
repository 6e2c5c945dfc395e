//! Error types for ELF parsing.

use thiserror::Error;

/// Error type for structural ELF violations.
#[derive(Error, Debug)]
pub enum FormatError {
    /// File is too short to contain required data.
    #[error("file too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// Invalid magic number at start of file.
    #[error("invalid magic number: expected 7f 'E' 'L' 'F', got {actual:02x?}")]
    InvalidMagic { actual: [u8; 4] },

    /// Not a 32-bit ELF file.
    #[error("unsupported ELF class: {0} (only ELFCLASS32 is supported)")]
    UnsupportedClass(u8),

    /// Not a little-endian ELF file.
    #[error("unsupported data encoding: {0} (only little-endian is supported)")]
    UnsupportedEncoding(u8),

    /// Unexpected ELF version.
    #[error("unsupported ELF version: {0}")]
    UnsupportedVersion(u8),

    /// The header declares no section header table.
    #[error("no section header table present")]
    NoSectionHeaders,

    /// A section's byte range runs past the end of the file.
    #[error("{name} section out of bounds: offset {offset:#x} + size {size:#x} exceeds file length {len}")]
    OutOfBounds {
        name: &'static str,
        offset: u32,
        size: u32,
        len: usize,
    },

    /// Truncated data while walking a byte stream.
    #[error("truncated {context}: need {needed} bytes at offset {offset:#x}")]
    Truncated {
        context: &'static str,
        offset: usize,
        needed: usize,
    },
}

impl FormatError {
    /// Creates a new TooShort error.
    pub fn too_short(expected: usize, actual: usize) -> Self {
        Self::TooShort { expected, actual }
    }

    /// Creates a new Truncated error.
    pub fn truncated(context: &'static str, offset: usize, needed: usize) -> Self {
        Self::Truncated {
            context,
            offset,
            needed,
        }
    }
}
