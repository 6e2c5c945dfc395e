//! ELF32 object parsing.
//!
//! Parses the header and section header table, locates the `.text` and
//! `.symtab` sections by name, and reads the symbol table with names
//! resolved through the section-header string table.

mod header;
mod section;
mod symbol;

pub use header::{ElfHeader, ELF32_HEADER_SIZE, ELF_MAGIC};
pub use section::{SectionHeader, SectionInfo, SECTION_HEADER_SIZE};
pub use symbol::{SymbolBinding, SymbolEntry, SymbolKind, SymbolVisibility, SYMBOL_ENTRY_SIZE};

use crate::FormatError;

/// A parsed ELF32 object.
#[derive(Debug)]
pub struct Elf32<'a> {
    /// Raw bytes of the file.
    data: &'a [u8],
    /// Parsed ELF header.
    pub header: ElfHeader,
    /// Section headers with resolved names.
    pub sections: Vec<SectionHeader>,
    /// Byte range of `.text` (zero if absent).
    pub text: SectionInfo,
    /// Byte range of `.symtab` (zero if absent).
    pub symtab: SectionInfo,
    /// Byte range of the section-header string table.
    pub shstrtab: SectionInfo,
    /// Symbol records in file order.
    symbols: Vec<SymbolEntry>,
}

impl<'a> Elf32<'a> {
    /// Parse an ELF32 object from raw bytes.
    pub fn parse(data: &'a [u8]) -> Result<Self, FormatError> {
        let header = ElfHeader::parse(data)?;
        let mut sections = Self::parse_section_headers(data, &header)?;

        // The string table's own entry is read first; section names can
        // only be resolved through it.
        let shstrtab = match sections.get(header.e_shstrndx as usize) {
            Some(entry) => entry.info(),
            None => SectionInfo::default(),
        };
        let names = StringTable::new(shstrtab.slice(data, ".shstrtab")?);

        for section in &mut sections {
            if let Some(name) = names.get(section.sh_name as usize) {
                section.set_name(name.to_string());
            }
        }

        let text = Self::section_info(&sections, ".text");
        let symtab = Self::section_info(&sections, ".symtab");

        let symbols = Self::read_symbols(data, symtab, &names)?;

        Ok(Self {
            data,
            header,
            sections,
            text,
            symtab,
            shstrtab,
            symbols,
        })
    }

    fn parse_section_headers(
        data: &[u8],
        header: &ElfHeader,
    ) -> Result<Vec<SectionHeader>, FormatError> {
        let mut sections = Vec::with_capacity(header.e_shnum as usize);
        let mut offset = header.e_shoff as usize;

        for _ in 0..header.e_shnum {
            if offset + header.e_shentsize as usize > data.len() {
                return Err(FormatError::too_short(
                    offset + header.e_shentsize as usize,
                    data.len(),
                ));
            }
            sections.push(SectionHeader::parse(&data[offset..])?);
            offset += header.e_shentsize as usize;
        }

        Ok(sections)
    }

    /// Byte range of the named section, or the zero default when absent.
    /// Absent `.text`/`.symtab` sections produce an empty listing rather
    /// than an error.
    fn section_info(sections: &[SectionHeader], name: &str) -> SectionInfo {
        sections
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.info())
            .unwrap_or_default()
    }

    /// Parse the 16-byte symbol slots of `.symtab`, resolving each name
    /// through the section-header string table.
    fn read_symbols(
        data: &[u8],
        symtab: SectionInfo,
        names: &StringTable,
    ) -> Result<Vec<SymbolEntry>, FormatError> {
        let table = symtab.slice(data, ".symtab")?;
        let count = table.len() / SYMBOL_ENTRY_SIZE;
        let mut symbols = Vec::with_capacity(count);

        for i in 0..count {
            let slot = &table[i * SYMBOL_ENTRY_SIZE..];
            let mut entry = SymbolEntry::parse(slot)?;
            entry.name = names.get(entry.st_name as usize).unwrap_or("").to_string();
            symbols.push(entry);
        }

        Ok(symbols)
    }

    /// Returns the symbol records in file order.
    pub fn symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    /// Returns the `.text` section's bytes.
    pub fn text_data(&self) -> Result<&'a [u8], FormatError> {
        self.text.slice(self.data, ".text")
    }

    /// Returns the section with the given name.
    pub fn section_by_name(&self, name: &str) -> Option<&SectionHeader> {
        self.sections.iter().find(|s| s.name() == name)
    }
}

/// A string table of null-terminated strings.
#[derive(Debug)]
struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn get(&self, offset: usize) -> Option<&'a str> {
        if offset >= self.data.len() {
            return None;
        }
        let remaining = &self.data[offset..];
        let end = remaining.iter().position(|&b| b == 0)?;
        std::str::from_utf8(&remaining[..end]).ok()
    }
}
