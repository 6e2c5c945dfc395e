//! Listing and symbol table rendering.
//!
//! Walks the `.text` byte range, decoding 4-byte instructions and
//! skipping 2-byte compressed ones, then renders the instruction listing
//! and the symbol table dump as fixed-width text.

use std::collections::BTreeMap;

use rvdasm_disasm::decode;
use rvdasm_formats::{Elf32, FormatError, SymbolEntry};

/// Address-to-name lookup for instruction labels.
///
/// Built fully before the text walk and read-only afterwards. Addresses
/// are offsets relative to the start of `.text`. When several symbols
/// share an address the last one in symbol-table order wins.
pub type LabelMap = BTreeMap<u32, String>;

/// Builds the label map from the symbol records.
pub fn build_label_map(symbols: &[SymbolEntry]) -> LabelMap {
    let mut labels = LabelMap::new();
    for symbol in symbols {
        labels.insert(symbol.st_value, symbol.name.clone());
    }
    labels
}

/// Renders the complete output: the `.text` listing followed by the
/// `.symtab` dump. The whole result is assembled in memory so the caller
/// can write the output file in one atomic step.
pub fn render(elf: &Elf32) -> Result<String, FormatError> {
    let labels = build_label_map(elf.symbols());
    let mut out = String::new();
    render_text(elf.text_data()?, &labels, &mut out)?;
    render_symtab(elf.symbols(), &mut out);
    Ok(out)
}

/// Walks the `.text` bytes and emits one line per 4-byte instruction.
///
/// The low two bits of the next byte pick the unit size: `11` means a
/// standard 4-byte instruction, anything else a 2-byte compressed one,
/// which is skipped without output. Either way the cursor advances by
/// the unit size, so relative addresses stay aligned with symbol values.
pub fn render_text(
    data: &[u8],
    labels: &LabelMap,
    out: &mut String,
) -> Result<(), FormatError> {
    out.push_str(".text\n");

    let mut cursor = 0usize;
    while cursor < data.len() {
        if data[cursor] & 0b11 == 0b11 {
            if cursor + 4 > data.len() {
                return Err(FormatError::truncated("instruction stream", cursor, 4));
            }
            let word = u32::from_le_bytes([
                data[cursor],
                data[cursor + 1],
                data[cursor + 2],
                data[cursor + 3],
            ]);
            let label = labels
                .get(&(cursor as u32))
                .map(String::as_str)
                .unwrap_or("");
            out.push_str(&format!("{:08x} {:>10}: {}\n", cursor, label, decode(word)));
            cursor += 4;
        } else {
            if cursor + 2 > data.len() {
                return Err(FormatError::truncated("instruction stream", cursor, 2));
            }
            cursor += 2;
        }
    }

    out.push('\n');
    Ok(())
}

/// Renders the symbol table dump in symbol-table order.
pub fn render_symtab(symbols: &[SymbolEntry], out: &mut String) {
    out.push_str(".symtab\n");
    out.push_str(&format!(
        "{} {:<15} {:>7} {:<8} {:<8} {:<8} {:>6} {}\n",
        "Symbol", "Value", "Size", "Type", "Bind", "Vis", "Index", "Name"
    ));

    for (i, symbol) in symbols.iter().enumerate() {
        out.push_str(&format!(
            "[{:4}] 0x{:<15X} {:5} {:<8} {:<8} {:<8} {:>6} {}\n",
            i,
            symbol.st_value,
            symbol.st_size,
            symbol.kind().label(),
            symbol.binding().label(),
            symbol.visibility().label(),
            symbol.shndx_display(),
            symbol.name
        ));
    }
}
