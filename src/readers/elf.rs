//! ELF dynamic-symbol imports.
//!
//! An import is a global, undefined entry of `.dynsym`. Its library is taken
//! from the GNU version-needs table: the symbol's `.gnu.version` index names a
//! `Vernaux`, whose parent `Verneed` records the needed file.

use crate::error::ContainerError;
use crate::readers::{lossy, ImportEntry};
use object::elf;
use object::read::elf::{FileHeader, Sym};
use object::{Endianness, FileKind};
use std::collections::HashMap;

/// Enumerate `(library, symbol)` imports of an ELF image.
///
/// Symbols without version information are reported with an empty library.
/// An image without a `.dynsym` section, such as a statically linked
/// executable, has no import table and is rejected.
pub fn imported_symbols(data: &[u8]) -> Result<Vec<ImportEntry>, ContainerError> {
    match FileKind::parse(data)? {
        FileKind::Elf32 => imported_symbols_impl::<elf::FileHeader32<Endianness>>(data),
        FileKind::Elf64 => imported_symbols_impl::<elf::FileHeader64<Endianness>>(data),
        _ => Err(ContainerError::Malformed("not an ELF image")),
    }
}

fn imported_symbols_impl<Elf: FileHeader<Endian = Endianness>>(
    data: &[u8],
) -> Result<Vec<ImportEntry>, ContainerError> {
    let header = Elf::parse(data)?;
    let endian = header.endian()?;
    let sections = header.sections(endian, data)?;
    let symbols = sections.symbols(endian, data, elf::SHT_DYNSYM)?;
    if symbols.symbols().is_empty() {
        return Err(ContainerError::Malformed("no dynamic symbol table"));
    }

    // version index -> needed file
    let mut needed: HashMap<u16, String> = HashMap::new();
    if let Some((mut verneeds, link)) = sections.gnu_verneed(endian, data)? {
        let strings = sections.strings(endian, data, link)?;
        while let Some((verneed, mut vernauxs)) = verneeds.next()? {
            let file = lossy(verneed.file(endian, strings)?);
            while let Some(vernaux) = vernauxs.next()? {
                let index = vernaux.vna_other.get(endian) & elf::VERSYM_VERSION;
                needed.insert(index, file.clone());
            }
        }
    }
    let versyms = sections
        .gnu_versym(endian, data)?
        .map(|(versyms, _)| versyms)
        .unwrap_or(&[]);

    let mut imports = Vec::new();
    for (index, sym) in symbols.symbols().iter().enumerate() {
        if sym.st_bind() != elf::STB_GLOBAL || sym.st_shndx(endian) != elf::SHN_UNDEF {
            continue;
        }
        let name = lossy(sym.name(endian, symbols.strings())?);
        let library = versyms
            .get(index)
            .map(|v| v.0.get(endian) & elf::VERSYM_VERSION)
            .and_then(|v| needed.get(&v))
            .cloned()
            .unwrap_or_default();
        imports.push(ImportEntry::new(library, name));
    }
    Ok(imports)
}
