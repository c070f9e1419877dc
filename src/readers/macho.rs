//! Mach-O imported libraries and symbols, for thin and fat images.

use crate::error::ContainerError;
use crate::readers::{lossy, MachOImports};
use object::macho;
use object::read::macho::{FatArch, MachHeader, MachOFatFile32, Nlist};
use object::{Endianness, FileKind};

/// Imported libraries and undefined symbols of a thin Mach-O image.
///
/// Libraries are the `LC_LOAD_DYLIB` names; symbols are the undefined range
/// of the symbol table as delimited by `LC_DYSYMTAB`. Both `LC_SYMTAB` and
/// `LC_DYSYMTAB` must be present.
pub fn thin_imports(data: &[u8]) -> Result<MachOImports, ContainerError> {
    match FileKind::parse(data)? {
        FileKind::MachO32 => thin_imports_impl::<macho::MachHeader32<Endianness>>(data),
        FileKind::MachO64 => thin_imports_impl::<macho::MachHeader64<Endianness>>(data),
        _ => Err(ContainerError::Malformed("not a thin Mach-O image")),
    }
}

/// Imports of every architecture slice of a fat Mach-O image, in slice order.
pub fn fat_imports(data: &[u8]) -> Result<Vec<MachOImports>, ContainerError> {
    let fat = MachOFatFile32::parse(data)?;
    if fat.arches().is_empty() {
        return Err(ContainerError::Malformed("fat image contains no slices"));
    }
    fat.arches()
        .iter()
        .map(|arch| {
            let slice = arch.data(data)?;
            match FileKind::parse(slice)? {
                FileKind::MachO32 | FileKind::MachO64 => thin_imports(slice),
                _ => Err(ContainerError::Malformed("fat slice is not a Mach-O image")),
            }
        })
        .collect()
}

fn thin_imports_impl<Mach: MachHeader<Endian = Endianness>>(
    data: &[u8],
) -> Result<MachOImports, ContainerError> {
    let header = Mach::parse(data, 0)?;
    let endian = header.endian()?;

    let mut imports = MachOImports::default();
    let mut symtab = None;
    let mut undefined = None;
    let mut commands = header.load_commands(endian, data, 0)?;
    while let Some(command) = commands.next()? {
        if command.cmd() == macho::LC_LOAD_DYLIB {
            if let Some(dylib) = command.dylib()? {
                let name = command.string(endian, dylib.dylib.name)?;
                imports.libraries.push(lossy(name));
            }
        } else if let Some(cmd) = command.symtab()? {
            symtab = Some(cmd);
        } else if let Some(cmd) = command.dysymtab()? {
            undefined = Some((
                cmd.iundefsym.get(endian) as usize,
                cmd.nundefsym.get(endian) as usize,
            ));
        }
    }

    let (Some(symtab), Some((first, count))) = (symtab, undefined) else {
        return Err(ContainerError::Malformed("missing symbol table"));
    };
    let symbols = symtab.symbols::<Mach, _>(endian, data)?;
    let nlists = symbols.iter().as_slice();
    let window = first
        .checked_add(count)
        .and_then(|end| nlists.get(first..end))
        .ok_or(ContainerError::Malformed(
            "undefined symbol range outside symbol table",
        ))?;
    for nlist in window {
        imports
            .symbols
            .push(lossy(nlist.name(endian, symbols.strings())?));
    }
    Ok(imports)
}
