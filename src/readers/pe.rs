//! PE import descriptors.

use crate::error::ContainerError;
use crate::readers::lossy;
use object::read::pe::{ImageNtHeaders, ImageThunkData, PeFile};
use object::{FileKind, LittleEndian as LE};

/// Enumerate imports as `"symbol:library"` descriptors.
///
/// Imports by ordinal have no name to pair with the library and are reported
/// as `"#<ordinal>"`, without the delimiter.
///
/// The walk ends at the first descriptor without an import lookup table
/// (`OriginalFirstThunk == 0`), even if later descriptors are populated, so
/// images that only fill the address table (older Borland linkers) report
/// no imports from that descriptor on.
pub fn import_descriptors(data: &[u8]) -> Result<Vec<String>, ContainerError> {
    match FileKind::parse(data)? {
        FileKind::Pe32 => import_descriptors_impl::<object::pe::ImageNtHeaders32>(data),
        FileKind::Pe64 => import_descriptors_impl::<object::pe::ImageNtHeaders64>(data),
        _ => Err(ContainerError::Malformed("missing PE optional header")),
    }
}

fn import_descriptors_impl<Pe: ImageNtHeaders>(
    data: &[u8],
) -> Result<Vec<String>, ContainerError> {
    let pe = PeFile::<Pe>::parse(data)?;
    let mut descriptors = Vec::new();
    let Some(table) = pe.import_table()? else {
        return Ok(descriptors);
    };

    let mut libraries = table.descriptors()?;
    while let Some(desc) = libraries.next()? {
        let lookup_table = desc.original_first_thunk.get(LE);
        if lookup_table == 0 {
            break;
        }
        let library = lossy(table.name(desc.name.get(LE))?);
        let mut thunks = table.thunks(lookup_table)?;
        while let Some(thunk) = thunks.next::<Pe>()? {
            if thunk.is_ordinal() {
                descriptors.push(format!("#{}", thunk.ordinal()));
            } else {
                let (_hint, name) = table.hint_name(thunk.address())?;
                descriptors.push(format!("{}:{}", lossy(name), library));
            }
        }
    }
    Ok(descriptors)
}
