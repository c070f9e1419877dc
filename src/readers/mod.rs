//! Import enumeration on top of the `object` crate.
//!
//! Each reader walks just the import structures of one container format and
//! returns them raw, in encounter order. Normalization happens elsewhere.

pub mod elf;
pub mod macho;
pub mod pe;

/// A `(library, symbol)` pair as reported by a container, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    pub library: String,
    pub symbol: String,
}

impl ImportEntry {
    pub fn new(library: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            symbol: symbol.into(),
        }
    }
}

/// Imported libraries and symbols of a single Mach-O image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachOImports {
    pub libraries: Vec<String>,
    pub symbols: Vec<String>,
}

pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
