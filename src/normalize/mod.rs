//! Canonical import sets and their serialization.
//!
//! PE and ELF keep the library/symbol pairing; Mach-O flattens libraries and
//! symbols into one set. Either way the serialized form depends only on the
//! set contents, never on the order a container reported them in.

pub mod elf;
pub mod macho;
pub mod pe;

use std::collections::{BTreeMap, BTreeSet};

/// Format-dependent canonical import representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedImports {
    /// Normalized library name -> symbol names
    Paired(BTreeMap<String, Vec<String>>),
    /// Library names and symbol names mixed, deduplicated
    Flat(BTreeSet<String>),
}

impl NormalizedImports {
    /// Number of tokens the canonical string will contain
    pub fn token_count(&self) -> usize {
        match self {
            Self::Paired(libraries) => libraries.values().map(Vec::len).sum(),
            Self::Flat(names) => names.len(),
        }
    }

    /// Append the comma-joined canonical form to `out`.
    ///
    /// Paired sets emit `library.symbol` for every symbol, libraries in byte
    /// order and symbols sorted within each library, with one comma between
    /// every token across all libraries.
    pub fn write_canonical(&mut self, out: &mut String) {
        match self {
            Self::Paired(libraries) => {
                let mut first = true;
                for (library, symbols) in libraries.iter_mut() {
                    symbols.sort_unstable();
                    for symbol in symbols.iter() {
                        if !first {
                            out.push(',');
                        }
                        first = false;
                        out.reserve(library.len() + symbol.len() + 1);
                        out.push_str(library);
                        out.push('.');
                        out.push_str(symbol);
                    }
                }
            }
            Self::Flat(names) => {
                for (idx, name) in names.iter().enumerate() {
                    if idx > 0 {
                        out.push(',');
                    }
                    out.push_str(name);
                }
            }
        }
    }

    /// Canonical form as a fresh string
    pub fn to_canonical_string(&mut self) -> String {
        let mut out = String::new();
        self.write_canonical(&mut out);
        out
    }
}

/// Truncate `name` before the first `marker`, unless the marker opens the name.
pub(crate) fn truncate_at(name: &str, marker: &str) -> String {
    match name.find(marker) {
        Some(idx) if idx > 0 => name[..idx].to_string(),
        _ => name.to_string(),
    }
}
