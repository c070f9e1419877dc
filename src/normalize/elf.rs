//! ELF import normalization.
//!
//! Names keep their case: ELF symbol names are case-sensitive, and existing
//! fingerprints were computed without folding.

use super::{truncate_at, NormalizedImports};
use crate::readers::ImportEntry;
use std::collections::BTreeMap;

/// Group dynamic-symbol imports by library, dropping the `.so` version tail.
pub fn normalize(entries: &[ImportEntry]) -> NormalizedImports {
    let mut libraries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in entries {
        libraries
            .entry(truncate_at(&entry.library, ".so"))
            .or_default()
            .push(entry.symbol.clone());
    }
    NormalizedImports::Paired(libraries)
}
