//! PE import normalization.

use super::NormalizedImports;
use std::collections::BTreeMap;
use tracing::trace;

/// Group `"symbol:library"` descriptors by normalized library name.
///
/// Descriptors without a `:` are ordinal-only imports and are left out of
/// the fingerprint. Library and symbol are lowercased and one trailing
/// `.dll` or `.sys` is removed from the library.
pub fn normalize<S: AsRef<str>>(descriptors: &[S]) -> NormalizedImports {
    let mut libraries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for descriptor in descriptors {
        let descriptor = descriptor.as_ref();
        let mut parts = descriptor.split(':');
        let (Some(symbol), Some(library)) = (parts.next(), parts.next()) else {
            trace!(descriptor, "skipping import without a name");
            continue;
        };
        libraries
            .entry(normalize_library(library))
            .or_default()
            .push(symbol.to_lowercase());
    }
    NormalizedImports::Paired(libraries)
}

fn normalize_library(library: &str) -> String {
    let library = library.to_lowercase();
    if let Some(stem) = library.strip_suffix(".dll") {
        stem.to_string()
    } else if let Some(stem) = library.strip_suffix(".sys") {
        stem.to_string()
    } else {
        library
    }
}
