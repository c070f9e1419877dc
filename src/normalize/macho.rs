//! Mach-O import normalization (thin and fat).

use super::{truncate_at, NormalizedImports};
use crate::readers::MachOImports;
use std::collections::BTreeSet;

/// Flatten one image's libraries and symbols into a single set.
pub fn normalize_thin(image: &MachOImports) -> NormalizedImports {
    let mut names = BTreeSet::new();
    collect(image, &mut names);
    NormalizedImports::Flat(names)
}

/// Union of every slice's libraries and symbols.
pub fn normalize_fat(slices: &[MachOImports]) -> NormalizedImports {
    let mut names = BTreeSet::new();
    for slice in slices {
        collect(slice, &mut names);
    }
    NormalizedImports::Flat(names)
}

fn collect(image: &MachOImports, names: &mut BTreeSet<String>) {
    names.extend(
        image
            .libraries
            .iter()
            .map(|library| truncate_at(library, ".dylib")),
    );
    names.extend(image.symbols.iter().cloned());
}
