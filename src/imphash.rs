//! Import hash pipeline: sniff, guard, read, normalize, digest.

use crate::config::ImphashConfig;
use crate::error::{ContainerError, ImphashError, Result};
use crate::format::BinaryFormat;
use crate::formats::elf::check_section_sizes;
use crate::hashing::build_result;
use crate::normalize::{self, NormalizedImports};
use crate::readers;
use crate::scratch::SCRATCH;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

/// Import fingerprint of one binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpHashResult {
    /// MD5 of the canonical import string, 32 lowercase hex characters
    #[serde(rename = "ImpHash")]
    pub imp_hash: String,
    /// ssdeep digest of `imp_string`; empty if it could not be computed
    #[serde(rename = "ImpFuzzy")]
    pub imp_fuzzy: String,
    /// Canonical import string padded with spaces
    #[serde(rename = "ImpString")]
    pub imp_string: String,
}

/// Compute the import fingerprint of a binary held in memory.
pub fn imphash_from_bytes(data: &[u8]) -> Result<ImpHashResult> {
    imphash_from_bytes_with_config(data, &ImphashConfig::default())
}

/// Like [`imphash_from_bytes`], with explicit configuration.
pub fn imphash_from_bytes_with_config(
    data: &[u8],
    config: &ImphashConfig,
) -> Result<ImpHashResult> {
    let format = BinaryFormat::sniff(data).ok_or(ImphashError::UnsupportedFormat)?;
    let span = debug_span!("imphash", %format, len = data.len());
    let _guard = span.enter();

    let mut imports = normalized_imports(format, data)?;
    debug!(tokens = imports.token_count(), "normalized imports");

    let mut canonical = SCRATCH.acquire();
    imports.write_canonical(&mut canonical);
    Ok(build_result(&mut canonical, config))
}

/// Fingerprint many independent binaries in parallel.
///
/// Results come back in input order; one failing input does not affect the
/// others.
pub fn imphash_batch(inputs: &[&[u8]]) -> Vec<Result<ImpHashResult>> {
    inputs
        .par_iter()
        .map(|data| imphash_from_bytes(data))
        .collect()
}

fn normalized_imports(format: BinaryFormat, data: &[u8]) -> Result<NormalizedImports> {
    let container = |e: ContainerError| ImphashError::container(format, e);
    match format {
        BinaryFormat::Pe => {
            let descriptors = readers::pe::import_descriptors(data).map_err(container)?;
            debug!(descriptors = descriptors.len(), "read PE imports");
            Ok(normalize::pe::normalize(&descriptors))
        }
        BinaryFormat::Elf => {
            check_section_sizes(data)?;
            let entries = readers::elf::imported_symbols(data).map_err(container)?;
            debug!(entries = entries.len(), "read ELF imports");
            Ok(normalize::elf::normalize(&entries))
        }
        BinaryFormat::MachO => {
            let image = readers::macho::thin_imports(data).map_err(container)?;
            debug!(
                libraries = image.libraries.len(),
                symbols = image.symbols.len(),
                "read Mach-O imports"
            );
            Ok(normalize::macho::normalize_thin(&image))
        }
        BinaryFormat::MachOFat => {
            let slices = readers::macho::fat_imports(data).map_err(container)?;
            debug!(slices = slices.len(), "read fat Mach-O imports");
            Ok(normalize::macho::normalize_fat(&slices))
        }
    }
}
