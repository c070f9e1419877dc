//! Magic-number sniffing for the supported container formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const PE_MAGIC: &[u8] = b"MZ";
const ELF_MAGIC: &[u8] = b"\x7fELF";
const MACHO_MAGICS: [&[u8]; 4] = [
    &[0xfe, 0xed, 0xfa, 0xce], // 32-bit
    &[0xce, 0xfa, 0xed, 0xfe], // 32-bit, swapped
    &[0xfe, 0xed, 0xfa, 0xcf], // 64-bit
    &[0xcf, 0xfa, 0xed, 0xfe], // 64-bit, swapped
];
const FAT_MAGIC: &[u8] = &[0xca, 0xfe, 0xba, 0xbe];

/// Container format of an input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryFormat {
    Pe,
    Elf,
    MachO,
    MachOFat,
}

impl BinaryFormat {
    /// Classify a buffer from its leading magic bytes.
    ///
    /// Only the prefix is inspected; a matching prefix followed by garbage
    /// still classifies, and the container parser reports the damage later.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        let format = if data.starts_with(PE_MAGIC) {
            Some(Self::Pe)
        } else if data.starts_with(ELF_MAGIC) {
            Some(Self::Elf)
        } else if MACHO_MAGICS.iter().any(|m| data.starts_with(m)) {
            Some(Self::MachO)
        } else if data.starts_with(FAT_MAGIC) {
            Some(Self::MachOFat)
        } else {
            None
        };
        debug!(?format, len = data.len(), "sniffed container format");
        format
    }
}

impl fmt::Display for BinaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryFormat::Pe => write!(f, "PE"),
            BinaryFormat::Elf => write!(f, "ELF"),
            BinaryFormat::MachO => write!(f, "Mach-O"),
            BinaryFormat::MachOFat => write!(f, "Mach-O (fat)"),
        }
    }
}
