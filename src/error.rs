//! Error types for import hashing.
//!
//! Fatal failures are reported through [`ImphashError`]; the fuzzy-hash stage
//! has its own error type that never escapes the digest builder.

use crate::format::BinaryFormat;
use crate::formats::elf::integrity::SectionSizeViolation;
use crate::formats::elf::ElfError;
use thiserror::Error;

/// Main error type for import hashing.
#[derive(Debug, Error)]
pub enum ImphashError {
    /// No known magic number at the start of the buffer
    #[error("unrecognized binary format")]
    UnsupportedFormat,

    /// ELF section-header table declares sizes that do not fit the input
    #[error("malformed ELF sections: {0}")]
    MalformedElfSections(#[from] SectionSizeViolation),

    /// The container parser rejected the buffer
    #[error("failed to parse {format} container: {source}")]
    ContainerParse {
        format: BinaryFormat,
        #[source]
        source: ContainerError,
    },
}

impl ImphashError {
    pub(crate) fn container(format: BinaryFormat, source: impl Into<ContainerError>) -> Self {
        Self::ContainerParse {
            format,
            source: source.into(),
        }
    }
}

/// Errors surfaced by the container readers.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Error from the `object` parser, passed through unchanged
    #[error(transparent)]
    Object(#[from] object::Error),

    /// Error from the ELF section-header reader
    #[error(transparent)]
    Elf(#[from] ElfError),

    /// Structural problem found while walking import tables
    #[error("{0}")]
    Malformed(&'static str),
}

/// Result type alias for import hashing operations
pub type Result<T> = std::result::Result<T, ImphashError>;
