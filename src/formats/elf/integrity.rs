//! Section-size sanity check run before ELF import extraction.
//!
//! Declared section sizes larger than the input can push a downstream parser
//! into huge allocations or out-of-bounds reads. Each declared size, and the
//! running total of all sizes seen so far, must fit within the input length.

use crate::error::{ImphashError, Result};
use crate::format::BinaryFormat;
use crate::formats::elf::headers::parse_header;
use crate::formats::elf::sections::SectionHeaders;
use thiserror::Error;
use tracing::{debug, warn};

/// Which size bound a section-header table violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionSizeViolation {
    /// A single section declares more bytes than the input holds
    #[error("section {index} too large: {size} > {limit}")]
    SectionTooLarge { index: usize, size: u64, limit: u64 },

    /// Sections `0..=index` together declare more bytes than the input holds
    #[error("sections up to {index} too large: {total} > {limit}")]
    CumulativeTooLarge { index: usize, total: u64, limit: u64 },
}

/// Validate the declared section sizes of an ELF image against its length.
pub fn check_section_sizes(data: &[u8]) -> Result<()> {
    let header =
        parse_header(data).map_err(|e| ImphashError::container(BinaryFormat::Elf, e))?;
    let sections = SectionHeaders::parse(data, &header)
        .map_err(|e| ImphashError::container(BinaryFormat::Elf, e))?;

    let limit = data.len() as u64;
    let mut total: u64 = 0;
    for (index, size) in sections.sizes().enumerate() {
        let size = size.map_err(|e| ImphashError::container(BinaryFormat::Elf, e))?;
        if size > limit {
            warn!(index, size, limit, "ELF section larger than input");
            return Err(SectionSizeViolation::SectionTooLarge { index, size, limit }.into());
        }
        total = total.saturating_add(size);
        if total > limit {
            warn!(index, total, limit, "ELF sections larger than input");
            return Err(SectionSizeViolation::CumulativeTooLarge {
                index,
                total,
                limit,
            }
            .into());
        }
    }

    debug!(
        sections = sections.count(),
        declared = total,
        class = ?header.ident.class,
        "ELF section sizes consistent"
    );
    Ok(())
}
