//! Section-header table enumeration
//!
//! Only the header metadata is touched; section contents are never read.

use crate::formats::elf::types::*;
use crate::formats::elf::utils::{check_bounds, EndianRead};

/// Lazy view over the section-header table of an ELF image.
pub struct SectionHeaders<'a> {
    data: &'a [u8],
    offset: usize,
    count: usize,
    class: ElfClass,
    endian: ElfData,
}

impl<'a> SectionHeaders<'a> {
    /// Locate the section-header table described by `header`.
    ///
    /// Fails when the table itself lies outside `data`.
    pub fn parse(data: &'a [u8], header: &ElfHeader) -> Result<Self> {
        let count = header.e_shnum as usize;
        let class = header.ident.class;
        let endian = header.ident.data;

        if count == 0 || header.e_shoff == 0 {
            return Ok(Self {
                data,
                offset: 0,
                count: 0,
                class,
                endian,
            });
        }

        let offset = usize::try_from(header.e_shoff).map_err(|_| ElfError::Truncated {
            offset: usize::MAX,
            needed: class.section_header_size(),
        })?;
        let table_size = count * class.section_header_size();
        check_bounds(offset, table_size, data.len())?;

        Ok(Self {
            data,
            offset,
            count,
            class,
            endian,
        })
    }

    /// Number of section headers
    pub fn count(&self) -> usize {
        self.count
    }

    /// Declared `sh_size` of the section at `index`
    pub fn size(&self, index: usize) -> Result<u64> {
        let at = self.offset
            + index * self.class.section_header_size()
            + self.class.sh_size_offset();
        match self.class {
            ElfClass::Elf32 => self.data.read_u32(at, self.endian).map(u64::from),
            ElfClass::Elf64 => self.data.read_u64(at, self.endian),
        }
    }

    /// Declared sizes of every section, in table order
    pub fn sizes(&self) -> impl Iterator<Item = Result<u64>> + '_ {
        (0..self.count).map(move |i| self.size(i))
    }
}
