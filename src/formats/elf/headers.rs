//! ELF header parsing

use crate::formats::elf::types::*;
use crate::formats::elf::utils::EndianRead;

/// Parse ELF identification bytes
pub fn parse_ident(data: &[u8]) -> Result<ElfIdent> {
    if data.len() < 16 {
        return Err(ElfError::Truncated {
            offset: 0,
            needed: 16,
        });
    }

    if &data[0..4] != ELF_MAGIC {
        return Err(ElfError::InvalidMagic);
    }

    Ok(ElfIdent {
        class: ElfClass::try_from(data[4])?,
        data: ElfData::try_from(data[5])?,
    })
}

/// Parse the fields of the ELF header that locate the section-header table
pub fn parse_header(data: &[u8]) -> Result<ElfHeader> {
    let ident = parse_ident(data)?;

    let header_size = ident.class.header_size();
    if data.len() < header_size {
        return Err(ElfError::Truncated {
            offset: 0,
            needed: header_size,
        });
    }

    let endian = ident.data;
    let (e_shoff, e_shentsize, e_shnum) = match ident.class {
        ElfClass::Elf32 => (
            data.read_u32(32, endian)? as u64,
            data.read_u16(46, endian)?,
            data.read_u16(48, endian)?,
        ),
        ElfClass::Elf64 => (
            data.read_u64(40, endian)?,
            data.read_u16(58, endian)?,
            data.read_u16(60, endian)?,
        ),
    };

    let expected = ident.class.section_header_size();
    if e_shnum > 0 && e_shentsize as usize != expected {
        return Err(ElfError::BadSectionEntrySize {
            expected,
            found: e_shentsize,
        });
    }

    Ok(ElfHeader {
        ident,
        e_shoff,
        e_shnum,
    })
}
