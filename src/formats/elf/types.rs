//! ELF identification and header types

use thiserror::Error;

/// Failures while reading the ELF header or section-header table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElfError {
    #[error("not an ELF image")]
    InvalidMagic,
    #[error("unknown ELF class {0}")]
    UnsupportedClass(u8),
    #[error("unknown ELF data encoding {0}")]
    UnsupportedData(u8),
    #[error("ELF image truncated: {needed} bytes needed at {offset:#x}")]
    Truncated { offset: usize, needed: usize },
    #[error("section header entries are {found} bytes, expected {expected}")]
    BadSectionEntrySize { expected: usize, found: u16 },
}

pub type Result<T> = std::result::Result<T, ElfError>;

pub const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// `EI_CLASS`: word size of the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfClass {
    Elf32,
    Elf64,
}

impl TryFrom<u8> for ElfClass {
    type Error = ElfError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Elf32),
            2 => Ok(Self::Elf64),
            other => Err(ElfError::UnsupportedClass(other)),
        }
    }
}

impl ElfClass {
    pub fn header_size(self) -> usize {
        match self {
            Self::Elf32 => 52,
            Self::Elf64 => 64,
        }
    }

    pub fn section_header_size(self) -> usize {
        match self {
            Self::Elf32 => 40,
            Self::Elf64 => 64,
        }
    }

    /// Offset of `sh_size` within one section header
    pub fn sh_size_offset(self) -> usize {
        match self {
            Self::Elf32 => 20,
            Self::Elf64 => 32,
        }
    }
}

/// `EI_DATA`: byte order of every multi-byte field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfData {
    Little,
    Big,
}

impl TryFrom<u8> for ElfData {
    type Error = ElfError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Little),
            2 => Ok(Self::Big),
            other => Err(ElfError::UnsupportedData(other)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ElfIdent {
    pub class: ElfClass,
    pub data: ElfData,
}

/// Where the section-header table lives and how many entries it has
#[derive(Debug, Clone, Copy)]
pub struct ElfHeader {
    pub ident: ElfIdent,
    pub e_shoff: u64,
    pub e_shnum: u16,
}
