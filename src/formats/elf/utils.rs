//! Utility functions for ELF parsing

use crate::formats::elf::types::{ElfData, ElfError, Result};

/// Trait for reading values with endianness support
pub trait EndianRead {
    fn read_u16(&self, offset: usize, data: ElfData) -> Result<u16>;
    fn read_u32(&self, offset: usize, data: ElfData) -> Result<u32>;
    fn read_u64(&self, offset: usize, data: ElfData) -> Result<u64>;
}

fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| bytes.get(offset..end))
        .and_then(|slice| slice.try_into().ok())
        .ok_or(ElfError::Truncated { offset, needed: N })
}

impl EndianRead for [u8] {
    fn read_u16(&self, offset: usize, data: ElfData) -> Result<u16> {
        let bytes = read_array::<2>(self, offset)?;
        Ok(match data {
            ElfData::Little => u16::from_le_bytes(bytes),
            ElfData::Big => u16::from_be_bytes(bytes),
        })
    }

    fn read_u32(&self, offset: usize, data: ElfData) -> Result<u32> {
        let bytes = read_array::<4>(self, offset)?;
        Ok(match data {
            ElfData::Little => u32::from_le_bytes(bytes),
            ElfData::Big => u32::from_be_bytes(bytes),
        })
    }

    fn read_u64(&self, offset: usize, data: ElfData) -> Result<u64> {
        let bytes = read_array::<8>(self, offset)?;
        Ok(match data {
            ElfData::Little => u64::from_le_bytes(bytes),
            ElfData::Big => u64::from_be_bytes(bytes),
        })
    }
}

/// Check if a range is within bounds
pub fn check_bounds(offset: usize, size: usize, data_len: usize) -> Result<()> {
    match offset.checked_add(size) {
        Some(end) if end <= data_len => Ok(()),
        _ => Err(ElfError::Truncated {
            offset,
            needed: size,
        }),
    }
}
