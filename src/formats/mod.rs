//! Hand-rolled container format readers.

pub mod elf;
