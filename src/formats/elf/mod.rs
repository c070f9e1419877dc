//! Minimal ELF header reader
//!
//! Reads just enough of the file header and section-header table to bound
//! declared section sizes before the full container parser runs.

pub mod headers;
pub mod integrity;
pub mod sections;
pub mod types;
pub mod utils;

pub use integrity::{check_section_sizes, SectionSizeViolation};
pub use types::*;
