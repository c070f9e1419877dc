//! Import hashing for executable binaries.
//!
//! Computes an "imphash" fingerprint from the import table of a PE, ELF or
//! Mach-O (thin or fat) image: the imports are normalized into a sorted,
//! comma-joined canonical string, which is then digested with MD5 and with
//! an ssdeep-style fuzzy hash for similarity clustering.
//!
//! ```no_run
//! let data = std::fs::read("sample.exe").unwrap();
//! let result = imphash::imphash_from_bytes(&data).unwrap();
//! println!("{} {}", result.imp_hash, result.imp_fuzzy);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod formats;
pub mod hashing;
pub mod imphash;
pub mod logging;
pub mod normalize;
pub mod readers;
pub mod scratch;
pub mod similarity;

pub use config::ImphashConfig;
pub use error::{ContainerError, ImphashError, Result};
pub use format::BinaryFormat;
pub use imphash::{imphash_batch, imphash_from_bytes, imphash_from_bytes_with_config, ImpHashResult};
pub use normalize::NormalizedImports;
pub use readers::{ImportEntry, MachOImports};
