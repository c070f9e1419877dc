//! Configuration for the import hashing pipeline.

use serde::{Deserialize, Serialize};

/// Padding target used by every published imphash fingerprint.
pub const DEFAULT_MIN_IMP_STRING_LEN: usize = 4096;

/// Pipeline configuration.
///
/// The defaults reproduce the standard fingerprint; changing them yields
/// hashes that are not comparable with ones computed under the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImphashConfig {
    /// Minimum length of `ImpString`; shorter canonical strings are padded with spaces.
    pub min_imp_string_len: usize,
    /// Whether to compute `ImpFuzzy` at all.
    pub compute_fuzzy: bool,
}

impl Default for ImphashConfig {
    fn default() -> Self {
        Self {
            min_imp_string_len: DEFAULT_MIN_IMP_STRING_LEN,
            compute_fuzzy: true,
        }
    }
}

impl ImphashConfig {
    /// Load a configuration from JSON; missing fields take their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
