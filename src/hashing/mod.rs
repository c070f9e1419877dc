//! Digest building: exact hash, padding and fuzzy hash of a canonical string.

use crate::config::ImphashConfig;
use crate::imphash::ImpHashResult;
use crate::similarity::fuzzy_hash;
use tracing::warn;

/// Computes the MD5 digest of the given data and returns it as a hex string.
pub fn md5_digest(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// Append spaces to `buf` until it is at least `min_len` bytes long.
pub fn pad_with_spaces(buf: &mut String, min_len: usize) {
    if buf.len() < min_len {
        let missing = min_len - buf.len();
        buf.reserve(missing);
        buf.extend(std::iter::repeat(' ').take(missing));
    }
}

/// Turn a canonical import string into the final result.
///
/// `canonical` is padded in place. A fuzzy-hash failure leaves `imp_fuzzy`
/// empty; the exact digest is unaffected.
pub fn build_result(canonical: &mut String, config: &ImphashConfig) -> ImpHashResult {
    let imp_hash = md5_digest(canonical.as_bytes());
    pad_with_spaces(canonical, config.min_imp_string_len);

    let imp_fuzzy = if config.compute_fuzzy {
        match fuzzy_hash(canonical.as_bytes()) {
            Ok(digest) => digest,
            Err(e) => {
                warn!(error = %e, "fuzzy hash unavailable");
                String::new()
            }
        }
    } else {
        String::new()
    };

    ImpHashResult {
        imp_hash,
        imp_fuzzy,
        imp_string: canonical.clone(),
    }
}
