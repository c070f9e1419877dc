//! Fuzzy hashing (ssdeep-compatible CTPH).
//!
//! Context-triggered piecewise hashing in the spamsum layout: a rolling hash
//! over a 7-byte window decides where pieces end, each piece contributes one
//! base64 character of an FNV-style hash, and the digest is
//! `"<blocksize>:<sig1>:<sig2>"` where `sig2` uses twice the block size.

use thiserror::Error;

const ROLLING_WINDOW: usize = 7;
const MIN_BLOCKSIZE: u32 = 3;
const HASH_PRIME: u32 = 0x0100_0193;
const HASH_INIT: u32 = 0x2802_1967;
const SPAMSUM_LENGTH: usize = 64;
const B64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Smallest input the hasher accepts.
pub const MIN_INPUT_LEN: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuzzyHashError {
    #[error("input too small for a meaningful fuzzy hash: {len} < {min}")]
    InputTooSmall { len: usize, min: usize },
}

/// Rolling hash used to find piece boundaries.
#[derive(Default)]
struct RollingHash {
    window: [u8; ROLLING_WINDOW],
    h1: u32,
    h2: u32,
    h3: u32,
    n: usize,
}

impl RollingHash {
    fn update(&mut self, byte: u8) {
        let c = u32::from(byte);
        self.h2 = self.h2.wrapping_sub(self.h1);
        self.h2 = self.h2.wrapping_add(ROLLING_WINDOW as u32 * c);
        self.h1 = self.h1.wrapping_add(c);
        self.h1 = self.h1.wrapping_sub(u32::from(self.window[self.n]));
        self.window[self.n] = byte;
        self.n = (self.n + 1) % ROLLING_WINDOW;
        self.h3 = (self.h3 << 5) ^ c;
    }

    fn sum(&self) -> u32 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }
}

fn sum_hash(byte: u8, h: u32) -> u32 {
    h.wrapping_mul(HASH_PRIME) ^ u32::from(byte)
}

fn b64(h: u32) -> char {
    B64[(h % 64) as usize] as char
}

fn initial_block_size(len: usize) -> u32 {
    let mut block_size = MIN_BLOCKSIZE;
    while (block_size as usize) * SPAMSUM_LENGTH < len {
        block_size *= 2;
    }
    block_size
}

/// One pass over the input at a fixed block size.
struct Pass {
    roll: RollingHash,
    h1: u32,
    h2: u32,
    sig1: String,
    sig2: String,
}

impl Pass {
    fn run(data: &[u8], block_size: u32) -> Self {
        let mut pass = Pass {
            roll: RollingHash::default(),
            h1: HASH_INIT,
            h2: HASH_INIT,
            sig1: String::with_capacity(SPAMSUM_LENGTH),
            sig2: String::with_capacity(SPAMSUM_LENGTH / 2),
        };
        let double = block_size * 2;
        for &byte in data {
            pass.h1 = sum_hash(byte, pass.h1);
            pass.h2 = sum_hash(byte, pass.h2);
            pass.roll.update(byte);
            let rh = pass.roll.sum();
            if rh % block_size == block_size - 1 {
                if pass.sig1.len() < SPAMSUM_LENGTH - 1 {
                    pass.sig1.push(b64(pass.h1));
                    pass.h1 = HASH_INIT;
                }
                if rh % double == double - 1 && pass.sig2.len() < SPAMSUM_LENGTH / 2 - 1 {
                    pass.sig2.push(b64(pass.h2));
                    pass.h2 = HASH_INIT;
                }
            }
        }
        pass
    }
}

/// Compute the ssdeep digest of `data`.
pub fn fuzzy_hash(data: &[u8]) -> Result<String, FuzzyHashError> {
    if data.len() < MIN_INPUT_LEN {
        return Err(FuzzyHashError::InputTooSmall {
            len: data.len(),
            min: MIN_INPUT_LEN,
        });
    }

    let mut block_size = initial_block_size(data.len());
    let mut pass = Pass::run(data, block_size);
    while block_size > MIN_BLOCKSIZE && pass.sig1.len() < SPAMSUM_LENGTH / 2 {
        block_size /= 2;
        pass = Pass::run(data, block_size);
    }

    if pass.roll.sum() != 0 {
        pass.sig1.push(b64(pass.h1));
        pass.sig2.push(b64(pass.h2));
    }
    Ok(format!("{}:{}:{}", block_size, pass.sig1, pass.sig2))
}
