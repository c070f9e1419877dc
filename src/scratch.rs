//! Pool of reusable string buffers for canonical-string building.
//!
//! Buffers are handed out through [`ScratchBuffer`], which derefs to the
//! underlying `String` and returns it to the pool on drop. A buffer is always
//! empty when acquired; its contents never outlive the borrow.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// Buffers idle in the pool beyond this count are freed instead of kept.
const MAX_POOLED: usize = 64;
/// Buffers that grew past this capacity are freed instead of kept.
const MAX_RETAINED_CAPACITY: usize = 1 << 20;

/// Concurrency-safe pool of `String` buffers.
pub struct ScratchPool {
    buffers: Mutex<Vec<String>>,
}

impl ScratchPool {
    pub const fn new() -> Self {
        Self {
            buffers: Mutex::new(Vec::new()),
        }
    }

    /// Borrow an empty buffer from the pool, allocating if none is idle.
    pub fn acquire(&self) -> ScratchBuffer<'_> {
        let buf = self
            .buffers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .map(|mut buf| {
                buf.clear();
                buf
            })
            .unwrap_or_default();
        ScratchBuffer { pool: self, buf }
    }

    /// Number of idle buffers currently held
    pub fn idle(&self) -> usize {
        self.buffers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, buf: String) {
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        let mut buffers = self.buffers.lock().unwrap_or_else(PoisonError::into_inner);
        if buffers.len() < MAX_POOLED {
            buffers.push(buf);
        }
    }
}

impl Default for ScratchPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide pool used by the hashing pipeline.
pub static SCRATCH: ScratchPool = ScratchPool::new();

/// A buffer on loan from a [`ScratchPool`].
pub struct ScratchBuffer<'a> {
    pool: &'a ScratchPool,
    buf: String,
}

impl Deref for ScratchBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for ScratchBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for ScratchBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}
