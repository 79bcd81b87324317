//! Main memory.
//!
//! A flat, zero-initialized store of 32-bit words. It provides:
//! 1. **Word Access:** Bounds-checked `read` and `write` by word address.
//! 2. **Bulk Load:** All-or-nothing copy of a program or data image.
//! 3. **Inspection:** Read-only views of arbitrary ranges for diagnostics.
//!
//! Addresses are taken as `u64` so that callers can pass unwrapped sums such
//! as `base + offset`; anything at or beyond the capacity is `OutOfBounds`.

use std::ops::Range;

use crate::common::{SimError, SimResult};

/// Word-addressed main memory.
#[derive(Clone, Debug)]
pub struct Memory {
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zero-filled memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
        }
    }

    /// Capacity in words.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    #[inline]
    fn index(&self, addr: u64) -> SimResult<usize> {
        match usize::try_from(addr) {
            Ok(idx) if idx < self.words.len() => Ok(idx),
            _ => Err(SimError::OutOfBounds { addr }),
        }
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `addr >= capacity()`.
    #[inline]
    pub fn read(&self, addr: u64) -> SimResult<u32> {
        let idx = self.index(addr)?;
        Ok(self.words[idx])
    }

    /// Writes `val` to the word at `addr`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `addr >= capacity()`.
    #[inline]
    pub fn write(&mut self, addr: u64, val: u32) -> SimResult<()> {
        let idx = self.index(addr)?;
        self.words[idx] = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `start`.
    ///
    /// Nothing is written unless the whole image fits.
    ///
    /// # Errors
    ///
    /// `ProgramTooLarge` if `start + data.len() > capacity()`.
    pub fn load_words(&mut self, start: u32, data: &[u32]) -> SimResult<()> {
        let begin = start as usize;
        let end = begin.checked_add(data.len()).filter(|&e| e <= self.words.len());
        let Some(end) = end else {
            return Err(SimError::ProgramTooLarge {
                start,
                len: data.len(),
                capacity: self.words.len(),
            });
        };
        self.words[begin..end].copy_from_slice(data);
        Ok(())
    }

    /// Returns the words in `range`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` naming the first address past the end of memory if the
    /// range does not fit. An empty range is always valid.
    pub fn slice(&self, range: Range<u32>) -> SimResult<&[u32]> {
        let begin = range.start as usize;
        let end = range.end as usize;
        if begin >= end {
            return Ok(&[]);
        }
        if end > self.words.len() {
            let first_bad = begin.max(self.words.len());
            return Err(SimError::OutOfBounds {
                addr: first_bad as u64,
            });
        }
        Ok(&self.words[begin..end])
    }
}
