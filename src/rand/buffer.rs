//! Batched random bytes with rejection-sampled indices.

use zeroize::Zeroize;

use super::ByteSource;
use crate::error::{Error, Result, ValidationError};

/// Bytes fetched from the source per refill.
pub const BATCH_SIZE: usize = 256;

/// A fixed-size buffer of secure random bytes plus a read cursor.
///
/// Owned by a single generator; wrap it in a lock if it has to be shared.
pub struct RandomBytes<S> {
    source: S,
    buf: [u8; BATCH_SIZE],
    pos: usize,
}

impl<S: ByteSource> RandomBytes<S> {
    /// Starts exhausted, so the first read triggers a refill.
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: [0; BATCH_SIZE],
            pos: BATCH_SIZE,
        }
    }

    /// Next byte, refilling the whole batch when the cursor hits the end.
    #[inline]
    pub fn next_byte(&mut self) -> Result<u8> {
        if self.pos >= BATCH_SIZE {
            self.refill()?;
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Uniform index in `[0, bound)`.
    ///
    /// Byte values at or above `256 - 256 % bound` are discarded so every
    /// residue is equally likely. Bounds above 256 draw as many big-endian
    /// bytes as needed to cover `bound` and apply the same rule over that
    /// wider span.
    pub fn next_index(&mut self, bound: usize) -> Result<usize> {
        match bound {
            0 => Err(ValidationError::ZeroBound.into()),
            1..=BATCH_SIZE => {
                let limit = 256 - (256 % bound);
                loop {
                    let value = self.next_byte()? as usize;
                    if value < limit {
                        return Ok(value % bound);
                    }
                }
            }
            _ => self.next_wide_index(bound),
        }
    }

    fn next_wide_index(&mut self, bound: usize) -> Result<usize> {
        let bits = usize::BITS - (bound - 1).leading_zeros();
        let width = bits.div_ceil(8);
        let span: u128 = 1 << (8 * width);
        let bound = bound as u128;
        let limit = span - span % bound;

        loop {
            let mut value: u128 = 0;
            for _ in 0..width {
                value = (value << 8) | self.next_byte()? as u128;
            }
            if value < limit {
                return Ok((value % bound) as usize);
            }
        }
    }

    /// Bytes left before the next refill.
    pub fn buffered(&self) -> usize {
        BATCH_SIZE - self.pos
    }

    fn refill(&mut self) -> Result<()> {
        self.pos = BATCH_SIZE;
        if let Err(e) = self.source.fill(&mut self.buf) {
            self.buf.zeroize();
            return Err(Error::RandomSource(e));
        }
        self.pos = 0;
        Ok(())
    }
}

impl<S> Drop for RandomBytes<S> {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}
