//! Secure random bytes and unbiased index sampling.

mod buffer;
mod os;

use std::io;

pub use buffer::{BATCH_SIZE, RandomBytes};
pub use os::OsRandom;

/// A source of cryptographically secure random bytes.
///
/// Implementations must either fill the whole slice or return an error.
pub trait ByteSource {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        (**self).fill(dest)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        (**self).fill(dest)
    }
}
