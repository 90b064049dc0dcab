//! Operating system CSPRNG.

use std::io;

use super::ByteSource;

/// Reads from the kernel CSPRNG: `getrandom(2)` where available,
/// `/dev/urandom` everywhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        OsRandom
    }
}

impl ByteSource for OsRandom {
    fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
        fill_os(dest)
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn fill_os(dest: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < dest.len() {
        let remaining = &mut dest[filled..];
        let ret = unsafe {
            libc::getrandom(
                remaining.as_mut_ptr() as *mut libc::c_void,
                remaining.len(),
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }
        filled += ret as usize;
    }

    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn fill_os(dest: &mut [u8]) -> io::Result<()> {
    use std::fs::File;
    use std::io::Read;

    File::open("/dev/urandom")?.read_exact(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_whole_buffer() {
        let mut buf = [0u8; 4096];
        OsRandom.fill(&mut buf).unwrap();
        // 4096 zero bytes from a working CSPRNG is not a realistic outcome
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn empty_fill_is_ok() {
        OsRandom.fill(&mut []).unwrap();
    }
}
