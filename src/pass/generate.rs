//! Password generation.

use tracing::{debug, trace, warn};
use zeroize::Zeroize;

use super::{CharClass, GenerationOptions, charset};
use crate::error::{Error, Result, ValidationError};
use crate::rand::{ByteSource, OsRandom, RandomBytes};

/// Generates passwords from one buffered random source.
///
/// Not synchronised: use one generator per thread, or lock around it.
pub struct PasswordGenerator<S = OsRandom> {
    bytes: RandomBytes<S>,
}

impl PasswordGenerator<OsRandom> {
    pub fn new() -> Self {
        Self::with_source(OsRandom)
    }
}

impl Default for PasswordGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteSource> PasswordGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            bytes: RandomBytes::new(source),
        }
    }

    /// Generate a single password.
    ///
    /// Options are validated and the pool built before any random byte is
    /// read. In strict mode, passwords missing an enabled class are thrown
    /// away and redrawn from the same pool.
    pub fn generate(&mut self, opts: &GenerationOptions) -> Result<String> {
        validate(opts)?;
        let chars = charset::build(opts)?;

        if opts.strict {
            check_satisfiable(opts, &chars)?;
        }

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let mut pass = self.draw(&chars, opts.length)?;

            if !opts.strict || meets_strict(&pass, opts) {
                if opts.strict {
                    debug!(attempts, "strict password accepted");
                }
                return Ok(pass);
            }

            pass.zeroize();
            trace!(attempt = attempts, "strict check failed, regenerating");

            if let Some(max) = opts.max_retries
                && attempts > max
            {
                warn!(attempts, "strict retry limit reached");
                return Err(Error::RetriesExhausted { attempts });
            }
        }
    }

    /// Generate `count` passwords. Stops at the first failure.
    pub fn generate_multiple(
        &mut self,
        count: usize,
        opts: &GenerationOptions,
    ) -> Result<Vec<String>> {
        let mut passwords = Vec::with_capacity(count);

        for index in 0..count {
            match self.generate(opts) {
                Ok(pass) => passwords.push(pass),
                Err(e) => {
                    passwords.zeroize();
                    return Err(Error::Batch {
                        index,
                        count,
                        source: Box::new(e),
                    });
                }
            }
        }

        Ok(passwords)
    }

    /// Uniform index in `[0, bound)` from this generator's buffer.
    pub fn next_index(&mut self, bound: usize) -> Result<usize> {
        self.bytes.next_index(bound)
    }

    fn draw(&mut self, chars: &[char], length: usize) -> Result<String> {
        let mut pass = String::with_capacity(length);
        for _ in 0..length {
            match self.bytes.next_index(chars.len()) {
                Ok(i) => pass.push(chars[i]),
                Err(e) => {
                    pass.zeroize();
                    return Err(e);
                }
            }
        }
        Ok(pass)
    }
}

/// Generate one password with a fresh OS-backed generator.
pub fn generate(opts: &GenerationOptions) -> Result<String> {
    PasswordGenerator::new().generate(opts)
}

/// Generate `count` passwords with a fresh OS-backed generator.
pub fn generate_multiple(count: usize, opts: &GenerationOptions) -> Result<Vec<String>> {
    PasswordGenerator::new().generate_multiple(count, opts)
}

fn validate(opts: &GenerationOptions) -> Result<()> {
    if opts.length == 0 {
        return Err(ValidationError::ZeroLength.into());
    }

    if opts.strict {
        let required = opts.enabled_classes().count();
        if required > opts.length {
            return Err(ValidationError::StrictLengthTooShort {
                required,
                length: opts.length,
            }
            .into());
        }
    }

    Ok(())
}

/// Every enabled class needs at least one pool character, or strict mode
/// would redraw forever.
fn check_satisfiable(opts: &GenerationOptions, chars: &[char]) -> Result<()> {
    let custom = opts.custom_symbols();
    for class in opts.enabled_classes() {
        if !chars.iter().any(|&c| class.matches(c, custom)) {
            return Err(ValidationError::UnsatisfiableClass(class).into());
        }
    }
    Ok(())
}

fn meets_strict(pass: &str, opts: &GenerationOptions) -> bool {
    let custom = opts.custom_symbols();
    opts.enabled_classes()
        .all(|class: CharClass| pass.chars().any(|c| class.matches(c, custom)))
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    /// Cycles through a fixed byte script and counts bytes handed out.
    struct Script {
        bytes: Vec<u8>,
        at: usize,
    }

    impl Script {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.to_vec(),
                at: 0,
            }
        }
    }

    impl ByteSource for Script {
        fn fill(&mut self, dest: &mut [u8]) -> io::Result<()> {
            for b in dest.iter_mut() {
                *b = self.bytes[self.at % self.bytes.len()];
                self.at += 1;
            }
            Ok(())
        }
    }

    fn digits_and_lower() -> GenerationOptions {
        GenerationOptions {
            length: 2,
            lowercase: true,
            uppercase: false,
            numbers: true,
            strict: true,
            ..Default::default()
        }
    }

    #[test]
    fn draws_pool_index_per_character() {
        // pool: a-z; bytes 0, 1, 25 -> a, b, z
        let mut generator = PasswordGenerator::with_source(Script::new(&[0, 1, 25]));
        let opts = GenerationOptions {
            length: 3,
            uppercase: false,
            ..Default::default()
        };
        assert_eq!(generator.generate(&opts).unwrap(), "abz");
    }

    #[test]
    fn strict_redraws_until_every_class_present() {
        // pool: a-z0-9 (36). "aa" fails, then "a0" passes.
        let mut generator = PasswordGenerator::with_source(Script::new(&[0, 0, 0, 26]));
        assert_eq!(generator.generate(&digits_and_lower()).unwrap(), "a0");
    }

    #[test]
    fn retry_cap_stops_the_loop() {
        // always "aa": never satisfies numbers
        let mut generator = PasswordGenerator::with_source(Script::new(&[0]));
        let opts = GenerationOptions {
            max_retries: Some(3),
            ..digits_and_lower()
        };
        let err = generator.generate(&opts).unwrap_err();
        assert!(matches!(err, Error::RetriesExhausted { attempts: 4 }));
    }

    #[test]
    fn retry_cap_of_zero_allows_one_draw() {
        let mut generator = PasswordGenerator::with_source(Script::new(&[0, 26]));
        let opts = GenerationOptions {
            max_retries: Some(0),
            ..digits_and_lower()
        };
        assert_eq!(generator.generate(&opts).unwrap(), "a0");
    }

    #[test]
    fn excluded_class_is_unsatisfiable() {
        let mut generator = PasswordGenerator::with_source(Script::new(&[0]));
        let opts = GenerationOptions {
            exclude: "0123456789".into(),
            ..digits_and_lower()
        };
        let err = generator.generate(&opts).unwrap_err();
        assert_eq!(
            err.validation(),
            Some(ValidationError::UnsatisfiableClass(CharClass::Numbers))
        );
    }

    #[test]
    fn custom_symbols_drive_strict_symbol_check() {
        // pool: "0123456789" + "+"; only '+' counts as a symbol
        let opts = GenerationOptions {
            length: 2,
            lowercase: false,
            uppercase: false,
            numbers: true,
            symbols: true,
            symbols_string: "+".into(),
            strict: true,
            ..Default::default()
        };
        let mut generator = PasswordGenerator::with_source(Script::new(&[1, 2, 10, 3]));
        assert_eq!(generator.generate(&opts).unwrap(), "+3");
    }

    #[test]
    fn strict_ignores_disabled_classes() {
        let opts = GenerationOptions {
            length: 1,
            uppercase: false,
            strict: true,
            ..Default::default()
        };
        assert!(meets_strict("q", &opts));
        assert!(!meets_strict("Q", &opts));
    }

    #[test]
    fn batch_wraps_first_failure() {
        let mut generator = PasswordGenerator::with_source(Script::new(&[0]));
        let opts = GenerationOptions {
            max_retries: Some(1),
            ..digits_and_lower()
        };
        let err = generator.generate_multiple(3, &opts).unwrap_err();
        assert!(matches!(err, Error::Batch { index: 0, count: 3, .. }));
        assert!(matches!(err.root(), Error::RetriesExhausted { .. }));
    }

    #[test]
    fn zero_count_batch_is_empty() {
        let mut generator = PasswordGenerator::with_source(Script::new(&[0]));
        let passwords = generator
            .generate_multiple(0, &GenerationOptions::default())
            .unwrap();
        assert!(passwords.is_empty());
    }
}
