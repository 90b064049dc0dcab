//! Random password generation from a configurable character pool.
//!
//! ```no_run
//! use genpass::{GenerationOptions, PasswordGenerator};
//!
//! let mut generator = PasswordGenerator::new();
//! let opts = GenerationOptions {
//!     length: 16,
//!     numbers: true,
//!     symbols: true,
//!     exclude_similar_characters: true,
//!     strict: true,
//!     ..Default::default()
//! };
//! let password = generator.generate(&opts)?;
//! let batch = generator.generate_multiple(5, &opts)?;
//! # Ok::<(), genpass::Error>(())
//! ```

pub mod error;
pub mod pass;
pub mod rand;

pub use error::{Error, Result, ValidationError};
pub use pass::charset;
pub use pass::{CharClass, GenerationOptions, PasswordGenerator, generate, generate_multiple};
pub use rand::{ByteSource, OsRandom, RandomBytes};
