//! Password generation.

pub mod charset;
mod generate;
mod options;

pub use generate::{PasswordGenerator, generate, generate_multiple};
pub use options::{CharClass, GenerationOptions};
