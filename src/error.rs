//! Error types for password generation.

use std::io;

use thiserror::Error;

use crate::pass::CharClass;

pub type Result<T> = std::result::Result<T, Error>;

/// Option combinations rejected before any randomness is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("password length must be at least 1")]
    ZeroLength,

    /// Strict mode needs one slot per enabled class.
    #[error("length {length} is too short for strict mode with {required} character classes")]
    StrictLengthTooShort { required: usize, length: usize },

    #[error("no character classes selected (or every character was excluded)")]
    EmptyPool,

    /// Strict mode can never be satisfied: every member of the class was excluded.
    #[error("strict mode requires {0} characters but all of them are excluded")]
    UnsatisfiableClass(CharClass),

    #[error("sample bound must be at least 1")]
    ZeroBound,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to read secure random bytes")]
    RandomSource(#[source] io::Error),

    #[error("strict requirements not met after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    #[error("failed to generate password {} of {count}", .index + 1)]
    Batch {
        index: usize,
        count: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// The innermost error, with batch context removed.
    pub fn root(&self) -> &Error {
        match self {
            Error::Batch { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.root(), Error::Validation(_))
    }

    pub fn is_random_source(&self) -> bool {
        matches!(self.root(), Error::RandomSource(_))
    }

    /// The validation failure at the root, if any.
    pub fn validation(&self) -> Option<ValidationError> {
        match self.root() {
            Error::Validation(v) => Some(*v),
            _ => None,
        }
    }
}
