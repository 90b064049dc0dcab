//! Character pool building for password generation.

use tracing::debug;

use super::{CharClass, GenerationOptions};
use crate::error::{Result, ValidationError};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Default symbol set, used when no custom symbol string is given.
pub const SYMBOLS: &str = "!@#$%^&*()+_-=}{[]|:;\"/?.><,`~";

/// Characters removed by `exclude_similar_characters`. Exact, case-sensitive.
pub const SIMILAR: &[char] = &['i', 'l', 'L', 'I', '|', '`', 'o', 'O', '0'];

impl CharClass {
    /// The characters this class contributes to the pool.
    pub fn chars(self, custom_symbols: Option<&str>) -> &str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Numbers => DIGITS,
            CharClass::Symbols => custom_symbols.unwrap_or(SYMBOLS),
        }
    }

    /// Whether `c` counts towards this class in strict mode.
    pub fn matches(self, c: char, custom_symbols: Option<&str>) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Numbers => c.is_ascii_digit(),
            CharClass::Symbols => custom_symbols.unwrap_or(SYMBOLS).contains(c),
        }
    }
}

/// Build the character pool from the enabled classes, minus exclusions.
///
/// Duplicates are kept: a custom symbol string that overlaps a letter or
/// digit class makes those characters proportionally more likely.
pub fn build(opts: &GenerationOptions) -> Result<Vec<char>> {
    let custom = opts.custom_symbols();
    let mut chars: Vec<char> = Vec::new();

    for class in opts.enabled_classes() {
        chars.extend(class.chars(custom).chars());
    }

    if opts.exclude_similar_characters {
        chars.retain(|c| !SIMILAR.contains(c));
    }

    if !opts.exclude.is_empty() {
        chars.retain(|&c| !opts.exclude.contains(c));
    }

    if chars.is_empty() {
        return Err(ValidationError::EmptyPool.into());
    }

    debug!(
        pool_size = chars.len(),
        classes = ?opts.enabled_classes().collect::<Vec<_>>(),
        "built character pool"
    );
    Ok(chars)
}
