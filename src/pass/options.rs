//! Password generation options.

use std::fmt;

/// One of the four character categories a pool is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Pool construction order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Numbers => "numbers",
            CharClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Number of characters in the password.
    pub length: usize,
    pub numbers: bool,
    pub symbols: bool,
    /// Characters removed from the pool.
    pub exclude: String,
    pub uppercase: bool,
    pub lowercase: bool,
    /// Drop `i l L I | ` o O 0` from the pool.
    pub exclude_similar_characters: bool,
    /// Require at least one character from every enabled class.
    pub strict: bool,
    /// Replaces the default symbol set when non-empty and `symbols` is on.
    pub symbols_string: String,
    /// Cap on strict-mode regenerations. `None` retries until satisfied.
    pub max_retries: Option<usize>,
}

impl GenerationOptions {
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes in pool order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|&c| self.is_enabled(c))
    }

    /// The custom symbol string, if one was given.
    pub fn custom_symbols(&self) -> Option<&str> {
        (!self.symbols_string.is_empty()).then_some(self.symbols_string.as_str())
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 10,
            numbers: false,
            symbols: false,
            exclude: String::new(),
            uppercase: true,
            lowercase: true,
            exclude_similar_characters: false,
            strict: false,
            symbols_string: String::new(),
            max_retries: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_classes_follow_pool_order() {
        let opts = GenerationOptions {
            lowercase: false,
            symbols: true,
            numbers: true,
            ..Default::default()
        };
        let classes: Vec<_> = opts.enabled_classes().collect();
        assert_eq!(
            classes,
            [CharClass::Uppercase, CharClass::Numbers, CharClass::Symbols]
        );
    }

    #[test]
    fn empty_symbols_string_is_not_custom() {
        let mut opts = GenerationOptions::default();
        assert_eq!(opts.custom_symbols(), None);
        opts.symbols_string = "+-".into();
        assert_eq!(opts.custom_symbols(), Some("+-"));
    }
}
