//! Core types and structures for pass-forge

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// A class of characters a password can be required to contain
///
/// Each category maps to a fixed, ordered ASCII alphabet. The mapping is a
/// pure function with no mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterCategory {
    /// ASCII digits (0-9)
    Digits,
    /// ASCII uppercase letters (A-Z)
    Uppercase,
    /// ASCII lowercase letters (a-z)
    Lowercase,
    /// All printable ASCII punctuation and symbols, excluding space
    Special,
}

impl std::fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterCategory::Digits => write!(f, "digits"),
            CharacterCategory::Uppercase => write!(f, "uppercase"),
            CharacterCategory::Lowercase => write!(f, "lowercase"),
            CharacterCategory::Special => write!(f, "special"),
        }
    }
}

impl CharacterCategory {
    /// Every category, in declaration order
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Digits,
        CharacterCategory::Uppercase,
        CharacterCategory::Lowercase,
        CharacterCategory::Special,
    ];

    /// The full, ordered alphabet for this category
    pub fn characters(&self) -> &'static str {
        match self {
            CharacterCategory::Digits => "0123456789",
            CharacterCategory::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterCategory::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            // Codepoints 33-47, 58-64, 91-96 and 123-126
            CharacterCategory::Special => r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##,
        }
    }

    /// Whether `c` belongs to this category
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterCategory::Digits => c.is_ascii_digit(),
            CharacterCategory::Uppercase => c.is_ascii_uppercase(),
            CharacterCategory::Lowercase => c.is_ascii_lowercase(),
            CharacterCategory::Special => c.is_ascii_punctuation(),
        }
    }
}

/// Configuration for password generation
///
/// Owned by the caller and never mutated by generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Exact length of the generated password
    pub length: usize,
    /// Categories that must each contribute at least one character
    pub categories: BTreeSet<CharacterCategory>,
    /// Characters that must never appear in the output
    pub excluded: HashSet<char>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 16,
            categories: CharacterCategory::ALL.into_iter().collect(),
            excluded: HashSet::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a config with the given length and categories, no exclusions
    pub fn new(length: usize, categories: impl IntoIterator<Item = CharacterCategory>) -> Self {
        Self {
            length,
            categories: categories.into_iter().collect(),
            excluded: HashSet::new(),
        }
    }

    /// Exclude every character of `excluded` from the output
    pub fn with_excluded(mut self, excluded: &str) -> Self {
        self.excluded = excluded.chars().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_alphabet_sizes() {
        assert_eq!(CharacterCategory::Digits.characters().len(), 10);
        assert_eq!(CharacterCategory::Uppercase.characters().len(), 26);
        assert_eq!(CharacterCategory::Lowercase.characters().len(), 26);
        assert_eq!(CharacterCategory::Special.characters().len(), 32);
    }

    #[test]
    fn test_special_alphabet_ranges() {
        let special = CharacterCategory::Special.characters();

        for c in special.chars() {
            let code = c as u32;
            let in_range = (33..=47).contains(&code)
                || (58..=64).contains(&code)
                || (91..=96).contains(&code)
                || (123..=126).contains(&code);
            assert!(in_range, "unexpected special character: {:?}", c);
        }

        assert!(!special.contains(' '));
    }

    #[test]
    fn test_contains_agrees_with_characters() {
        for category in CharacterCategory::ALL {
            for c in category.characters().chars() {
                assert!(category.contains(c), "{} should contain {:?}", category, c);
            }
        }
    }

    #[test]
    fn test_categories_are_disjoint() {
        for a in CharacterCategory::ALL {
            for b in CharacterCategory::ALL {
                if a == b {
                    continue;
                }
                for c in a.characters().chars() {
                    assert!(!b.contains(c), "{:?} found in both {} and {}", c, a, b);
                }
            }
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(CharacterCategory::Digits.to_string(), "digits");
        assert_eq!(CharacterCategory::Uppercase.to_string(), "uppercase");
        assert_eq!(CharacterCategory::Lowercase.to_string(), "lowercase");
        assert_eq!(CharacterCategory::Special.to_string(), "special");
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();

        assert_eq!(config.length, 16);
        assert_eq!(config.categories.len(), 4);
        assert!(config.excluded.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new(10, [CharacterCategory::Digits, CharacterCategory::Lowercase])
            .with_excluded("0l");

        assert_eq!(config.length, 10);
        assert_eq!(config.categories.len(), 2);
        assert!(config.excluded.contains(&'0'));
        assert!(config.excluded.contains(&'l'));
        assert_eq!(config.excluded.len(), 2);
    }
}
