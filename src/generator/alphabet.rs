//! Effective alphabet derivation

use std::collections::{BTreeSet, HashSet};

use crate::types::CharacterCategory;

/// The characters actually eligible for drawing: the union of the requested
/// categories' alphabets, minus the excluded characters.
///
/// Derived fresh on every generation call so exclusion changes between calls
/// always take effect.
#[derive(Debug, Clone)]
pub struct EffectiveAlphabet {
    chars: Vec<char>,
}

impl EffectiveAlphabet {
    /// Derive the alphabet for a set of categories and exclusions
    pub fn derive(
        categories: &BTreeSet<CharacterCategory>,
        excluded: &HashSet<char>,
    ) -> Self {
        // Category alphabets are pairwise disjoint, so a plain flat_map
        // yields no duplicates.
        let chars = categories
            .iter()
            .flat_map(|category| category.characters().chars())
            .filter(|c| !excluded.contains(c))
            .collect();

        Self { chars }
    }

    /// All eligible characters, in category order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of eligible characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether no characters are eligible at all
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `c` is eligible
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The eligible characters belonging to one category
    pub fn for_category(&self, category: CharacterCategory) -> Vec<char> {
        self.chars
            .iter()
            .copied()
            .filter(|c| category.contains(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(list: &[CharacterCategory]) -> BTreeSet<CharacterCategory> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_union_of_categories() {
        let alphabet = EffectiveAlphabet::derive(
            &categories(&[
                CharacterCategory::Digits,
                CharacterCategory::Uppercase,
                CharacterCategory::Lowercase,
            ]),
            &HashSet::new(),
        );

        assert_eq!(alphabet.len(), 62);
        assert!(alphabet.contains('0'));
        assert!(alphabet.contains('A'));
        assert!(alphabet.contains('z'));
        assert!(!alphabet.contains('!'));
    }

    #[test]
    fn test_exclusions_are_removed() {
        let excluded: HashSet<char> = "0OIl1".chars().collect();
        let alphabet = EffectiveAlphabet::derive(
            &categories(&[
                CharacterCategory::Digits,
                CharacterCategory::Uppercase,
                CharacterCategory::Lowercase,
            ]),
            &excluded,
        );

        assert_eq!(alphabet.len(), 62 - 5);
        for c in "0OIl1".chars() {
            assert!(!alphabet.contains(c));
        }
    }

    #[test]
    fn test_exclusions_outside_categories_are_noops() {
        let excluded: HashSet<char> = "!@#".chars().collect();
        let alphabet =
            EffectiveAlphabet::derive(&categories(&[CharacterCategory::Digits]), &excluded);

        assert_eq!(alphabet.len(), 10);
    }

    #[test]
    fn test_fully_excluded_alphabet_is_empty() {
        let excluded: HashSet<char> = "0123456789".chars().collect();
        let alphabet =
            EffectiveAlphabet::derive(&categories(&[CharacterCategory::Digits]), &excluded);

        assert!(alphabet.is_empty());
    }

    #[test]
    fn test_for_category_intersections() {
        let excluded: HashSet<char> = "0123456789".chars().collect();
        let alphabet = EffectiveAlphabet::derive(
            &categories(&[CharacterCategory::Digits, CharacterCategory::Lowercase]),
            &excluded,
        );

        assert!(alphabet.for_category(CharacterCategory::Digits).is_empty());
        assert_eq!(alphabet.for_category(CharacterCategory::Lowercase).len(), 26);
    }
}
