//! Error handling for pass-forge

use thiserror::Error;

use crate::types::CharacterCategory;

/// Main error type for pass-forge
///
/// Every variant is a configuration error: retrying with the same input
/// fails the same way, and no partial password is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassForgeError {
    #[error("password length {length} is shorter than the {required} required character categories")]
    InsufficientLength { length: usize, required: usize },

    #[error("at least one character category must be selected")]
    EmptyCharacterTypes,

    #[error("no characters are left to draw from after applying exclusions")]
    EmptyCharacterSet,

    #[error("no available characters for category '{category}'")]
    NoAvailableCharactersForType { category: CharacterCategory },
}

impl PassForgeError {
    /// Create an insufficient-length error
    pub fn insufficient_length(length: usize, required: usize) -> Self {
        Self::InsufficientLength { length, required }
    }

    /// Create a no-available-characters error for a category
    pub fn no_available_characters(category: CharacterCategory) -> Self {
        Self::NoAvailableCharactersForType { category }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InsufficientLength { length, required } => {
                format!(
                    "❌ Password length {} cannot fit {} required character categories\n💡 Increase the length or request fewer categories",
                    length, required
                )
            }
            Self::EmptyCharacterTypes => {
                "❌ No character categories selected\n💡 Request at least one of: digits, uppercase, lowercase, special".to_string()
            }
            Self::EmptyCharacterSet => {
                "❌ The exclusion list removed every usable character\n💡 Relax the exclusions or add more categories".to_string()
            }
            Self::NoAvailableCharactersForType { category } => {
                format!(
                    "❌ Every '{}' character is excluded\n💡 Relax the exclusions or drop that category",
                    category
                )
            }
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PassForgeError>;
