//! Pass Forge - rule-based random password generation
//!
//! A simple and elegant library and CLI tool for generating random passwords
//! that satisfy configurable composition rules: a target length, a set of
//! required character categories, and an optional exclusion list.

pub mod error;
pub mod generator;
pub mod types;

// Re-export commonly used types
pub use error::{PassForgeError, Result};
pub use generator::{EffectiveAlphabet, PasswordGenerator};
pub use types::{CharacterCategory, GeneratorConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
