//! Password generation module
//!
//! Derives the usable alphabet from the configured categories and exclusions,
//! then produces passwords that contain at least one character from every
//! requested category.

mod alphabet;
mod password;

pub use alphabet::EffectiveAlphabet;
pub use password::PasswordGenerator;
