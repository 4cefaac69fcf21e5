//! Password generation core

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PassForgeError, Result};
use crate::generator::EffectiveAlphabet;
use crate::types::GeneratorConfig;

/// Generates random passwords satisfying a [`GeneratorConfig`]
///
/// Each call validates the configuration, draws one character per requested
/// category, fills the remaining positions from the full effective alphabet
/// and shuffles the result. The generator holds no state between calls.
pub struct PasswordGenerator {
    config: GeneratorConfig,
}

impl PasswordGenerator {
    /// Create a generator for the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator was created with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one password using the thread-local RNG
    pub fn generate(&self) -> Result<String> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Generate one password drawing all randomness from `rng`
    ///
    /// The generator makes no cryptographic claim of its own; callers that
    /// need one must supply a cryptographically secure `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let config = &self.config;

        if config.length < config.categories.len() {
            return Err(PassForgeError::insufficient_length(
                config.length,
                config.categories.len(),
            ));
        }

        if config.categories.is_empty() {
            return Err(PassForgeError::EmptyCharacterTypes);
        }

        let alphabet = EffectiveAlphabet::derive(&config.categories, &config.excluded);
        if alphabet.is_empty() {
            return Err(PassForgeError::EmptyCharacterSet);
        }

        // Every requested category must keep at least one usable character
        // after exclusions. All pools are collected before the first draw, so
        // rejected configurations never consume randomness.
        let mut pools = Vec::with_capacity(config.categories.len());
        for &category in &config.categories {
            let pool = alphabet.for_category(category);
            if pool.is_empty() {
                return Err(PassForgeError::no_available_characters(category));
            }
            pools.push(pool);
        }

        tracing::debug!(
            length = config.length,
            categories = config.categories.len(),
            alphabet = alphabet.len(),
            "Generating password"
        );

        // Coverage pass: one uniform draw per category.
        let mut chars: Vec<char> = Vec::with_capacity(config.length);
        for pool in &pools {
            chars.push(pool[rng.gen_range(0..pool.len())]);
        }

        // Fill pass: uniform draws from the full alphabet, with replacement.
        let all = alphabet.chars();
        for _ in pools.len()..config.length {
            chars.push(all[rng.gen_range(0..all.len())]);
        }

        // Uniform permutation, so the coverage characters are not clustered
        // at the front.
        chars.shuffle(rng);

        Ok(chars.into_iter().collect())
    }

    /// Generate `count` passwords from the same configuration
    pub fn generate_batch(&self, count: usize) -> Result<Vec<String>> {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| self.generate_with_rng(&mut rng)).collect()
    }
}
