//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Infrastructure implementations live in other crates.

use std::fmt::Display;

/// Trait for generative-text provider operations
///
/// Implemented by the infrastructure layer (parcelbot-llm)
pub trait TextGenerator {
    /// Error type for provider operations
    type Error: Display;

    /// Generate text for the given prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
