//! Curriculo Core Library
//!
//! This crate provides the AI-enhancement pipeline for the resume
//! builder: provider adapters for the supported LLM services, response
//! sanitizing and parsing, field-preserving merge rules, and the
//! generation orchestrator that guarantees the user flow always
//! completes with a usable record.

pub mod config;
pub mod generation;
pub mod http;
pub mod providers;
pub mod resume;

pub use config::{AiSettings, SecretString};
pub use generation::{GenerationOutcome, GenerationPhase, GenerationStatus, Orchestrator};
pub use providers::{EnhanceError, EnhanceResult, ProviderKind};
pub use resume::{merge, ResumeRecord};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
