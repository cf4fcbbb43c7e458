//! Provider abstraction for the enhancement request
//!
//! A closed set of strategy variants behind one adapter trait. Each
//! variant maps the canonical `(credential, record)` call onto its
//! provider-specific HTTP request and pulls the model text back out of
//! the provider-specific response shape. Semantics never differ between
//! variants - they all carry the same instruction prompt.

pub mod error;
pub mod gemini;
pub mod openai_compat;
pub mod prompt;
pub mod sanitize;

pub use error::{EnhanceError, EnhanceResult};
pub use gemini::GeminiAdapter;
pub use openai_compat::ChatCompletionsAdapter;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::resume::ResumeRecord;

/// A fully built provider HTTP call: endpoint, headers and JSON body.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

/// Strategy implemented by each provider variant.
pub trait ProviderAdapter: Send + Sync {
    /// Lowercase provider id, as stored by the credential store.
    fn name(&self) -> &'static str;

    /// Build the outbound HTTP request for this provider.
    fn build_request(&self, credential: &str, record: &ResumeRecord) -> ProviderRequest;

    /// Pull the model-generated text out of the provider response body.
    fn extract_text(&self, body: &Value) -> EnhanceResult<String>;
}

/// Closed enumeration of supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Primary provider, structured-generation call.
    Gemini,
    /// Chat-completions variants.
    OpenAi,
    Groq,
    DeepSeek,
}

impl ProviderKind {
    /// Create the adapter for this provider.
    pub fn create_adapter(&self) -> Box<dyn ProviderAdapter> {
        match self {
            Self::Gemini => Box::new(GeminiAdapter::new()),
            Self::OpenAi => Box::new(ChatCompletionsAdapter::openai()),
            Self::Groq => Box::new(ChatCompletionsAdapter::groq()),
            Self::DeepSeek => Box::new(ChatCompletionsAdapter::deepseek()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Groq => "groq",
            Self::DeepSeek => "deepseek",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = EnhanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            "groq" => Ok(Self::Groq),
            "deepseek" => Ok(Self::DeepSeek),
            other => Err(EnhanceError::UnsupportedProvider {
                id: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_provider_ids() {
        assert_eq!("gemini".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!("Groq ".parse::<ProviderKind>().unwrap(), ProviderKind::Groq);
        assert_eq!("deepseek".parse::<ProviderKind>().unwrap(), ProviderKind::DeepSeek);
    }

    #[test]
    fn unknown_provider_id_is_rejected() {
        let err = "mistral".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(
            err,
            EnhanceError::UnsupportedProvider { id } if id == "mistral"
        ));
    }

    #[test]
    fn adapter_names_match_kind_ids() {
        for kind in [
            ProviderKind::Gemini,
            ProviderKind::OpenAi,
            ProviderKind::Groq,
            ProviderKind::DeepSeek,
        ] {
            assert_eq!(kind.create_adapter().name(), kind.as_str());
        }
    }

    #[test]
    fn serde_roundtrip_uses_lowercase_ids() {
        let json = serde_json::to_string(&ProviderKind::DeepSeek).unwrap();
        assert_eq!(json, "\"deepseek\"");
        let kind: ProviderKind = serde_json::from_str("\"gemini\"").unwrap();
        assert_eq!(kind, ProviderKind::Gemini);
    }
}
