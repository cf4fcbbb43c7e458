//! AI connection settings
//!
//! The credential/provider store itself is an external collaborator;
//! this module only reads the `{providerId, credential}` pair it
//! supplies and never persists it.

mod secrets;

pub use secrets::SecretString;

use std::env;
use std::str::FromStr;

use crate::providers::{EnhanceError, EnhanceResult, ProviderKind};

/// Environment variable naming the provider to use.
pub const PROVIDER_ENV: &str = "CURRICULO_AI_PROVIDER";

/// Environment variable carrying the API credential.
pub const CREDENTIAL_ENV: &str = "CURRICULO_AI_KEY";

/// Provider selection plus credential, as supplied by the external store.
#[derive(Debug, Clone)]
pub struct AiSettings {
    pub provider: ProviderKind,
    pub credential: SecretString,
}

impl AiSettings {
    pub fn new(provider: ProviderKind, credential: impl Into<SecretString>) -> Self {
        Self {
            provider,
            credential: credential.into(),
        }
    }

    /// Parse settings from the raw store values.
    ///
    /// An unknown provider id fails here, before any request is built.
    pub fn from_values(provider_id: &str, credential: &str) -> EnhanceResult<Self> {
        let provider = ProviderKind::from_str(provider_id)?;
        Ok(Self::new(provider, credential))
    }

    /// Read settings from the environment. The provider defaults to
    /// Gemini; the credential has no default.
    pub fn from_env() -> EnhanceResult<Self> {
        let provider_id = env::var(PROVIDER_ENV).unwrap_or_else(|_| "gemini".to_string());
        let credential = env::var(CREDENTIAL_ENV).map_err(|_| EnhanceError::MissingCredential)?;
        Self::from_values(&provider_id, &credential)
    }

    /// Whether a usable credential is configured.
    pub fn has_credential(&self) -> bool {
        !self.credential.is_empty()
    }
}
