//! Gemini provider adapter
//!
//! The primary provider and the only structured-generation variant: the
//! request asks the model for an `application/json` response directly
//! instead of going through a chat envelope.

use serde_json::{json, Value};

use super::error::{EnhanceError, EnhanceResult};
use super::prompt::build_prompt;
use super::{ProviderAdapter, ProviderRequest};
use crate::resume::ResumeRecord;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-2.5-flash";

/// Gemini adapter
pub struct GeminiAdapter {
    base_url: String,
}

impl GeminiAdapter {
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }

    /// Same envelope against a different endpoint (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn model(&self) -> &'static str {
        MODEL
    }
}

impl ProviderAdapter for GeminiAdapter {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn build_request(&self, credential: &str, record: &ResumeRecord) -> ProviderRequest {
        ProviderRequest {
            url: format!("{}/models/{}:generateContent", self.base_url, MODEL),
            headers: vec![
                ("x-goog-api-key", credential.to_string()),
                ("Content-Type", "application/json".to_string()),
            ],
            body: json!({
                "contents": [{ "parts": [{ "text": build_prompt(record) }] }],
                "generationConfig": { "responseMimeType": "application/json" },
            }),
        }
    }

    fn extract_text(&self, body: &Value) -> EnhanceResult<String> {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                EnhanceError::MalformedResponse(
                    "no generated text in Gemini response".to_string(),
                )
            })
    }
}

impl Default for GeminiAdapter {
    fn default() -> Self {
        Self::new()
    }
}
