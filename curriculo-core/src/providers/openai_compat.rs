//! Chat-completions provider adapters
//!
//! OpenAI, Groq and DeepSeek all speak the OpenAI chat-completions
//! envelope: Bearer auth, system+user messages and a JSON response
//! format. The variants differ only in endpoint URL and model name.

use serde_json::{json, Value};

use super::error::{EnhanceError, EnhanceResult};
use super::prompt::build_prompt;
use super::{ProviderAdapter, ProviderRequest};
use crate::resume::ResumeRecord;

const SYSTEM_MESSAGE: &str = "You are a helpful assistant that outputs JSON.";

/// Adapter for any OpenAI-compatible chat-completions endpoint.
pub struct ChatCompletionsAdapter {
    name: &'static str,
    url: String,
    model: &'static str,
}

impl ChatCompletionsAdapter {
    pub fn openai() -> Self {
        Self {
            name: "openai",
            url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4-turbo-preview",
        }
    }

    pub fn groq() -> Self {
        Self {
            name: "groq",
            url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama-3.3-70b-versatile",
        }
    }

    pub fn deepseek() -> Self {
        Self {
            name: "deepseek",
            url: "https://api.deepseek.com/chat/completions".to_string(),
            model: "deepseek-chat",
        }
    }

    /// Same envelope against a different endpoint (tests).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &'static str {
        self.model
    }
}

impl ProviderAdapter for ChatCompletionsAdapter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn build_request(&self, credential: &str, record: &ResumeRecord) -> ProviderRequest {
        ProviderRequest {
            url: self.url.clone(),
            headers: vec![
                ("Authorization", format!("Bearer {credential}")),
                ("Content-Type", "application/json".to_string()),
            ],
            body: json!({
                "model": self.model,
                "messages": [
                    { "role": "system", "content": SYSTEM_MESSAGE },
                    { "role": "user", "content": build_prompt(record) },
                ],
                "response_format": { "type": "json_object" },
            }),
        }
    }

    fn extract_text(&self, body: &Value) -> EnhanceResult<String> {
        body.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                EnhanceError::MalformedResponse(format!(
                    "no completion text in {} response",
                    self.name
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ChatCompletionsAdapter::openai(), "openai", "https://api.openai.com/v1/chat/completions", "gpt-4-turbo-preview")]
    #[test_case(ChatCompletionsAdapter::groq(), "groq", "https://api.groq.com/openai/v1/chat/completions", "llama-3.3-70b-versatile")]
    #[test_case(ChatCompletionsAdapter::deepseek(), "deepseek", "https://api.deepseek.com/chat/completions", "deepseek-chat")]
    fn variant_facts(adapter: ChatCompletionsAdapter, name: &str, url: &str, model: &str) {
        assert_eq!(adapter.name(), name);
        assert_eq!(adapter.url(), url);
        assert_eq!(adapter.model(), model);
    }

    #[test]
    fn request_carries_bearer_auth_and_json_mode() {
        let adapter = ChatCompletionsAdapter::openai();
        let request = adapter.build_request("sk-test", &ResumeRecord::default());

        assert!(request
            .headers
            .iter()
            .any(|(k, v)| *k == "Authorization" && v == "Bearer sk-test"));
        assert_eq!(request.body["model"], "gpt-4-turbo-preview");
        assert_eq!(request.body["response_format"]["type"], "json_object");
        assert_eq!(request.body["messages"][0]["role"], "system");
        let user = request.body["messages"][1]["content"].as_str().unwrap();
        assert!(user.contains("Return ONLY the JSON object"));
    }

    #[test]
    fn extracts_completion_text() {
        let adapter = ChatCompletionsAdapter::groq();
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": "{\"a\":1}" } }]
        });
        assert_eq!(adapter.extract_text(&body).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn missing_choices_is_malformed() {
        let adapter = ChatCompletionsAdapter::deepseek();
        assert!(matches!(
            adapter.extract_text(&json!({})),
            Err(EnhanceError::MalformedResponse(_))
        ));
    }
}
