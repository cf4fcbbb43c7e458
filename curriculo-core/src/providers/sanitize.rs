//! Model output sanitizer
//!
//! Providers occasionally wrap JSON answers in a Markdown code fence
//! even when asked for raw JSON. This normalizes the raw text before
//! the parse step.

use serde_json::Value;

use super::error::{EnhanceError, EnhanceResult};

/// Strip a surrounding Markdown code fence, with or without a `json`
/// language tag.
///
/// Total function: input without a fence comes back trimmed and
/// otherwise untouched, and applying it twice gives the same result as
/// applying it once. Fences are peeled until none remain so the output
/// is a fixpoint.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw.trim();
    loop {
        let stripped = strip_fence(text);
        if stripped == text {
            return text.to_string();
        }
        text = stripped;
    }
}

fn strip_fence(text: &str) -> &str {
    let inner = match text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    {
        Some(rest) => rest.trim(),
        None => return text,
    };
    inner.strip_suffix("```").map(str::trim).unwrap_or(inner)
}

/// Decode sanitized model output into an enhancement object.
///
/// Distinct from transport failures: invalid JSON or a non-object top
/// level is a [`EnhanceError::MalformedResponse`].
pub fn parse_enhancement(text: &str) -> EnhanceResult<Value> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| EnhanceError::MalformedResponse(e.to_string()))?;
    if !value.is_object() {
        return Err(EnhanceError::MalformedResponse(
            "expected a top-level JSON object".to_string(),
        ));
    }
    Ok(value)
}
