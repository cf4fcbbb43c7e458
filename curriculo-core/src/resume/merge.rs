//! Merge engine for AI enhancement results
//!
//! Reconciles the untrusted, possibly partial object returned by a
//! provider with the original record. The guiding rule: the user never
//! loses data. Every field of the enhancement is unknown-typed until a
//! runtime check promotes it; anything absent, malformed or unrecognized
//! degrades to the baseline value for that field rather than failing the
//! merge.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::types::ResumeRecord;

/// Merge an enhancement object into a full copy of `original`.
///
/// Pure and deterministic: never fails, never mutates `original`.
/// Scalars are overlaid only when the enhancement carries the right JSON
/// type. Collections are adopted wholesale only when the value is a
/// proper array whose elements fit the domain shape; otherwise the
/// baseline collection is kept unchanged. Soft skills and custom fields
/// are user-owned and never overwritten by AI output.
pub fn merge(original: &ResumeRecord, enhancement: &Value) -> ResumeRecord {
    let mut merged = original.clone();
    let Some(fields) = enhancement.as_object() else {
        return merged;
    };

    overlay_string(&mut merged.full_name, fields, "fullName");
    overlay_string(&mut merged.age, fields, "age");
    overlay_string(&mut merged.phone, fields, "phone");
    overlay_string(&mut merged.email, fields, "email");
    overlay_string(&mut merged.address, fields, "address");
    overlay_string(&mut merged.city_state, fields, "cityState");
    overlay_string(&mut merged.linkedin, fields, "linkedin");
    overlay_string(&mut merged.github, fields, "github");
    overlay_string(&mut merged.objective, fields, "objective");
    overlay_string(&mut merged.summary, fields, "summary");
    overlay_string(&mut merged.availability, fields, "availability");
    overlay_string(&mut merged.cnh, fields, "cnh");
    overlay_bool(&mut merged.open_to_travel, fields, "openToTravel");
    overlay_bool(&mut merged.remote_work, fields, "remoteWork");

    adopt_array(&mut merged.experiences, fields, "experiences");
    adopt_array(&mut merged.education, fields, "education");
    adopt_array(&mut merged.skills, fields, "skills");
    adopt_array(&mut merged.courses, fields, "courses");
    adopt_array(&mut merged.languages, fields, "languages");
    adopt_array(&mut merged.projects, fields, "projects");
    adopt_array(&mut merged.certifications, fields, "certifications");

    // softSkills and customFields stay baseline-only: the prompt folds
    // soft skills into the summary, so an AI-returned copy is noise.

    merged
}

fn overlay_string(target: &mut String, fields: &Map<String, Value>, key: &str) {
    if let Some(Value::String(s)) = fields.get(key) {
        *target = s.clone();
    }
}

fn overlay_bool(target: &mut bool, fields: &Map<String, Value>, key: &str) {
    if let Some(Value::Bool(b)) = fields.get(key) {
        *target = *b;
    }
}

/// Adopt an AI-provided collection in full, or keep the baseline.
///
/// The array-type guard is the critical correctness rule: a malformed or
/// missing array in the AI response must never null out that section of
/// the resume.
fn adopt_array<T: DeserializeOwned>(target: &mut Vec<T>, fields: &Map<String, Value>, key: &str) {
    let Some(value) = fields.get(key) else {
        return;
    };
    if !value.is_array() {
        return;
    }
    if let Ok(items) = serde_json::from_value::<Vec<T>>(value.clone()) {
        *target = items;
    }
}
