//! Canonical resume data model
//!
//! These are the structures the wizard collects and the AI pipeline
//! enhances. The design prioritizes:
//! - Wire compatibility: camelCase field names match the JSON the model
//!   is asked to emit and the record the UI stores
//! - Total population: every field defaults, so a record is never
//!   partially constructed - absent values are empty string/array/false
//! - Stable identity: repeated entities carry an opaque id assigned at
//!   creation and never reused

use serde::{Deserialize, Serialize};

/// A single work-experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// A formal education entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// A short course or bootcamp entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub year: String,
}

/// A spoken-language entry. `level` is free text ("Básico" through
/// "Nativo" in the Portuguese UI), not an enum - the AI must be able to
/// echo whatever the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub name: String,
    pub level: String,
}

/// A personal or professional project entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// A certification entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub year: String,
}

/// A user-defined label/value pair rendered verbatim on the resume.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomField {
    pub id: String,
    pub label: String,
    pub value: String,
}

/// The full canonical resume record.
///
/// Owned by the session/UI state; the enhancement pipeline treats it as
/// immutable input and produces a fresh merged copy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub full_name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city_state: String,
    pub linkedin: String,
    pub github: String,

    pub objective: String,
    /// Manually entered summary; the AI synthesizes its replacement from
    /// objective + summary + soft skills.
    pub summary: String,
    pub soft_skills: Vec<String>,

    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    /// Hard skills.
    pub skills: Vec<String>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub courses: Vec<Course>,

    pub availability: String,
    /// Driver's license category (CNH).
    pub cnh: String,
    pub open_to_travel: bool,
    pub remote_work: bool,
    pub custom_fields: Vec<CustomField>,
}
