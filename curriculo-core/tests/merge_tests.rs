//! Merge guarantees for AI enhancement results

use curriculo_core::resume::{merge, Course, Experience, ResumeRecord};
use serde_json::json;

fn ana() -> ResumeRecord {
    ResumeRecord {
        full_name: "Ana".to_string(),
        objective: "Crescer na área de dados".to_string(),
        summary: "Resumo manual".to_string(),
        skills: vec!["Excel".to_string()],
        soft_skills: vec!["Proativa".to_string()],
        experiences: vec![Experience {
            id: "1".to_string(),
            title: "Dev".to_string(),
            company: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "2023-06".to_string(),
            description: "Manutenção de sistemas".to_string(),
        }],
        courses: vec![Course {
            id: "c1".to_string(),
            name: "SQL Básico".to_string(),
            year: "2022".to_string(),
        }],
        ..Default::default()
    }
}

#[test]
fn empty_enhancement_is_identity() {
    let record = ana();
    assert_eq!(merge(&record, &json!({})), record);
}

/// A partial enhancement with one malformed collection updates scalars
/// and valid arrays, and leaves the malformed section plus user-owned
/// fields untouched.
#[test]
fn partial_enhancement_with_malformed_experiences() {
    let record = ana();
    let enhancement = json!({
        "summary": "Profissional proativa com experiência em dados.",
        "skills": ["Excel", "SQL"],
        "experiences": "not-an-array",
    });

    let merged = merge(&record, &enhancement);

    assert_eq!(merged.summary, "Profissional proativa com experiência em dados.");
    assert_eq!(merged.skills, vec!["Excel", "SQL"]);
    assert_eq!(merged.experiences, record.experiences);
    assert_eq!(merged.soft_skills, record.soft_skills);
    assert_eq!(merged.full_name, "Ana");
}

#[test]
fn every_collection_is_guarded_against_non_arrays() {
    let record = ana();
    for key in [
        "experiences",
        "education",
        "skills",
        "courses",
        "languages",
        "projects",
        "certifications",
    ] {
        let merged = merge(&record, &json!({ key: "oops" }));
        assert_eq!(merged, record, "non-array '{key}' must keep baseline");

        let merged = merge(&record, &json!({ key: {"a": 1} }));
        assert_eq!(merged, record, "object-valued '{key}' must keep baseline");
    }
}

#[test]
fn courses_follow_the_same_adoption_rule() {
    let record = ana();
    let merged = merge(
        &record,
        &json!({
            "courses": [{"id": "c1", "name": "SQL Avançado", "year": "2024"}]
        }),
    );
    assert_eq!(merged.courses.len(), 1);
    assert_eq!(merged.courses[0].name, "SQL Avançado");
}

#[test]
fn adopted_experiences_replace_collection_in_full() {
    let record = ana();
    let merged = merge(
        &record,
        &json!({
            "experiences": [
                {"id": "1", "title": "Dev", "company": "Acme",
                 "startDate": "2020-01", "endDate": "2023-06",
                 "description": "Liderou a manutenção de sistemas críticos."},
                {"id": "2", "title": "Analista", "company": "Beta",
                 "startDate": "2018-01", "endDate": "2019-12",
                 "description": "Automatizou relatórios."}
            ]
        }),
    );
    assert_eq!(merged.experiences.len(), 2);
    assert_eq!(merged.experiences[0].description, "Liderou a manutenção de sistemas críticos.");
    // Identity and dates come back unchanged from the AI contract.
    assert_eq!(merged.experiences[0].id, "1");
    assert_eq!(merged.experiences[0].start_date, "2020-01");
}

#[test]
fn ai_supplied_soft_skills_and_custom_fields_are_dropped() {
    let record = ana();
    let merged = merge(
        &record,
        &json!({
            "softSkills": ["Invented"],
            "customFields": [{"id": "9", "label": "x", "value": "y"}],
        }),
    );
    assert_eq!(merged.soft_skills, record.soft_skills);
    assert_eq!(merged.custom_fields, record.custom_fields);
}
