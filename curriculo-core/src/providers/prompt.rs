//! Shared instruction prompt
//!
//! Every provider receives the same instructions with the serialized
//! record embedded; only the transport envelope differs. Behavior must
//! diverge per provider in transport/format only, never in semantics.

use crate::resume::ResumeRecord;

/// Build the enhancement prompt for a record.
pub fn build_prompt(record: &ResumeRecord) -> String {
    let data = serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are an elite professional resume writer. I will provide you with raw resume data in JSON format.\n\
        Your task is to output a CLEAN, VALID JSON object with enhanced content.\n\
        \n\
        CRITICAL INSTRUCTIONS - READ CAREFULLY:\n\
        1. **NO META-COMMENTARY**: Never include explanations, notes, or justifications. The output must be PURE DATA strings.\n\
        2. **Summary**: Combine the user's 'objective', 'summary', and 'softSkills' into a single, professional \"Professional Summary\" paragraph (3-5 lines). Write in the first person (implied) or third person, ready to publish.\n\
        3. **Experience**: Enhance descriptions to be impactful and results-oriented using strong action verbs. Do not change dates, titles, or companies.\n\
        4. **Language**: Output in the same language as the input data (Portuguese or English).\n\
        5. **Strict JSON**: Return ONLY the JSON object.\n\
        \n\
        If a field is empty in the input, keep it empty or generate a reasonable default based on context, but do not add placeholder text.\n\
        \n\
        Input Data: {data}"
    )
}
