//! JSON Schema documents for the serialized classifier outputs.

use serde_json::{json, Value};

/// Schema for a serialized `PreliminaryAnalysis`.
pub fn analysis_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "PreliminaryAnalysis",
        "type": "object",
        "properties": {
            "risk_level": { "enum": ["low", "medium", "high", "critical"] },
            "urgency": { "enum": ["routine", "urgent", "emergency"] },
            "preliminary_diagnosis": { "type": "string", "minLength": 1 },
            "recommended_specialist": { "type": "string", "minLength": 1 },
            "analysis_summary": { "type": "string", "minLength": 1 },
            "key_findings": {
                "type": "array",
                "items": { "type": "string", "minLength": 1 }
            },
            "warning_signs": {
                "type": "array",
                "items": { "type": "string", "minLength": 1 }
            }
        },
        "required": [
            "risk_level",
            "urgency",
            "preliminary_diagnosis",
            "recommended_specialist",
            "analysis_summary",
            "key_findings",
            "warning_signs"
        ]
    })
}

/// Schema for a serialized `TreatmentPlan`.
///
/// `medications` may be empty (the cardiac referral has none).
pub fn treatment_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "TreatmentPlan",
        "type": "object",
        "properties": {
            "diagnosis": { "type": "string", "minLength": 1 },
            "treatment_plan": { "type": "string", "minLength": 1 },
            "precautions": { "type": "string", "minLength": 1 },
            "medications": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "dosage": { "type": "string" },
                        "frequency": { "type": "string" },
                        "duration": { "type": "string" }
                    },
                    "required": ["name", "dosage", "frequency", "duration"]
                }
            }
        },
        "required": ["diagnosis", "treatment_plan", "medications", "precautions"]
    })
}
