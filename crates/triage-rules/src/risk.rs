//! Risk classification rule table.
//!
//! Evaluation order (first match wins):
//!
//! 1. `emergency-override`: a critical keyword, or any severity >= 9
//! 2. `cardiac`           : chest pain / heart; split on max severity >= 7
//! 3. `respiratory`       : fever / cough / sore throat
//! 4. `neurological`      : headache / migraine / dizziness
//! 5. `gastrointestinal`  : nausea / vomit / diarrhea / stomach
//! 6. `musculoskeletal`   : body ache / joint / muscle
//! 7. `general`           : fallback
//!
//! Every branch that reports `Emergency` urgency also reports `Critical`
//! risk, and no other branch reports either.

use triage_contracts::{
    analysis::{PreliminaryAnalysis, RiskLevel, Urgency},
    patient::PatientContext,
};
use triage_core::{normalize::NormalizedSymptoms, traits::RiskClassifier};

use crate::{
    keywords,
    rule::{Rule, RuleTable},
    text::{join_sentences, lines},
};

/// The parts of a patient context the risk rules read.
///
/// Built once per classification from `Option<&PatientContext>`; `None`
/// yields the all-absent default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatientFacts {
    pub age: Option<u32>,
    pub has_chronic_conditions: bool,
    pub has_hypertension: bool,
    pub has_chronic_lung_condition: bool,
}

impl PatientFacts {
    pub fn from_context(context: Option<&PatientContext>) -> Self {
        match context {
            None => Self::default(),
            Some(ctx) => Self {
                age: ctx.age,
                has_chronic_conditions: ctx.has_chronic_conditions(),
                has_hypertension: ctx.has_condition("hypertension"),
                has_chronic_lung_condition: keywords::CHRONIC_LUNG
                    .iter()
                    .any(|k| ctx.has_condition_containing(k)),
            },
        }
    }

    fn is_over_45(&self) -> bool {
        self.age.is_some_and(|age| age > 45)
    }
}

pub type RiskTable = RuleTable<PatientFacts, PreliminaryAnalysis>;

/// Build the risk table in its fixed evaluation order.
pub fn risk_table() -> RiskTable {
    RuleTable::new(
        "risk",
        vec![
            Rule::new(
                "emergency-override",
                "Critical keyword present or any symptom at severity 9+",
                |s, _| {
                    s.mentions_any(keywords::CRITICAL)
                        || s.max_severity >= keywords::EMERGENCY_MAX_SEVERITY
                },
                emergency,
            ),
            Rule::new(
                "cardiac",
                "Chest pain or heart-related symptoms",
                |s, _| s.mentions_any(keywords::CARDIAC),
                cardiac,
            ),
            Rule::new(
                "respiratory",
                "Fever, cough or sore throat",
                |s, _| s.mentions_any(keywords::RESPIRATORY),
                respiratory,
            ),
            Rule::new(
                "neurological",
                "Headache, migraine or dizziness",
                |s, _| s.mentions_any(keywords::NEUROLOGICAL),
                neurological,
            ),
            Rule::new(
                "gastrointestinal",
                "Nausea, vomiting, diarrhea or stomach complaints",
                |s, _| s.mentions_any(keywords::GASTROINTESTINAL),
                gastrointestinal,
            ),
            Rule::new(
                "musculoskeletal",
                "Body aches, joint or muscle pain",
                |s, _| s.mentions_any(keywords::MUSCULOSKELETAL),
                musculoskeletal,
            ),
        ],
        Rule::always("general", "Non-specific symptoms", general),
    )
}

/// `RiskClassifier` backed by the keyword rule table.
#[derive(Debug)]
pub struct KeywordRiskClassifier {
    table: RiskTable,
}

impl KeywordRiskClassifier {
    pub fn new() -> Self {
        Self { table: risk_table() }
    }

    pub fn table(&self) -> &RiskTable {
        &self.table
    }
}

impl Default for KeywordRiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskClassifier for KeywordRiskClassifier {
    fn classify(
        &self,
        symptoms: &NormalizedSymptoms,
        context: Option<&PatientContext>,
    ) -> PreliminaryAnalysis {
        let facts = PatientFacts::from_context(context);
        self.table.evaluate(symptoms, &facts)
    }
}

// ── Result builders ───────────────────────────────────────────────────────────

fn emergency(_s: &NormalizedSymptoms, facts: &PatientFacts) -> PreliminaryAnalysis {
    PreliminaryAnalysis {
        risk_level: RiskLevel::Critical,
        urgency: Urgency::Emergency,
        preliminary_diagnosis: "MEDICAL EMERGENCY - Immediate Attention Required".to_string(),
        recommended_specialist: "Emergency Medicine".to_string(),
        analysis_summary: join_sentences(&[
            "Your symptoms indicate a potentially life-threatening condition that requires \
             immediate medical attention. DO NOT DELAY - proceed to the nearest emergency room \
             or call emergency services (911) immediately.",
            if facts.has_chronic_conditions {
                "Your pre-existing conditions increase the urgency."
            } else {
                ""
            },
        ]),
        key_findings: lines(&[
            "Critical symptoms detected requiring immediate intervention",
            "High severity level indicates serious medical concern",
            "Emergency medical evaluation essential",
            if facts.has_chronic_conditions {
                "Pre-existing conditions may complicate situation"
            } else {
                "Urgent assessment needed"
            },
        ]),
        warning_signs: lines(&[
            "⚠️ CALL 911 IMMEDIATELY",
            "Do not drive yourself to the hospital",
            "Time is critical - every minute counts",
            "Have someone stay with you while waiting for help",
        ]),
    }
}

fn cardiac(s: &NormalizedSymptoms, facts: &PatientFacts) -> PreliminaryAnalysis {
    if s.max_severity >= 7 {
        return PreliminaryAnalysis {
            risk_level: RiskLevel::Critical,
            urgency: Urgency::Emergency,
            preliminary_diagnosis: "Possible Acute Cardiac Event".to_string(),
            recommended_specialist: "Cardiologist / Emergency Medicine".to_string(),
            analysis_summary: join_sentences(&[
                "Your chest pain symptoms require immediate medical evaluation to rule out heart \
                 attack or other serious cardiac conditions.",
                if facts.is_over_45() {
                    "Your age increases cardiac risk."
                } else {
                    ""
                },
                "Proceed to emergency room immediately.",
            ]),
            key_findings: lines(&[
                "Chest pain with high severity level",
                "Cardiac event cannot be ruled out",
                "Immediate medical evaluation required",
                if facts.has_hypertension {
                    "Hypertension increases cardiac risk"
                } else {
                    "Cardiac assessment essential"
                },
            ]),
            warning_signs: lines(&[
                "Seek emergency care immediately",
                "Do not delay evaluation",
                "Cardiac events are time-sensitive",
                "Call 911 if symptoms worsen",
            ]),
        };
    }

    PreliminaryAnalysis {
        risk_level: RiskLevel::High,
        urgency: Urgency::Urgent,
        preliminary_diagnosis: "Cardiac Symptoms - Evaluation Needed".to_string(),
        recommended_specialist: "Cardiologist".to_string(),
        analysis_summary: "Chest-related symptoms should be evaluated by a cardiologist within 24 \
                           hours. While not immediately life-threatening, cardiac issues require \
                           prompt attention."
            .to_string(),
        key_findings: lines(&[
            "Cardiac symptoms present",
            "Medical evaluation recommended within 24 hours",
            "Further diagnostic tests may be needed",
            "Monitor for worsening symptoms",
        ]),
        warning_signs: lines(&[
            "Seek immediate care if pain worsens",
            "Watch for shortness of breath",
            "Note any radiating pain",
            "Do not ignore persistent symptoms",
        ]),
    }
}

fn respiratory(s: &NormalizedSymptoms, facts: &PatientFacts) -> PreliminaryAnalysis {
    let chronic = facts.has_chronic_lung_condition;

    if s.mean_severity >= 7.0 || chronic {
        return PreliminaryAnalysis {
            risk_level: RiskLevel::High,
            urgency: Urgency::Urgent,
            preliminary_diagnosis: "Severe Respiratory Infection".to_string(),
            recommended_specialist: "Pulmonologist / Internal Medicine".to_string(),
            analysis_summary: format!(
                "Your respiratory symptoms are severe{}. Medical evaluation within 24 hours is \
                 strongly recommended to prevent complications such as pneumonia.",
                if chronic {
                    " and complicated by your chronic condition"
                } else {
                    ""
                }
            ),
            key_findings: lines(&[
                "Significant respiratory symptoms present",
                if chronic {
                    "Pre-existing lung condition increases risk"
                } else {
                    "High severity respiratory symptoms"
                },
                "Risk of lower respiratory tract infection",
                "May require prescription medication",
            ]),
            warning_signs: lines(&[
                "Seek immediate care if breathing becomes difficult",
                "Watch for high fever (>103°F)",
                "Monitor for chest pain",
                "Note any changes in consciousness",
            ]),
        };
    }

    let elevated = s.mean_severity >= 5.0;
    PreliminaryAnalysis {
        risk_level: if elevated { RiskLevel::Medium } else { RiskLevel::Low },
        urgency: if elevated { Urgency::Urgent } else { Urgency::Routine },
        preliminary_diagnosis: "Upper Respiratory Tract Infection".to_string(),
        recommended_specialist: "General Practitioner / Family Medicine".to_string(),
        analysis_summary: join_sentences(&[
            "Likely upper respiratory infection (common cold or flu). Most cases resolve with \
             supportive care.",
            if elevated {
                "Consider medical consultation if symptoms persist beyond 5 days."
            } else {
                "Home care should be sufficient for most symptoms."
            },
        ]),
        key_findings: lines(&[
            "Common respiratory infection symptoms",
            "Usually self-limiting condition",
            "Supportive care recommended",
            "Monitor for complications",
        ]),
        warning_signs: lines(&[
            "Seek care if symptoms worsen after 5 days",
            "Watch for difficulty breathing",
            "Monitor fever closely",
            "Stay hydrated and rest",
        ]),
    }
}

fn neurological(s: &NormalizedSymptoms, _facts: &PatientFacts) -> PreliminaryAnalysis {
    if s.mean_severity >= 8.0 {
        return PreliminaryAnalysis {
            risk_level: RiskLevel::High,
            urgency: Urgency::Urgent,
            preliminary_diagnosis: "Severe Headache / Neurological Concern".to_string(),
            recommended_specialist: "Neurologist".to_string(),
            analysis_summary: "Severe headache symptoms require medical evaluation to rule out \
                               serious neurological conditions such as migraine, meningitis, or \
                               intracranial issues. Medical consultation within 24 hours \
                               recommended."
                .to_string(),
            key_findings: lines(&[
                "High severity headache symptoms",
                "Neurological evaluation needed",
                "Possible migraine or secondary headache",
                "Diagnostic imaging may be required",
            ]),
            warning_signs: lines(&[
                "Seek emergency care for sudden severe headache",
                "Watch for vision changes",
                "Note any confusion or weakness",
                "Monitor for neck stiffness",
            ]),
        };
    }

    PreliminaryAnalysis {
        risk_level: RiskLevel::Medium,
        urgency: Urgency::Routine,
        preliminary_diagnosis: "Tension Headache / Primary Headache Disorder".to_string(),
        recommended_specialist: "General Practitioner / Neurologist".to_string(),
        analysis_summary: "Likely tension-type headache or primary headache disorder. Can usually \
                           be managed with over-the-counter medications and lifestyle \
                           modifications. If frequent or severe, consult a healthcare provider."
            .to_string(),
        key_findings: lines(&[
            "Common headache presentation",
            "Often stress or tension-related",
            "Usually responds to OTC pain relievers",
            "Lifestyle factors may contribute",
        ]),
        warning_signs: lines(&[
            "Seek care if headaches become frequent",
            "Watch for pattern changes",
            "Note any associated symptoms",
            "Keep headache diary for tracking",
        ]),
    }
}

fn gastrointestinal(s: &NormalizedSymptoms, _facts: &PatientFacts) -> PreliminaryAnalysis {
    if s.mean_severity >= 7.0 {
        return PreliminaryAnalysis {
            risk_level: RiskLevel::High,
            urgency: Urgency::Urgent,
            preliminary_diagnosis: "Severe Gastroenteritis / Acute Abdomen".to_string(),
            recommended_specialist: "Gastroenterologist / General Surgery".to_string(),
            analysis_summary: "Severe gastrointestinal symptoms require medical evaluation to rule \
                               out serious conditions requiring intervention. Risk of dehydration \
                               is significant. Seek medical care within 24 hours."
                .to_string(),
            key_findings: lines(&[
                "Severe GI symptoms present",
                "Risk of dehydration",
                "May require IV fluids",
                "Possible need for diagnostic tests",
            ]),
            warning_signs: lines(&[
                "Seek emergency care for severe abdominal pain",
                "Watch for signs of dehydration",
                "Note any blood in vomit or stool",
                "Monitor for fever and weakness",
            ]),
        };
    }

    PreliminaryAnalysis {
        risk_level: if s.mean_severity >= 4.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        },
        urgency: Urgency::Routine,
        preliminary_diagnosis: "Acute Gastroenteritis".to_string(),
        recommended_specialist: "General Practitioner".to_string(),
        analysis_summary: "Likely viral or bacterial gastroenteritis. Most cases resolve within \
                           2-3 days with supportive care. Focus on hydration and rest. Consult \
                           healthcare provider if symptoms persist beyond 3 days."
            .to_string(),
        key_findings: lines(&[
            "Common GI infection symptoms",
            "Usually self-limiting",
            "Hydration is key priority",
            "Bland diet recommended",
        ]),
        warning_signs: lines(&[
            "Seek care if unable to keep fluids down",
            "Watch for signs of dehydration",
            "Monitor for blood in stool",
            "Note persistent high fever",
        ]),
    }
}

fn musculoskeletal(s: &NormalizedSymptoms, _facts: &PatientFacts) -> PreliminaryAnalysis {
    PreliminaryAnalysis {
        risk_level: if s.mean_severity >= 6.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        },
        urgency: Urgency::Routine,
        preliminary_diagnosis: "Musculoskeletal Pain / Myalgia".to_string(),
        recommended_specialist: "Orthopedist / Physical Medicine".to_string(),
        analysis_summary: "Musculoskeletal pain is common and often related to overuse, strain, \
                           or viral illness. Rest, ice/heat therapy, and OTC pain relievers \
                           usually help. If severe or persistent, consult healthcare provider."
            .to_string(),
        key_findings: lines(&[
            "Musculoskeletal symptoms present",
            "Often related to strain or overuse",
            "Usually responds to conservative treatment",
            "Physical therapy may be beneficial",
        ]),
        warning_signs: lines(&[
            "Seek care for severe joint swelling",
            "Watch for loss of function",
            "Note any trauma history",
            "Monitor for fever with joint pain",
        ]),
    }
}

fn general(s: &NormalizedSymptoms, _facts: &PatientFacts) -> PreliminaryAnalysis {
    let elevated = s.mean_severity >= 6.0;
    PreliminaryAnalysis {
        risk_level: if elevated { RiskLevel::Medium } else { RiskLevel::Low },
        urgency: if elevated { Urgency::Urgent } else { Urgency::Routine },
        preliminary_diagnosis: "General Malaise / Non-Specific Symptoms".to_string(),
        recommended_specialist: "General Practitioner / Family Medicine".to_string(),
        analysis_summary: join_sentences(&[
            "Multiple non-specific symptoms present.",
            if elevated {
                "Medical evaluation recommended to identify underlying cause."
            } else {
                "Often related to viral illness or stress. Monitor symptoms and seek care if they \
                 worsen or persist."
            },
        ]),
        key_findings: lines(&[
            "Multiple symptoms present",
            "Comprehensive evaluation may be needed",
            "Could indicate various conditions",
            "Symptom tracking recommended",
        ]),
        warning_signs: lines(&[
            "Seek care if symptoms persist beyond 7 days",
            "Watch for worsening conditions",
            "Note any new symptoms",
            "Monitor overall wellness",
        ]),
    }
}
