//! Treatment generation rule table.
//!
//! Evaluation order (first match wins), independent of the risk table:
//!
//! 1. `respiratory`     : fever / cough / sore throat
//! 2. `headache`        : headache / migraine
//! 3. `gastrointestinal`: nausea / vomit / diarrhea
//! 4. `cardiac-referral`: chest pain / heart; fixed, no medications
//! 5. `general`         : fallback
//!
//! Medications are appended in a fixed order per rule; callers may rely on
//! list order, not only membership.

use triage_contracts::{
    symptom::SeverityBand,
    treatment::{Medication, TreatmentPlan},
};
use triage_core::{normalize::NormalizedSymptoms, traits::TreatmentGenerator};

use crate::{
    keywords,
    rule::{Rule, RuleTable},
    text::{bullets, plan},
};

pub use triage_contracts::treatment::CARDIAC_REFERRAL_DIAGNOSIS;

pub type TreatmentTable = RuleTable<SeverityBand, TreatmentPlan>;

/// Build the treatment table in its fixed evaluation order.
pub fn treatment_table() -> TreatmentTable {
    RuleTable::new(
        "treatment",
        vec![
            Rule::new(
                "respiratory",
                "Fever, cough or sore throat",
                |s, _| s.mentions_any(keywords::RESPIRATORY),
                respiratory,
            ),
            Rule::new(
                "headache",
                "Headache or migraine",
                |s, _| s.mentions_any(keywords::HEADACHE),
                headache,
            ),
            Rule::new(
                "gastrointestinal",
                "Nausea, vomiting or diarrhea",
                |s, _| s.mentions_any(keywords::GASTROINTESTINAL_TREATABLE),
                gastrointestinal,
            ),
            Rule::new(
                "cardiac-referral",
                "Chest pain or heart symptoms: refer, do not medicate",
                |s, _| s.mentions_any(keywords::CARDIAC),
                cardiac_referral,
            ),
        ],
        Rule::always("general", "General supportive care", general),
    )
}

/// `TreatmentGenerator` backed by the keyword rule table.
#[derive(Debug)]
pub struct KeywordTreatmentGenerator {
    table: TreatmentTable,
}

impl KeywordTreatmentGenerator {
    pub fn new() -> Self {
        Self {
            table: treatment_table(),
        }
    }

    pub fn table(&self) -> &TreatmentTable {
        &self.table
    }
}

impl Default for KeywordTreatmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TreatmentGenerator for KeywordTreatmentGenerator {
    fn generate(&self, symptoms: &NormalizedSymptoms, band: SeverityBand) -> TreatmentPlan {
        self.table.evaluate(symptoms, &band)
    }
}

// ── Result builders ───────────────────────────────────────────────────────────

fn respiratory(s: &NormalizedSymptoms, band: &SeverityBand) -> TreatmentPlan {
    let mut medications = Vec::new();

    if s.mentions("fever") && s.mean_severity >= 5.0 {
        medications.push(Medication::new(
            "Acetaminophen (Tylenol)",
            "500-1000mg",
            "Every 4-6 hours as needed",
            "3-5 days",
        ));
    }
    if s.mentions("cough") {
        medications.push(Medication::new(
            "Dextromethorphan (Robitussin)",
            "10-20mg",
            "Every 4 hours as needed",
            "7-10 days",
        ));
    }
    medications.push(Medication::new("Vitamin C", "500mg", "Once daily", "7 days"));

    TreatmentPlan {
        diagnosis: String::from(if band.is_severe() {
            "Severe Respiratory Infection - Medical Evaluation Recommended"
        } else {
            "Upper Respiratory Tract Infection"
        }),
        treatment_plan: plan(
            "Rest and hydration are essential for recovery.",
            &[
                "Get plenty of rest (7-9 hours of sleep)",
                "Drink at least 8-10 glasses of water daily",
                "Use a humidifier to ease breathing",
                "Gargle with warm salt water for sore throat",
                "Avoid smoking and secondhand smoke",
            ],
            if band.is_severe() {
                "Given the severity of symptoms, please consult a healthcare provider within 24 \
                 hours."
            } else {
                "Monitor symptoms closely. If they worsen or persist beyond 7 days, consult a \
                 healthcare provider."
            },
        ),
        medications,
        precautions: bullets(&[
            "Do not exceed recommended medication dosages",
            "Avoid alcohol while taking medications",
            "If fever exceeds 103°F (39.4°C), seek immediate medical care",
            "Watch for difficulty breathing or chest pain",
            "Isolate from others to prevent spread of infection",
            "Wash hands frequently",
        ]),
    }
}

fn headache(s: &NormalizedSymptoms, band: &SeverityBand) -> TreatmentPlan {
    let intense = s.mean_severity >= 7.0;

    let mut medications = vec![Medication::new(
        "Ibuprofen (Advil)",
        "400-600mg",
        "Every 6-8 hours as needed",
        "As needed, max 3 days",
    )];
    if intense {
        medications.push(Medication::new(
            "Sumatriptan",
            "50-100mg",
            "At onset of migraine",
            "As needed (prescription required)",
        ));
    }

    TreatmentPlan {
        diagnosis: String::from(if intense {
            "Severe Headache - Possible Migraine"
        } else {
            "Tension Headache"
        }),
        treatment_plan: plan(
            "Focus on pain relief and identifying triggers.",
            &[
                "Rest in a quiet, dark room",
                "Apply cold or warm compress to head/neck",
                "Stay well hydrated",
                "Practice relaxation techniques",
                "Avoid bright lights and loud noises",
                "Maintain regular sleep schedule",
            ],
            if band.is_severe() {
                "For severe or persistent headaches, neurological evaluation is recommended."
            } else {
                "Track headache patterns to identify potential triggers."
            },
        ),
        medications,
        precautions: bullets(&[
            "Avoid overuse of pain medications (can cause rebound headaches)",
            "Limit caffeine intake",
            "If headache is sudden and severe (\"thunderclap\"), seek emergency care",
            "Watch for vision changes, confusion, or weakness",
            "Keep a headache diary to track patterns",
        ]),
    }
}

fn gastrointestinal(s: &NormalizedSymptoms, band: &SeverityBand) -> TreatmentPlan {
    let mut medications = vec![Medication::new(
        "Oral Rehydration Solution (Pedialyte)",
        "8 oz",
        "Every hour",
        "Until symptoms improve",
    )];
    if s.mean_severity >= 5.0 {
        medications.push(Medication::new(
            "Loperamide (Imodium)",
            "2mg",
            "After each loose stool, max 8mg/day",
            "2 days maximum",
        ));
    }
    medications.push(Medication::new("Probiotics", "1 capsule", "Once daily", "7-10 days"));

    TreatmentPlan {
        diagnosis: String::from(if band.is_severe() {
            "Acute Gastroenteritis - Severe"
        } else {
            "Mild Gastroenteritis"
        }),
        treatment_plan: plan(
            "Focus on preventing dehydration and gentle recovery.",
            &[
                "Clear liquid diet for first 24 hours",
                "Gradually introduce bland foods (BRAT diet: bananas, rice, applesauce, toast)",
                "Avoid dairy, fatty, and spicy foods",
                "Rest and allow your body to recover",
                "Wash hands frequently",
            ],
            if band.is_severe() {
                "If unable to keep fluids down or showing signs of severe dehydration, seek \
                 immediate medical care."
            } else {
                "Most cases resolve within 2-3 days with supportive care."
            },
        ),
        medications,
        precautions: bullets(&[
            "Watch for signs of dehydration (dark urine, dizziness, dry mouth)",
            "Seek immediate care if blood in stool or vomit",
            "Avoid anti-diarrheal medication if fever is present",
            "Do not prepare food for others while symptomatic",
            "Maintain strict hygiene practices",
        ]),
    }
}

fn cardiac_referral(_s: &NormalizedSymptoms, _band: &SeverityBand) -> TreatmentPlan {
    TreatmentPlan {
        diagnosis: CARDIAC_REFERRAL_DIAGNOSIS.to_string(),
        treatment_plan: "Chest pain requires immediate evaluation by a healthcare professional. \
                         Please proceed to the nearest emergency room or call emergency services \
                         immediately."
            .to_string(),
        medications: Vec::new(),
        precautions: "⚠️ SEEK IMMEDIATE MEDICAL ATTENTION\n\nChest pain can indicate serious \
                      cardiac conditions. Do not delay seeking emergency care."
            .to_string(),
    }
}

fn general(s: &NormalizedSymptoms, band: &SeverityBand) -> TreatmentPlan {
    let mut medications = vec![Medication::new(
        "Multivitamin",
        "1 tablet",
        "Once daily with food",
        "30 days",
    )];
    if s.mean_severity >= 5.0 {
        medications.push(Medication::new(
            "Acetaminophen (Tylenol)",
            "500mg",
            "Every 6 hours as needed",
            "As needed for pain/discomfort",
        ));
    }

    TreatmentPlan {
        diagnosis: "General Malaise - Multiple Symptoms".to_string(),
        treatment_plan: plan(
            "General supportive care and symptom monitoring.",
            &[
                "Ensure adequate rest (7-9 hours nightly)",
                "Maintain balanced nutrition",
                "Stay well hydrated (8-10 glasses water daily)",
                "Light exercise if tolerated",
                "Stress management techniques",
                "Monitor symptoms daily",
            ],
            if band.is_severe() {
                "Given multiple severe symptoms, a comprehensive medical evaluation is \
                 recommended."
            } else {
                "If symptoms persist beyond 5-7 days or worsen, consult a healthcare provider."
            },
        ),
        medications,
        precautions: bullets(&[
            "Do not ignore persistent or worsening symptoms",
            "Maintain a symptom journal",
            "Avoid self-diagnosing serious conditions",
            "Seek immediate care for severe or sudden symptoms",
            "Follow up with healthcare provider if no improvement",
            "Consider underlying stress or lifestyle factors",
        ]),
    }
}
