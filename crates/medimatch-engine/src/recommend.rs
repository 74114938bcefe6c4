//! Personalised recommendation assembly.
//!
//! Builds the final [`MatchResult`] from the best-matched record and the
//! user profile. Step order matters: the allergy check reads the medicine
//! chosen by the age tier, and the fallback advisories only apply when the
//! allergy and severity steps produced nothing.

use std::collections::BTreeSet;

use medimatch_common::UserProfile;
use medimatch_dataset::DiseaseRecord;

use crate::options::EngineOptions;
use crate::result::MatchResult;

pub const MSG_HIGH_SEVERITY: &str = "High severity - seek immediate care";
pub const MSG_HISTORY_MATCH: &str = "History match - consult your doctor";
pub const MSG_STANDARD_TREATMENT: &str = "Follow standard treatment guidelines";
pub const MSG_MONITOR_SYMPTOMS: &str = "Monitor symptoms and consult doctor if they worsen";
pub const MEDICINE_ALLERGY_OVERRIDE: &str = "Consult doctor (allergy risk)";
pub const DOSAGE_ALLERGY_OVERRIDE: &str = "Consult doctor";
pub const DEFAULT_ALTERNATIVE: &str = "Consult doctor for alternatives";

/// Adult/child medicine tier. Selected purely by age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTier {
    Adult,
    Child,
}

impl AgeTier {
    pub fn for_age(age: u32, opts: &EngineOptions) -> Self {
        if age < opts.adult_age_threshold {
            AgeTier::Child
        } else {
            AgeTier::Adult
        }
    }
}

/// Build the personalised result for a matched record.
///
/// `query` must be non-empty; the match engine has already rejected empty
/// symptom sets, so the probability division is safe.
pub fn build(
    record: &DiseaseRecord,
    query: &BTreeSet<String>,
    profile: &UserProfile,
    opts: &EngineOptions,
) -> MatchResult {
    // Step 1: age-tier medicine selection.
    let tier = AgeTier::for_age(profile.age, opts);
    let (mut medicine, mut dosage) = match tier {
        AgeTier::Adult => (record.medicine_adult.clone(), record.dosage_adult.clone()),
        AgeTier::Child => (record.medicine_child.clone(), record.dosage_child.clone()),
    };
    if medicine.trim().is_empty() {
        medicine = "Consult doctor".to_string();
    }
    if dosage.trim().is_empty() {
        dosage = "Consult doctor".to_string();
    }

    // Step 2: probability from query coverage.
    let matched = record.symptoms.intersection(query).count();
    let probability = round2(matched as f64 / query.len() as f64 * 100.0).min(100.0);

    let mut recommendations = Vec::new();

    // Step 3: allergy conflict substitution.
    if profile.has_allergies() && medicine_conflicts_with_allergies(&medicine, &profile.allergies) {
        recommendations.push(format!("Allergy warning for {medicine}"));
        let alternative = if record.alternative_therapies.trim().is_empty() {
            DEFAULT_ALTERNATIVE.to_string()
        } else {
            record.alternative_therapies.clone()
        };
        recommendations.push(format!("Alternative: {alternative}"));
        medicine = MEDICINE_ALLERGY_OVERRIDE.to_string();
        dosage = DOSAGE_ALLERGY_OVERRIDE.to_string();
    }

    // Step 4: severity flag.
    if record.severity_score >= opts.high_severity_threshold {
        recommendations.push(MSG_HIGH_SEVERITY.to_string());
    }

    // Step 5: fallback advice when steps 3-4 produced nothing.
    if recommendations.is_empty() {
        recommendations.push(MSG_STANDARD_TREATMENT.to_string());
        recommendations.push(MSG_MONITOR_SYMPTOMS.to_string());
    }

    MatchResult {
        disease: record.disease.clone(),
        description: record.description.clone(),
        probability,
        medicine,
        dosage,
        precautions: record.precautions.clone(),
        workout: record.workout.clone(),
        severity: record.severity_score,
        recommendations,
        medical_history_match: false,
    }
}

/// Step 6, applied by the caller layer after [`build`]: flag a match
/// between the user's known conditions and the diagnosed disease, and put
/// the history advisory ahead of everything else.
///
/// The test is a bidirectional substring check on lowercased text, kept
/// exactly as the service has always behaved ("flu" matches
/// "influenza-like" and vice versa).
pub fn apply_history_flag(result: &mut MatchResult, profile: &UserProfile) {
    let disease = result.disease.to_lowercase();
    if disease.is_empty() {
        return;
    }
    let matched = profile
        .condition_tokens()
        .iter()
        .any(|condition| disease.contains(condition.as_str()) || condition.contains(&disease));
    if matched {
        result.medical_history_match = true;
        result.recommendations.insert(0, MSG_HISTORY_MATCH.to_string());
    }
}

/// True when any trimmed comma-component of the medicine appears as a
/// case-insensitive substring of the allergies text.
fn medicine_conflicts_with_allergies(medicine: &str, allergies: &str) -> bool {
    let allergies = allergies.to_lowercase();
    medicine
        .split(',')
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .any(|m| allergies.contains(&m))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
