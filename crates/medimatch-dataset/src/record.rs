//! One normalised dataset row.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::schema::DatasetSchema;

pub const DEFAULT_SEVERITY: u8 = 5;
pub const MAX_SEVERITY: u8 = 10;
const CONSULT_DOCTOR: &str = "Consult doctor";

/// A single disease row, normalised at load and immutable afterwards.
///
/// `symptoms` never contains the empty string. A row whose symptom columns
/// were all blank still loads, but its match score is always 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub disease: String,
    pub symptoms: BTreeSet<String>,
    pub precautions: String,
    pub description: String,
    pub medicine_adult: String,
    pub dosage_adult: String,
    pub medicine_child: String,
    pub dosage_child: String,
    pub alternative_therapies: String,
    /// 0–10, clamped at load; 5 when absent or unparsable.
    pub severity_score: u8,
    pub workout: Vec<String>,
}

impl DiseaseRecord {
    /// Build a record from a raw CSV row using resolved column positions.
    /// Cells past the end of a short row read as empty.
    pub fn from_row(schema: &DatasetSchema, row: &csv::StringRecord) -> Self {
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();
        let opt_cell = |idx: Option<usize>| idx.map(|i| cell(i)).unwrap_or_default();

        let mut symptoms = BTreeSet::new();
        for &idx in &schema.symptoms {
            // A symptom cell may itself hold a comma-separated list.
            for token in cell(idx).to_lowercase().split(',') {
                let token = token.trim();
                if !token.is_empty() && token != "nan" {
                    symptoms.insert(token.to_string());
                }
            }
        }

        let precautions = schema
            .precautions
            .iter()
            .map(|&idx| cell(idx))
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("nan"))
            .collect::<Vec<_>>()
            .join(", ");

        let workout = opt_cell(schema.workout)
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(String::from)
            .collect();

        let severity_score = opt_cell(schema.severity_score)
            .parse::<i64>()
            .map(|s| s.clamp(0, MAX_SEVERITY as i64) as u8)
            .unwrap_or(DEFAULT_SEVERITY);

        Self {
            disease: cell(schema.disease),
            symptoms,
            precautions,
            description: opt_cell(schema.description),
            medicine_adult: or_consult(opt_cell(schema.medicine_adult)),
            dosage_adult: or_consult(opt_cell(schema.dosage_adult)),
            medicine_child: or_consult(opt_cell(schema.medicine_child)),
            dosage_child: or_consult(opt_cell(schema.dosage_child)),
            alternative_therapies: blank_if_nan(opt_cell(schema.alternative_therapies)),
            severity_score,
            workout,
        }
    }
}

/// Medicine/dosage cells default to "Consult doctor" when absent.
fn or_consult(value: String) -> String {
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        CONSULT_DOCTOR.to_string()
    } else {
        value
    }
}

fn blank_if_nan(value: String) -> String {
    if value.eq_ignore_ascii_case("nan") {
        String::new()
    } else {
        value
    }
}
