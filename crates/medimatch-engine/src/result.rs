//! The structured recommendation returned for a successful match.

use serde::{Deserialize, Serialize};

/// Final per-request result. Created by the recommendation builder,
/// serialised as the `data` payload of a successful predict response,
/// then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub disease: String,
    pub description: String,
    /// Share of the query's symptoms present on the matched record,
    /// as a percentage rounded to 2 decimal places. Always in [0, 100].
    pub probability: f64,
    pub medicine: String,
    pub dosage: String,
    pub precautions: String,
    pub workout: Vec<String>,
    /// 0–10 clinical urgency of the matched record.
    pub severity: u8,
    /// Ordered advisory strings. When the history flag is set, the history
    /// advisory is always first.
    pub recommendations: Vec<String>,
    pub medical_history_match: bool,
}
