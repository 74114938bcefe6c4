//! Engine thresholds.

/// Tunable thresholds for matching and recommendation assembly.
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Minimum shared-symptom count a record must reach to count as a match.
    pub min_symptom_match: usize,
    /// Severity score at or above which the urgent-care advisory is added.
    pub high_severity_threshold: u8,
    /// Age below which the child medicine/dosage tier applies.
    pub adult_age_threshold: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            min_symptom_match: 1,
            high_severity_threshold: 7,
            adult_age_threshold: 18,
        }
    }
}
