//! Best-match scoring over the dataset index.
//!
//! Pure functions over immutable data; safe to call concurrently from any
//! number of request handlers.

use std::collections::BTreeSet;

use medimatch_common::{MediMatchError, Result};
use medimatch_dataset::{DatasetIndex, DiseaseRecord};

pub const MSG_INVALID_INPUT: &str = "Please enter at least one valid symptom";
pub const MSG_NO_MATCH: &str = "No strong matches found. Try more specific symptoms.";

/// A record selected by [`best_match`], with its score and dataset position.
#[derive(Debug, Clone)]
pub struct ScoredMatch<'a> {
    pub record: &'a DiseaseRecord,
    /// Count of symptom tokens shared between query and record.
    pub score: usize,
    /// Position in dataset order; the tie-break key.
    pub index: usize,
}

/// Parse raw comma-separated symptom text into a normalised token set.
///
/// Tokens are trimmed and lowercased; blanks are dropped. An empty result
/// is `InvalidInput`.
pub fn parse_symptoms(raw: &str) -> Result<BTreeSet<String>> {
    let symptoms: BTreeSet<String> = raw
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if symptoms.is_empty() {
        return Err(MediMatchError::InvalidInput(MSG_INVALID_INPUT.into()));
    }
    Ok(symptoms)
}

/// Count of symptom tokens shared between a record and the query.
pub fn match_score(record: &DiseaseRecord, query: &BTreeSet<String>) -> usize {
    record.symptoms.intersection(query).count()
}

/// Scan every record and select the one with the maximum match score.
///
/// Ties break to the first occurrence in dataset order, so identical
/// queries against an identical dataset always return the same record.
/// A maximum below `min_match` is `NoMatch`.
pub fn best_match<'a>(
    query: &BTreeSet<String>,
    index: &'a DatasetIndex,
    min_match: usize,
) -> Result<ScoredMatch<'a>> {
    let mut best: Option<ScoredMatch<'a>> = None;

    for (i, record) in index.records().iter().enumerate() {
        let score = match_score(record, query);
        // Strictly-greater keeps the earliest record on ties.
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(ScoredMatch {
                record,
                score,
                index: i,
            });
        }
    }

    match best {
        Some(found) if found.score >= min_match => Ok(found),
        _ => Err(MediMatchError::NoMatch(MSG_NO_MATCH.into())),
    }
}
