//! Outer engine boundary.
//!
//! Owns the shared index handle and the configured thresholds, and
//! guarantees the four-kind error contract: a missing index degrades to
//! `DataUnavailable`, an unexpected fault during scoring or formatting is
//! caught, logged, and surfaced as `Internal`. Nothing crosses this
//! boundary as a panic.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error};

use medimatch_common::{MediMatchError, Result, UserProfile};
use medimatch_dataset::DatasetIndex;

use crate::matcher::{best_match, parse_symptoms};
use crate::options::EngineOptions;
use crate::recommend::{apply_history_flag, build};
use crate::result::MatchResult;

/// Stateless per-request prediction over a shared immutable index.
///
/// Cheap to clone; every request handler works off the same `Arc`.
#[derive(Debug, Clone)]
pub struct Predictor {
    index: Option<Arc<DatasetIndex>>,
    opts: EngineOptions,
}

impl Predictor {
    pub fn new(index: Arc<DatasetIndex>, opts: EngineOptions) -> Self {
        Self {
            index: Some(index),
            opts,
        }
    }

    /// A predictor with no index: every predict call answers the degraded
    /// "system initializing" message until the process restarts with a
    /// valid dataset.
    pub fn degraded(opts: EngineOptions) -> Self {
        Self { index: None, opts }
    }

    pub fn is_ready(&self) -> bool {
        self.index.is_some()
    }

    pub fn index(&self) -> Option<&Arc<DatasetIndex>> {
        self.index.as_ref()
    }

    /// Parse the raw symptom text, find the best match, and assemble the
    /// personalised result.
    pub fn predict(&self, raw_symptoms: &str, profile: &UserProfile) -> Result<MatchResult> {
        let index = self.index.as_ref().ok_or_else(|| {
            MediMatchError::DataUnavailable("dataset index not loaded".into())
        })?;

        contain(|| {
            let query = parse_symptoms(raw_symptoms)?;
            let found = best_match(&query, index, self.opts.min_symptom_match)?;
            debug!(
                disease = %found.record.disease,
                score = found.score,
                "best match selected"
            );
            let mut result = build(found.record, &query, profile, &self.opts);
            apply_history_flag(&mut result, profile);
            Ok(result)
        })
    }
}

/// Run the scoring/formatting computation with panic containment: an
/// unwind is logged and downgraded to `Internal` instead of crossing the
/// engine boundary.
fn contain(f: impl FnOnce() -> Result<MatchResult>) -> Result<MatchResult> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(detail = %detail, "prediction panicked");
            Err(MediMatchError::Internal(detail))
        }
    }
}
