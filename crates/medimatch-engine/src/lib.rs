//! medimatch-engine — Symptom matching and recommendation engine.
//!
//! Pure computation over the immutable [`medimatch_dataset::DatasetIndex`]:
//! query parsing, best-match scoring, and personalised recommendation
//! assembly. The [`predictor::Predictor`] facade is the outer boundary that
//! downgrades every failure to the four-kind error taxonomy.

pub mod matcher;
pub mod options;
pub mod predictor;
pub mod recommend;
pub mod result;

pub use matcher::{best_match, parse_symptoms, ScoredMatch};
pub use options::EngineOptions;
pub use predictor::Predictor;
pub use result::MatchResult;
