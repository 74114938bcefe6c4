//! medimatch-dataset — In-memory disease dataset index.
//!
//! Loads the flat tabular dataset once at startup, normalises each row into
//! an immutable [`record::DiseaseRecord`], and serves read-only lookups for
//! the lifetime of the process. There is no reload path; a failed load keeps
//! the service in degraded mode until restart.

pub mod index;
pub mod record;
pub mod schema;

pub use index::DatasetIndex;
pub use record::DiseaseRecord;
pub use schema::DatasetSchema;
