//! In-memory dataset index.
//!
//! Built once at process start, then shared read-only across request
//! handlers. No locking is needed: every query is a bounded scan over an
//! immutable record list.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use medimatch_common::{MediMatchError, Result};

use crate::record::DiseaseRecord;
use crate::schema::DatasetSchema;

/// Immutable index over the disease dataset, in file order.
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    records: Vec<DiseaseRecord>,
    loaded_at: DateTime<Utc>,
    source_file: PathBuf,
}

impl DatasetIndex {
    /// Load and normalise the dataset from a delimited tabular file.
    ///
    /// Fails with `DataUnavailable` when the file is missing, unreadable,
    /// lacks the required columns, or yields zero usable rows. Rows that
    /// fail CSV parsing are skipped with a warning; short rows read their
    /// missing cells as empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| {
                MediMatchError::DataUnavailable(format!(
                    "cannot open dataset {}: {e}",
                    path.display()
                ))
            })?;

        let headers = reader
            .headers()
            .map_err(|e| {
                MediMatchError::DataUnavailable(format!("cannot read dataset header: {e}"))
            })?
            .clone();
        let header_cells: Vec<&str> = headers.iter().collect();
        let schema = DatasetSchema::from_headers(&header_cells)?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for row in reader.records() {
            match row {
                Ok(row) => records.push(DiseaseRecord::from_row(&schema, &row)),
                Err(e) => {
                    skipped += 1;
                    warn!(error = %e, "skipping malformed dataset row");
                }
            }
        }

        if records.is_empty() {
            return Err(MediMatchError::DataUnavailable(format!(
                "dataset {} contains no usable rows",
                path.display()
            )));
        }

        info!(
            path = %path.display(),
            n_records = records.len(),
            n_skipped = skipped,
            "Dataset loaded and preprocessed"
        );

        Ok(Self {
            records,
            loaded_at: Utc::now(),
            source_file: path.to_path_buf(),
        })
    }

    /// Records in dataset order. Order is load order and never changes;
    /// tie-breaking in the match engine depends on it.
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// Number of distinct symptom tokens across all records.
    pub fn symptom_vocabulary_len(&self) -> usize {
        let mut vocab: BTreeSet<&str> = BTreeSet::new();
        for record in &self.records {
            vocab.extend(record.symptoms.iter().map(String::as_str));
        }
        vocab.len()
    }
}
