//! Column schema resolved from the dataset header at load time.
//!
//! The source file encodes adult/child medicine variants with `_x`/`_y`
//! column suffixes (a merge artefact of the upstream data preparation).
//! That convention is resolved here, once, into explicit named field pairs
//! so nothing downstream ever touches a suffix again.

use medimatch_common::{MediMatchError, Result};

/// Indices of every column the loader reads, resolved by name from the
/// header row. `Disease` and at least one `Symptom_*` column are required;
/// everything else is optional and defaults per record.
#[derive(Debug, Clone)]
pub struct DatasetSchema {
    pub disease: usize,
    /// All `Symptom_*` columns, in header order.
    pub symptoms: Vec<usize>,
    /// All `Precaution_*` columns, in header order.
    pub precautions: Vec<usize>,
    pub medicine_adult: Option<usize>,
    pub medicine_child: Option<usize>,
    pub dosage_adult: Option<usize>,
    pub dosage_child: Option<usize>,
    pub severity_score: Option<usize>,
    pub workout: Option<usize>,
    pub alternative_therapies: Option<usize>,
    pub description: Option<usize>,
}

impl DatasetSchema {
    /// Resolve column positions from a header row. Fails fast with
    /// `DataUnavailable` when the required columns are absent, rather than
    /// silently producing records that can never match.
    pub fn from_headers(headers: &[&str]) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let disease = position("Disease").ok_or_else(|| {
            MediMatchError::DataUnavailable("dataset header missing Disease column".into())
        })?;

        let prefixed = |prefix: &str| -> Vec<usize> {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| h.trim().starts_with(prefix))
                .map(|(i, _)| i)
                .collect()
        };

        let symptoms = prefixed("Symptom_");
        if symptoms.is_empty() {
            return Err(MediMatchError::DataUnavailable(
                "dataset header has no Symptom_* columns".into(),
            ));
        }

        Ok(Self {
            disease,
            symptoms,
            precautions: prefixed("Precaution_"),
            // _x = adult, _y = child; see module docs.
            medicine_adult: position("Medicine_x"),
            medicine_child: position("Medicine_y"),
            dosage_adult: position("Dosage_x"),
            dosage_child: position("Dosage_y"),
            severity_score: position("Severity_Score"),
            workout: position("Workout"),
            alternative_therapies: position("Alternative_Therapies"),
            description: position("Description"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_full_header() {
        let headers = vec![
            "Disease",
            "Symptom_1",
            "Symptom_2",
            "Precaution_1",
            "Medicine_x",
            "Dosage_x",
            "Medicine_y",
            "Dosage_y",
            "Severity_Score",
            "Workout",
            "Alternative_Therapies",
            "Description",
        ];
        let schema = DatasetSchema::from_headers(&headers).unwrap();
        assert_eq!(schema.disease, 0);
        assert_eq!(schema.symptoms, vec![1, 2]);
        assert_eq!(schema.precautions, vec![3]);
        assert_eq!(schema.medicine_adult, Some(4));
        assert_eq!(schema.medicine_child, Some(6));
        assert_eq!(schema.dosage_adult, Some(5));
        assert_eq!(schema.dosage_child, Some(7));
        assert_eq!(schema.severity_score, Some(8));
    }

    #[test]
    fn missing_disease_column_fails() {
        let err = DatasetSchema::from_headers(&["Symptom_1", "Description"]).unwrap_err();
        assert!(matches!(err, MediMatchError::DataUnavailable(_)));
    }

    #[test]
    fn missing_symptom_columns_fail() {
        let err = DatasetSchema::from_headers(&["Disease", "Description"]).unwrap_err();
        assert!(matches!(err, MediMatchError::DataUnavailable(_)));
    }

    #[test]
    fn optional_columns_default_to_none() {
        let schema = DatasetSchema::from_headers(&["Disease", "Symptom_1"]).unwrap();
        assert!(schema.medicine_adult.is_none());
        assert!(schema.severity_score.is_none());
        assert!(schema.precautions.is_empty());
    }
}
