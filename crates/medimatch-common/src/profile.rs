//! Per-request user profile, supplied by the account-storage collaborator.

use serde::{Deserialize, Serialize};

/// Everything the recommendation engine needs to know about the requesting
/// user. Constructed per request and discarded with the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    /// Comma-separated allergy list, possibly empty.
    #[serde(default)]
    pub allergies: String,
    /// Comma-separated known conditions, possibly empty.
    #[serde(default)]
    pub medical_conditions: String,
}

impl UserProfile {
    pub fn new(age: u32, allergies: impl Into<String>, medical_conditions: impl Into<String>) -> Self {
        Self {
            age,
            allergies: allergies.into(),
            medical_conditions: medical_conditions.into(),
        }
    }

    /// Trimmed, lowercased condition tokens from the comma-separated list.
    pub fn condition_tokens(&self) -> Vec<String> {
        self.medical_conditions
            .split(',')
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect()
    }

    pub fn has_allergies(&self) -> bool {
        !self.allergies.trim().is_empty()
    }
}
