//! medimatch-common — Shared types and errors used across all Medimatch crates.

pub mod error;
pub mod profile;

// Re-export commonly used types
pub use error::{MediMatchError, Result};
pub use profile::UserProfile;
