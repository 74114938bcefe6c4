//! medimatch-web — JSON API for the Medimatch engine.
//! Provides:
//!   - Symptom prediction endpoint
//!   - Health and dataset statistics endpoints
//!
//! Transport concerns only: status codes and the response envelope live
//! here, never in the engine.

pub mod handlers;
pub mod router;
pub mod state;
