//! Semantic CAP profile checks.
//!
//! This crate provides:
//! - The closed reason taxonomies (blocking errors and advisory recommendations)
//! - The `CapProfile` contract shared by every publishing profile
//! - `GoogleProfile`, the Google Public Alerts profile
//!
//! Parsing and structural schema validation happen upstream; checks here
//! read an already schema-valid [`capguard_core::Alert`] and only report.

pub mod error;
pub mod profile;
pub mod reason;

pub use error::{ProfileError, Result};
pub use profile::{CapProfile, GoogleProfile, ProfileReport, ValidationMode};
pub use reason::{ErrorType, Reason, ReasonKind, ReasonType, RecommendationType};
