//! Error types for profile checks.
//!
//! A profile check only fails when the document breaks the accessor
//! contract, e.g. a timestamp that is present but cannot be parsed. Rule
//! violations are never errors; they are returned as [`crate::Reason`]s.

use capguard_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The document handed to the checker violates a collaborator's contract.
    #[error(transparent)]
    Document(#[from] CoreError),
}

/// Result alias for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
