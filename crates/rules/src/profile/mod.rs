//! Publishing profiles layered on top of CAP's structural schema.
//!
//! A profile groups two single-pass checkers behind [`CapProfile`]:
//! errors (block publication) and recommendations (advisory). Both walk the
//! alert depth-first in document order, so report order is stable for a
//! given input. Checkers continue past every violation and return all
//! findings at once.

mod error_checks;
mod google;
mod recommendation_checks;
pub mod timezone;

pub use google::GoogleProfile;

use capguard_core::Alert;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::reason::Reason;

// ── Validation mode ─────────────────────────────────────────────────

/// How much a profile validates, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// By-the-book schema validation only; profile semantics are skipped.
    StrictSchemaOnly,
    /// Run every profile rule.
    #[default]
    Extended,
}

impl ValidationMode {
    pub fn from_strict_flag(strict_schema: bool) -> Self {
        if strict_schema {
            ValidationMode::StrictSchemaOnly
        } else {
            ValidationMode::Extended
        }
    }

    pub fn runs_semantic_checks(&self) -> bool {
        matches!(self, ValidationMode::Extended)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::StrictSchemaOnly => write!(f, "strict_schema_only"),
            ValidationMode::Extended => write!(f, "extended"),
        }
    }
}

// ── Profile contract ────────────────────────────────────────────────

/// A named set of semantic rules for CAP alerts.
///
/// Implementations hold no mutable state and may be shared across threads.
/// Both checkers only fail when the document breaks the accessor contract
/// (see [`crate::ProfileError`]); rule violations come back as findings.
pub trait CapProfile: Send + Sync {
    /// Human-readable profile name.
    fn name(&self) -> &'static str;

    /// Short code, the profile's canonical string form and registry key.
    fn code(&self) -> &'static str;

    /// Where the profile's rules are documented.
    fn documentation_url(&self) -> &'static str;

    fn validation_mode(&self) -> ValidationMode;

    /// Findings from the error taxonomy, in document order.
    fn check_errors(&self, alert: &Alert) -> Result<Vec<Reason>>;

    /// Findings from the recommendation taxonomy, in document order.
    fn check_recommendations(&self, alert: &Alert) -> Result<Vec<Reason>>;

    /// Run both checkers and bundle the outcome.
    fn check(&self, alert: &Alert) -> Result<ProfileReport> {
        let errors = self.check_errors(alert)?;
        let recommendations = self.check_recommendations(alert)?;
        Ok(ProfileReport::new(self.code(), errors, recommendations))
    }
}

// ── Report ──────────────────────────────────────────────────────────

/// Combined outcome of running one profile over one alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub profile: String,
    /// False iff any error was found. Recommendations never affect this.
    pub valid: bool,
    pub errors: Vec<Reason>,
    pub recommendations: Vec<Reason>,
}

impl ProfileReport {
    pub fn new(profile: &str, errors: Vec<Reason>, recommendations: Vec<Reason>) -> Self {
        Self {
            profile: profile.to_string(),
            valid: errors.is_empty(),
            errors,
            recommendations,
        }
    }

    /// Drop advisory findings, keeping only what blocks publication.
    pub fn without_recommendations(mut self) -> Self {
        self.recommendations.clear();
        self
    }
}

// ── XPath helpers ───────────────────────────────────────────────────

pub(crate) fn info_path(i: usize) -> String {
    format!("/alert/info[{i}]")
}

pub(crate) fn area_path(info_path: &str, j: usize) -> String {
    format!("{info_path}/area[{j}]")
}
