//! The Google Public Alerts CAP profile.
//!
//! Most of these checks cannot be expressed in an XSD schema.

use std::fmt;

use capguard_core::Alert;
use tracing::debug;

use super::{error_checks, recommendation_checks, CapProfile, ValidationMode};
use crate::error::Result;
use crate::reason::Reason;

/// CAP profile for alerts published on the Google Public Alerts platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoogleProfile {
    mode: ValidationMode,
}

impl GoogleProfile {
    pub const NAME: &'static str = "Google Public Alerts CAP v1.0";
    pub const CODE: &'static str = "google";
    pub const DOCUMENTATION_URL: &'static str = "http://goo.gl/jgHTe";

    /// Profile running every semantic rule.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// With `strict_schema`, only CAP XSD schema validation is expected
    /// and the profile's own rules are skipped.
    pub fn with_strict_schema(strict_schema: bool) -> Self {
        Self::with_mode(ValidationMode::from_strict_flag(strict_schema))
    }
}

impl fmt::Display for GoogleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::CODE)
    }
}

impl CapProfile for GoogleProfile {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn documentation_url(&self) -> &'static str {
        Self::DOCUMENTATION_URL
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn check_errors(&self, alert: &Alert) -> Result<Vec<Reason>> {
        if !self.mode.runs_semantic_checks() {
            debug!(profile = Self::CODE, "strict schema mode, skipping error checks");
            return Ok(Vec::new());
        }
        let reasons = error_checks::check_errors(alert)?;
        debug!(
            profile = Self::CODE,
            identifier = %alert.identifier,
            infos = alert.info.len(),
            errors = reasons.len(),
            "error checks complete"
        );
        Ok(reasons)
    }

    fn check_recommendations(&self, alert: &Alert) -> Result<Vec<Reason>> {
        if !self.mode.runs_semantic_checks() {
            debug!(profile = Self::CODE, "strict schema mode, skipping recommendation checks");
            return Ok(Vec::new());
        }
        let reasons = recommendation_checks::check_recommendations(alert)?;
        debug!(
            profile = Self::CODE,
            identifier = %alert.identifier,
            infos = alert.info.len(),
            recommendations = reasons.len(),
            "recommendation checks complete"
        );
        Ok(reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixtures::valid_alert;
    use crate::reason::{ErrorType, RecommendationType};

    #[test]
    fn identity() {
        let profile = GoogleProfile::new();
        assert_eq!(profile.name(), "Google Public Alerts CAP v1.0");
        assert_eq!(profile.code(), "google");
        assert_eq!(profile.documentation_url(), "http://goo.gl/jgHTe");
        assert_eq!(profile.to_string(), "google");
        assert_eq!(profile.validation_mode(), ValidationMode::Extended);
    }

    #[test]
    fn check_bundles_both_taxonomies() {
        let mut alert = valid_alert();
        alert.info[0].web = None;
        alert.info[0].contact = None;
        let report = GoogleProfile::new().check(&alert).unwrap();
        assert_eq!(report.profile, "google");
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![Reason::new("/alert/info[0]", ErrorType::WebIsRequired)]
        );
        assert_eq!(
            report.recommendations,
            vec![Reason::new("/alert/info[0]", RecommendationType::ContactIsRecommended)]
        );
    }

    #[test]
    fn strict_schema_mode_skips_semantic_rules() {
        let mut alert = valid_alert();
        alert.info.clear();
        alert.sent = "2011-09-22T10:00:00Z".to_string();

        let strict = GoogleProfile::with_strict_schema(true);
        assert_eq!(strict.validation_mode(), ValidationMode::StrictSchemaOnly);
        let report = strict.check(&alert).unwrap();
        assert!(report.valid);
        assert!(report.recommendations.is_empty());

        let extended = GoogleProfile::with_strict_schema(false);
        let report = extended.check(&alert).unwrap();
        assert!(!report.valid);
        assert_eq!(report.recommendations.len(), 1);
    }

    #[test]
    fn usable_as_trait_object() {
        let profiles: Vec<Box<dyn CapProfile>> = vec![Box::new(GoogleProfile::new())];
        let report = profiles[0].check(&valid_alert()).unwrap();
        assert!(report.valid);
        assert!(report.recommendations.is_empty());
    }
}
