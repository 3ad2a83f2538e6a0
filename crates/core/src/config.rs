use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn env_bool(key: &str, default: bool) -> Result<bool> {
    match env_opt(key) {
        None => Ok(default),
        Some(v) => parse_bool(&v).ok_or_else(|| {
            CoreError::Config(format!("{key} must be a boolean, got '{v}'"))
        }),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ── Output format ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CoreError::Config(format!(
                "output format must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Skip profile semantics and rely on structural schema validation only.
    pub strict_schema: bool,
    /// Whether advisory findings are reported next to errors.
    pub recommendations: bool,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_schema: false,
            recommendations: true,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    ///
    /// - `CAPGUARD_STRICT_SCHEMA` (default `false`)
    /// - `CAPGUARD_OUTPUT`: `text` or `json` (default `text`)
    ///
    /// Recommendations stay on; only the CLI can turn them off.
    pub fn from_env() -> Result<Self> {
        let output = match env_opt("CAPGUARD_OUTPUT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self {
            strict_schema: env_bool("CAPGUARD_STRICT_SCHEMA", false)?,
            recommendations: true,
            output,
        })
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!(
            strict_schema = self.strict_schema,
            recommendations = self.recommendations,
            output = %self.output,
            "Config loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" yes "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    // The only test in this crate that touches these variables.
    #[test]
    fn from_env_reads_strict_schema_and_output() {
        env::set_var("CAPGUARD_STRICT_SCHEMA", "yes");
        env::set_var("CAPGUARD_OUTPUT", "JSON");
        let config = Config::from_env().unwrap();
        assert!(config.strict_schema);
        assert!(config.recommendations);
        assert_eq!(config.output, OutputFormat::Json);

        env::set_var("CAPGUARD_STRICT_SCHEMA", "sometimes");
        assert!(matches!(Config::from_env(), Err(CoreError::Config(_))));

        env::remove_var("CAPGUARD_STRICT_SCHEMA");
        env::remove_var("CAPGUARD_OUTPUT");
        let config = Config::from_env().unwrap();
        assert!(!config.strict_schema);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn default_config_runs_extended_checks() {
        let config = Config::default();
        assert!(!config.strict_schema);
        assert!(config.recommendations);
        assert_eq!(config.output, OutputFormat::Text);
    }
}
