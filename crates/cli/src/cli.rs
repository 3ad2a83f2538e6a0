use std::path::PathBuf;

use capguard_core::{Config, OutputFormat};
use clap::{Args, Parser, Subcommand};

/// Check CAP alerts against the Google Public Alerts profile.
#[derive(Parser, Debug)]
#[command(name = "capguard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check alert documents and report errors and recommendations.
    ///
    /// Each input is a JSON-serialized alert document that has already passed
    /// structural schema validation. Exits with status 1 when any alert has
    /// blocking errors.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Alert files to check. Use `-` to read one alert from stdin.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only XSD schema validation applies; skip profile rules
    #[arg(long, env = "CAPGUARD_STRICT_SCHEMA")]
    pub strict: bool,

    /// Output format: text or json
    #[arg(long, env = "CAPGUARD_OUTPUT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report advisory findings next to errors (default)
    #[arg(long, overrides_with = "no_recommendations")]
    pub recommendations: bool,

    /// Report blocking errors only
    #[arg(long, overrides_with = "recommendations")]
    pub no_recommendations: bool,
}

impl CheckArgs {
    /// Resolved settings for this run. The last of `--recommendations` and
    /// `--no-recommendations` wins.
    pub fn config(&self) -> Config {
        Config {
            strict_schema: self.strict,
            recommendations: self.recommendations || !self.no_recommendations,
            output: self.format,
        }
    }
}
