mod cli;
mod terminal;

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use capguard_core::config::load_dotenv;
use capguard_core::{Alert, OutputFormat};
use capguard_rules::{CapProfile, GoogleProfile, ProfileReport};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{CheckArgs, Cli, Command};
use crate::terminal::Terminal;

fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // .env values feed clap's `env` fallbacks, so load them before parsing.
    load_dotenv();
    match Cli::parse().command {
        Command::Check(args) => run_check(&args),
    }
}

fn run_check(args: &CheckArgs) -> Result<ExitCode> {
    let config = args.config();
    config.log_summary();

    let profile = GoogleProfile::with_strict_schema(config.strict_schema);
    info!(
        profile = %profile,
        mode = %profile.validation_mode(),
        files = args.files.len(),
        "Checking alerts"
    );

    let mut results = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let alert = load_alert(path)?;
        let mut report = profile
            .check(&alert)
            .with_context(|| format!("failed to check {}", path.display()))?;
        if !config.recommendations {
            report = report.without_recommendations();
        }
        debug!(
            file = %path.display(),
            valid = report.valid,
            errors = report.errors.len(),
            recommendations = report.recommendations.len(),
            "Checked alert"
        );
        results.push(FileReport {
            file: path.display().to_string(),
            report,
        });
    }

    match config.output {
        OutputFormat::Text => {
            let mut terminal = Terminal::stdout();
            for result in &results {
                terminal.print_report(&result.file, &result.report)?;
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    let failed = results.iter().filter(|r| !r.report.valid).count();
    info!(checked = results.len(), failed, "Done");
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// One checked input, as emitted by `--format json`.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    report: ProfileReport,
}

/// Read a JSON alert from `path`, or from stdin when `path` is `-`.
fn load_alert(path: &Path) -> Result<Alert> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read alert from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    Alert::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_alert_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sent": "2011-09-22T10:00:00-05:00", "msgType": "Alert", "info": []}}"#
        )
        .unwrap();

        let alert = load_alert(file.path()).unwrap();
        assert!(alert.info.is_empty());

        let report = GoogleProfile::new().check(&alert).unwrap();
        assert!(!report.valid);
        assert_eq!(report.errors[0].code(), "INFO_IS_REQUIRED");
    }

    #[test]
    fn load_alert_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_alert(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_alert(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
