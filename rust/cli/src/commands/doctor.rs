//! Environment diagnostics command.
//!
//! The `doctor` command validates the local environment before a game:
//! whether the intent classifier will run its LLM tiers or keyword
//! heuristics only, whether the configuration resolves, and whether the
//! locale can render the results table. Results are reported in JSON.
//!
//! A missing LLM credential is NOT a failure: the game is fully playable
//! on heuristics. Only a broken configuration or locale fails the check.

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Represents a single diagnostic check result.
struct DoctorCheck {
    name: &'static str,
    ok: bool,
    detail: String,
    error: Option<String>,
}

impl DoctorCheck {
    /// Create a passing check result.
    fn ok(name: &'static str, detail: impl Into<String>) -> Self {
        DoctorCheck {
            name,
            ok: true,
            detail: detail.into(),
            error: None,
        }
    }

    /// Create a failing check result.
    fn fail(name: &'static str, detail: impl Into<String>, error: impl Into<String>) -> Self {
        DoctorCheck {
            name,
            ok: false,
            detail: detail.into(),
            error: Some(error.into()),
        }
    }

    /// Convert check result to JSON value.
    fn to_value(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            "status".into(),
            serde_json::Value::String(if self.ok { "ok" } else { "fail" }.into()),
        );
        map.insert(
            "detail".into(),
            serde_json::Value::String(self.detail.clone()),
        );
        if let Some(err) = &self.error {
            map.insert("error".into(), serde_json::Value::String(err.clone()));
        }
        serde_json::Value::Object(map)
    }
}

/// Report which classifier tiers will run. Informational; both modes pass.
fn check_classifier() -> DoctorCheck {
    match config::api_key() {
        Some(_) => DoctorCheck::ok(
            "classifier",
            "OPENAI_API_KEY is set; LLM tiers enabled with heuristic fallback",
        ),
        None => DoctorCheck::ok(
            "classifier",
            "OPENAI_API_KEY not set; input interpreted with keyword heuristics only",
        ),
    }
}

/// Resolve the configuration and surface any file/env problem.
fn check_config() -> DoctorCheck {
    match config::load_with_sources() {
        Ok(resolved) => DoctorCheck::ok(
            "config",
            format!("Configuration resolves (model: {})", resolved.config.model),
        ),
        Err(e) => DoctorCheck::fail(
            "config",
            "Configuration resolution attempt",
            format!("Config check failed: {}", e),
        ),
    }
}

/// Evaluate locale value for UTF-8 support; the results table uses
/// non-ASCII status glyphs.
fn check_locale() -> DoctorCheck {
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = std::env::var(key) {
            let lowered = value.to_ascii_lowercase();
            if lowered.contains("utf-8") || lowered.contains("utf8") {
                return DoctorCheck::ok(
                    "locale",
                    format!("{} reports UTF-8 locale ({})", key, value),
                );
            }
            return DoctorCheck::fail(
                "locale",
                format!("{} reports non-UTF-8 locale ({})", key, value),
                format!("Locale check failed: {}={} is not UTF-8", key, value),
            );
        }
    }
    DoctorCheck::ok("locale", "No locale variables set; assuming UTF-8")
}

/// Handle the doctor command - run environment diagnostics.
///
/// Outputs a JSON report of check results. Returns `Err(CliError::Config)`
/// if any check fails.
pub fn handle_doctor_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let checks = vec![check_classifier(), check_config(), check_locale()];

    let mut report = serde_json::Map::new();
    let mut ok_all = true;
    for check in checks {
        if !check.ok {
            ok_all = false;
            if let Some(msg) = &check.error {
                ui::write_error(err, msg)?;
            }
        }
        report.insert(check.name.to_string(), check.to_value());
    }

    let output = serde_json::json!({
        "checks": serde_json::Value::Object(report)
    });

    let json_output = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize doctor report: {}", e)))?;
    writeln!(out, "{}", json_output)?;

    if ok_all {
        Ok(())
    } else {
        Err(CliError::Config(
            "Environment diagnostics failed".to_string(),
        ))
    }
}
