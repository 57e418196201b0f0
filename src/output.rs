//! Output rendering for scan findings and diagnostics.
//!
//! Supports `text` (default) and `json` outputs. Text lines follow
//! `[severity] file:line - pattern` with the raw line indented below.

use crate::error::ScanError;
use crate::models::{Finding, Severity};
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Rendering selected by `--json` or the `output` config key.
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

fn severity_tag(sev: Severity, color: bool) -> String {
    let tag = format!("[{}]", sev);
    if !color {
        return tag;
    }
    match sev {
        Severity::High => tag.red().bold().to_string(),
        Severity::Medium => tag.yellow().bold().to_string(),
        Severity::Low => tag.blue().bold().to_string(),
    }
}

/// Render findings as text (pure, for testing).
pub fn render_text(findings: &[Finding], color: bool) -> String {
    let mut out = String::new();
    for f in findings {
        out.push_str(&format!(
            "{} {}:{} - {}\n  {}\n",
            severity_tag(f.severity, color),
            f.file,
            f.line,
            f.pattern,
            f.content
        ));
    }
    out
}

/// Compose the pretty JSON array (2-space indent) of findings.
pub fn compose_findings_json(findings: &[Finding]) -> Result<String, ScanError> {
    Ok(serde_json::to_string_pretty(findings)?)
}

/// Print findings in the requested mode. A JSON encoding failure is
/// returned instead of printing anything.
pub fn print_findings(findings: &[Finding], output: OutputMode) -> Option<ScanError> {
    match output {
        OutputMode::Json => match compose_findings_json(findings) {
            Ok(s) => {
                println!("{}", s);
                None
            }
            Err(e) => Some(e),
        },
        OutputMode::Text => {
            let color = use_colors(std::io::stdout().is_terminal());
            print!("{}", render_text(findings, color));
            None
        }
    }
}

/// Report non-fatal errors.
///
/// Text mode writes them to stdout in plain form. JSON mode sends them to
/// stderr so stdout stays a single JSON document.
pub fn print_diagnostics(errors: &[ScanError], output: OutputMode) {
    for e in errors {
        match output {
            OutputMode::Text => println!("{}", e),
            OutputMode::Json => eprintln!("{} {}", crate::utils::error_prefix(), e),
        }
    }
}
