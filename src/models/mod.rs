//! Shared data models for scan results and the rule catalog.

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// How risky a matched setting is. Display only; never combined or escalated.
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One occurrence of a catalog pattern in a scanned file's line.
pub struct Finding {
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    pub pattern: String,
    /// Raw line text, without the line terminator.
    pub content: String,
    pub severity: Severity,
}
