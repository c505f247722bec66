//! Issue records for downstream detectors.
//!
//! The detector pipeline itself lives outside this crate; the severity
//! vocabulary, the consumer-level mapping, and a first-pass sweep over a
//! result list are provided here so every consumer agrees on them.

use super::types::VerificationResult;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity of a detected issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

/// Consumer-side level an issue is reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLevel {
    Critical,
    Error,
    Warning,
    Info,
}

impl From<Severity> for IssueLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => IssueLevel::Critical,
            Severity::High => IssueLevel::Error,
            Severity::Medium => IssueLevel::Warning,
            Severity::Low => IssueLevel::Info,
        }
    }
}

/// Map a raw severity string to a consumer level. Unknown strings land at
/// Info rather than failing.
pub fn level_for(raw: &str) -> IssueLevel {
    raw.parse::<Severity>()
        .map(IssueLevel::from)
        .unwrap_or(IssueLevel::Info)
}

/// One detected issue on one result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub model: String,
    pub endpoint: String,
    pub severity: Severity,
    pub message: String,
}

/// Sweep a result list for the standing issue kinds.
pub fn detect_issues(results: &[VerificationResult]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for result in results {
        let model = result.model_info.id.clone();
        let endpoint = result.model_info.endpoint.clone();
        if !result.availability.exists {
            issues.push(Issue {
                model,
                endpoint,
                severity: Severity::Critical,
                message: format!("model not advertised: {}", result.availability.error),
            });
            continue;
        }
        if !result.availability.responsive {
            issues.push(Issue {
                model,
                endpoint,
                severity: Severity::High,
                message: format!("model unresponsive: {}", result.availability.error),
            });
            continue;
        }
        if result.availability.overloaded {
            issues.push(Issue {
                model: model.clone(),
                endpoint: endpoint.clone(),
                severity: Severity::Medium,
                message: "model overloaded under concurrent load".to_string(),
            });
        }
        if result.scores.overall < 30.0 {
            issues.push(Issue {
                model,
                endpoint,
                severity: Severity::Low,
                message: format!("low overall score: {:.1}", result.scores.overall),
            });
        }
    }
    issues
}
