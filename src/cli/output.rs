//! Output formatting helpers for CLI commands

use crate::report::{detect_issues, display_name, Issue, Severity, VerificationResult};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// View model for result display
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResultView {
    pub model: String,
    pub endpoint: String,
    pub verified: bool,
    pub exists: bool,
    pub responsive: bool,
    pub overloaded: bool,
    pub latency_ms: f64,
    pub overall: f64,
    pub code: f64,
    pub responsiveness: f64,
    pub reliability: f64,
    pub error: String,
}

impl From<&VerificationResult> for ResultView {
    fn from(result: &VerificationResult) -> Self {
        Self {
            model: display_name(result),
            endpoint: result.model_info.endpoint.clone(),
            verified: result.verified(),
            exists: result.availability.exists,
            responsive: result.availability.responsive,
            overloaded: result.availability.overloaded,
            latency_ms: result.availability.latency_ms,
            overall: result.scores.overall,
            code: result.scores.code_capability,
            responsiveness: result.scores.responsiveness,
            reliability: result.scores.reliability,
            error: result.availability.error.clone(),
        }
    }
}

/// Format verification results as a table
pub fn format_results_table(results: &[VerificationResult]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Model", "Status", "Overall", "Code", "Resp", "Rel", "Latency", "Error",
    ]);

    for result in results {
        let view = ResultView::from(result);
        let status = if !view.exists {
            "Missing".red().to_string()
        } else if !view.responsive {
            "Unresponsive".red().to_string()
        } else if view.overloaded {
            "Overloaded".yellow().to_string()
        } else if view.verified {
            "Verified".green().to_string()
        } else {
            "Unverified".yellow().to_string()
        };

        table.add_row(vec![
            Cell::new(&view.model),
            Cell::new(status),
            Cell::new(format!("{:.1}", view.overall)),
            Cell::new(format!("{:.1}", view.code)),
            Cell::new(format!("{:.1}", view.responsiveness)),
            Cell::new(format!("{:.1}", view.reliability)),
            Cell::new(format!("{:.0}ms", view.latency_ms)),
            Cell::new(&view.error),
        ]);
    }

    table.to_string()
}

/// Format verification results (and the issues detected on them) as JSON
pub fn format_results_json(results: &[VerificationResult]) -> String {
    let issues = detect_issues(results);
    serde_json::to_string_pretty(&json!({ "results": results, "issues": issues }))
        .unwrap_or_else(|_| "{}".to_string())
}

/// Format detected issues, one colored line each
pub fn format_issues(issues: &[Issue]) -> String {
    let mut lines = Vec::with_capacity(issues.len());
    for issue in issues {
        let severity = match issue.severity {
            Severity::Critical => "critical".red().bold().to_string(),
            Severity::High => "high".red().to_string(),
            Severity::Medium => "medium".yellow().to_string(),
            Severity::Low => "low".cyan().to_string(),
        };
        lines.push(format!("[{severity}] {}: {}", issue.model, issue.message));
    }
    lines.join("\n")
}

/// Format a model id list as a table
pub fn format_models_table(endpoint: &str, models: &[String]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Model", "Endpoint"]);

    for model in models {
        table.add_row(vec![Cell::new(model), Cell::new(endpoint)]);
    }

    table.to_string()
}

/// Format a model id list as JSON
pub fn format_models_json(endpoint: &str, models: &[String]) -> String {
    serde_json::to_string_pretty(&json!({ "endpoint": endpoint, "models": models }))
        .unwrap_or_else(|_| "{}".to_string())
}
