// ABOUTME: Execution reporter formatting run results for display
// ABOUTME: Renders text summaries and serializes full reports to JSON

use std::path::Path;

use crate::engine::{ExecutionResult, RunReport, TaskStatus};

pub struct ExecutionReporter;

impl ExecutionReporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the run summary block: counts, average time, success rate.
    pub fn render_summary(&self, report: &RunReport) -> String {
        let summary = &report.summary;
        let mut out = String::new();

        out.push_str("EXECUTION SUMMARY\n");
        if let Some(ref name) = report.manifest_name {
            out.push_str(&format!("  Manifest: {}\n", name));
        }
        out.push_str(&format!("  Run ID: {}\n", report.run_id));
        out.push_str(&format!("  Total Tasks: {}\n", summary.total_tasks));
        out.push_str(&format!("  Successful: {}\n", summary.successful_tasks));
        out.push_str(&format!("  Failed: {}\n", summary.failed_tasks));
        if summary.skipped_tasks > 0 {
            out.push_str(&format!("  Skipped: {}\n", summary.skipped_tasks));
        }
        out.push_str(&format!(
            "  Average Time: {:.2}s\n",
            summary.average_execution_time.as_secs_f64()
        ));
        out.push_str(&format!("  Success Rate: {:.0}%\n", summary.success_rate));

        out
    }

    /// One line per result: status glyph, name, status, elapsed time.
    pub fn format_result(&self, result: &ExecutionResult) -> String {
        let glyph = match result.status {
            TaskStatus::Success => "✓",
            TaskStatus::Skipped => "-",
            _ => "✗",
        };
        format!(
            "{} {}: {} ({:.1}s)",
            glyph,
            result.task_name,
            result.status,
            result.execution_time.as_secs_f64()
        )
    }

    /// Per-result lines followed by error text for every failed task.
    pub fn render_results(&self, report: &RunReport) -> String {
        let mut out = String::new();

        for result in &report.results {
            out.push_str(&self.format_result(result));
            out.push('\n');
            if result.is_failed() && !result.error.is_empty() {
                out.push_str(&format!("    error: {}\n", result.error));
            }
        }

        out
    }

    /// Serialize the full report as pretty-printed JSON.
    pub fn to_json(&self, report: &RunReport) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }

    /// Write the JSON report to a file.
    pub fn write_json(&self, report: &RunReport, path: &Path) -> crate::Result<()> {
        let json = self.to_json(report)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for ExecutionReporter {
    fn default() -> Self {
        Self::new()
    }
}
