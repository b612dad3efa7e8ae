// ABOUTME: Task execution result types and run-level aggregation
// ABOUTME: Defines result structures for individual tasks and a complete run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Running,
    Success,
    Failed,
    Skipped,
}

/// Outcome of one task's execution. Created once per attempted task and
/// appended to the run's result list in attempt order. Only
/// `execution_time` is filled in afterwards, by the coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub task_name: String,
    pub status: TaskStatus,
    pub output: String,
    pub error: String,
    pub execution_time: Duration,
    pub retries_used: u32,
    pub timestamp: DateTime<Utc>,
}

impl ExecutionResult {
    pub fn success(task_name: impl Into<String>, output: impl Into<String>, retries_used: u32) -> Self {
        Self {
            task_name: task_name.into(),
            status: TaskStatus::Success,
            output: output.into(),
            error: String::new(),
            execution_time: Duration::ZERO,
            retries_used,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(task_name: impl Into<String>, error: impl Into<String>, retries_used: u32) -> Self {
        Self {
            task_name: task_name.into(),
            status: TaskStatus::Failed,
            output: String::new(),
            error: error.into(),
            execution_time: Duration::ZERO,
            retries_used,
            timestamp: Utc::now(),
        }
    }

    pub fn skipped(task_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            status: TaskStatus::Skipped,
            output: String::new(),
            error: reason.into(),
            execution_time: Duration::ZERO,
            retries_used: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status == TaskStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == TaskStatus::Failed
    }
}

/// Aggregated outcome of one coordinator pass over a task set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub manifest_name: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub results: Vec<ExecutionResult>,
    pub summary: RunSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunSummary {
    pub total_tasks: usize,
    pub successful_tasks: usize,
    pub failed_tasks: usize,
    pub skipped_tasks: usize,
    pub average_execution_time: Duration,
    /// Percentage of attempted tasks (skipped excluded) that succeeded.
    pub success_rate: f64,
}

impl RunReport {
    pub fn new(
        run_id: String,
        manifest_name: Option<String>,
        start_time: DateTime<Utc>,
        results: Vec<ExecutionResult>,
    ) -> Self {
        let summary = RunSummary::from_results(&results);
        Self {
            run_id,
            manifest_name,
            start_time,
            end_time: Utc::now(),
            results,
            summary,
        }
    }

    pub fn get_result(&self, task_name: &str) -> Option<&ExecutionResult> {
        self.results.iter().find(|r| r.task_name == task_name)
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.is_failed())
    }

    pub fn failed_results(&self) -> Vec<&ExecutionResult> {
        self.results.iter().filter(|r| r.is_failed()).collect()
    }
}

impl RunSummary {
    pub fn from_results(results: &[ExecutionResult]) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|r| r.succeeded()).count();
        let failed = results.iter().filter(|r| r.is_failed()).count();
        let skipped = results
            .iter()
            .filter(|r| r.status == TaskStatus::Skipped)
            .count();

        let average_execution_time = if total > 0 {
            let total_time: Duration = results.iter().map(|r| r.execution_time).sum();
            total_time / total as u32
        } else {
            Duration::ZERO
        };

        let attempted = successful + failed;
        let success_rate = if attempted > 0 {
            (successful as f64 / attempted as f64) * 100.0
        } else {
            0.0
        };

        Self {
            total_tasks: total,
            successful_tasks: successful,
            failed_tasks: failed,
            skipped_tasks: skipped,
            average_execution_time,
            success_rate,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::Running => write!(f, "running"),
            TaskStatus::Success => write!(f, "success"),
            TaskStatus::Failed => write!(f, "failed"),
            TaskStatus::Skipped => write!(f, "skipped"),
        }
    }
}
