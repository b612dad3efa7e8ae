// ABOUTME: Task executor running a single task with bounded retries
// ABOUTME: Classifies each attempt and resolves the working directory

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use super::result::ExecutionResult;
use super::runner::{CommandRunner, RunOutcome, ShellRunner};
use super::task::Task;

/// Executes individual tasks. Holds no state across calls beyond the
/// configured workspace root and the run-command capability.
pub struct TaskExecutor {
    runner: Arc<dyn CommandRunner>,
    workspace: Option<PathBuf>,
}

impl TaskExecutor {
    pub fn new(workspace: Option<PathBuf>) -> Self {
        Self {
            runner: Arc::new(ShellRunner::new()),
            workspace,
        }
    }

    pub fn with_runner(runner: Arc<dyn CommandRunner>, workspace: Option<PathBuf>) -> Self {
        Self { runner, workspace }
    }

    /// Execute one task with up to `retry_count + 1` attempts, one timeout
    /// bound per attempt. Returns on the first success; after the budget is
    /// spent, fails with the last recorded error text.
    pub async fn execute(&self, task: &Task) -> ExecutionResult {
        let working_dir = self.working_dir();
        let max_attempts = task.max_attempts();
        let mut last_error = String::new();

        for attempt in 0..max_attempts {
            info!(
                "Executing task {} (attempt {}/{})",
                task.name,
                attempt + 1,
                max_attempts
            );

            let outcome = self
                .runner
                .run(&task.command, task.timeout, working_dir.as_deref())
                .await;

            match outcome {
                RunOutcome::Completed {
                    exit_code: 0,
                    stdout,
                    ..
                } => {
                    return ExecutionResult::success(&task.name, stdout.trim_end(), attempt);
                }
                RunOutcome::Completed {
                    exit_code, stderr, ..
                } => {
                    last_error = if stderr.trim().is_empty() {
                        format!("Command exited with code {}", exit_code)
                    } else {
                        stderr.trim_end().to_string()
                    };
                    warn!(
                        "Task {} failed on attempt {}: {}",
                        task.name,
                        attempt + 1,
                        last_error
                    );
                }
                RunOutcome::TimedOut { after } => {
                    last_error = format!("Task timed out after {}s", after.as_secs());
                    warn!(
                        "Task {} timed out on attempt {} after {:?}",
                        task.name,
                        attempt + 1,
                        after
                    );
                }
                RunOutcome::Error { message } => {
                    last_error = message;
                    warn!(
                        "Task {} errored on attempt {}: {}",
                        task.name,
                        attempt + 1,
                        last_error
                    );
                }
            }
        }

        ExecutionResult::failure(&task.name, last_error, max_attempts)
    }

    /// Immediate success without invoking the run capability. No retries,
    /// no timing.
    pub fn dry_run(&self, task: &Task) -> ExecutionResult {
        ExecutionResult::success(
            &task.name,
            format!("[DRY RUN] Would execute: {}", task.command),
            0,
        )
    }

    /// Commands run in `<workspace>/tasks` when that directory exists on
    /// disk; otherwise, and whenever no workspace is configured, the
    /// caller's default working directory is used.
    fn working_dir(&self) -> Option<PathBuf> {
        let root = self.workspace.as_ref()?;
        let tasks_dir = root.join("tasks");
        if tasks_dir.is_dir() {
            Some(tasks_dir)
        } else {
            None
        }
    }

    pub fn workspace(&self) -> Option<&Path> {
        self.workspace.as_deref()
    }
}
