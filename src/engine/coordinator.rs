// ABOUTME: Execution coordinator driving one full scheduler-then-executor pass
// ABOUTME: Owns the canonical result list and per-run dependency policy

use chrono::Utc;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use super::error::{ExecutionError, Result};
use super::executor::TaskExecutor;
use super::result::{ExecutionResult, RunReport};
use super::scheduler::DependencyScheduler;
use super::task::Task;

/// How a task whose declared dependency failed (or was skipped) is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyPolicy {
    /// Dependencies affect ordering only; every enabled task is attempted
    /// regardless of prior failures.
    #[default]
    OrderOnly,
    /// Dependents of a failed or skipped task are skipped and recorded as
    /// such. Skips cascade.
    SkipOnFailure,
}

pub struct ExecutionCoordinator {
    scheduler: DependencyScheduler,
    executor: TaskExecutor,
    policy: DependencyPolicy,
    pause_between_tasks: Option<Duration>,
    dry_run: bool,
}

impl ExecutionCoordinator {
    pub fn new(executor: TaskExecutor) -> Self {
        Self {
            scheduler: DependencyScheduler::new(),
            executor,
            policy: DependencyPolicy::default(),
            pause_between_tasks: None,
            dry_run: false,
        }
    }

    pub fn with_policy(mut self, policy: DependencyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Optional inter-task pause for display pacing. Never applied after
    /// the final task.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause_between_tasks = Some(pause);
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    pub fn scheduler(&self) -> &DependencyScheduler {
        &self.scheduler
    }

    /// Drive one full pass: validate configuration, resolve the execution
    /// order, run each enabled task in order, and aggregate results.
    ///
    /// Configuration errors abort before anything executes. Per-task
    /// failures are captured in the result list and never stop the run.
    pub async fn run(
        &self,
        tasks: &IndexMap<String, Task>,
        manifest_name: Option<String>,
    ) -> Result<RunReport> {
        let missing = self.scheduler.validate_dependencies(tasks);
        if !missing.is_empty() {
            return Err(ExecutionError::MissingDependencies { names: missing });
        }

        let order = self.scheduler.resolve_order(tasks)?;
        let chains = self.scheduler.count_dependency_chains(tasks);

        let run_id = uuid::Uuid::new_v4().to_string();
        let start_time = Utc::now();

        info!(
            "Starting run {} with {} tasks in {} dependency chains",
            run_id,
            tasks.len(),
            chains
        );

        let mut results: Vec<ExecutionResult> = Vec::new();
        let mut blocked: HashSet<String> = HashSet::new();
        let mut remaining = order.len();

        for task_name in &order {
            remaining -= 1;
            let task = tasks
                .get(task_name)
                .ok_or_else(|| ExecutionError::TaskNotFound {
                    name: task_name.clone(),
                })?;

            if !task.enabled {
                debug!("Task {} is disabled, skipping", task_name);
                continue;
            }

            if self.policy == DependencyPolicy::SkipOnFailure {
                if let Some(dep) = task.dependencies.iter().find(|d| blocked.contains(*d)) {
                    warn!("Skipping task {}: dependency '{}' did not succeed", task_name, dep);
                    blocked.insert(task_name.clone());
                    results.push(ExecutionResult::skipped(
                        task_name,
                        format!("Dependency '{}' did not succeed", dep),
                    ));
                    continue;
                }
            }

            let started = Instant::now();
            let mut result = if self.dry_run {
                self.executor.dry_run(task)
            } else {
                self.executor.execute(task).await
            };
            result.execution_time = started.elapsed();

            info!(
                "Task {} finished with status {} in {:?}",
                task_name, result.status, result.execution_time
            );

            if result.is_failed() {
                blocked.insert(task_name.clone());
            }
            results.push(result);

            if remaining > 0 {
                if let Some(pause) = self.pause_between_tasks {
                    sleep(pause).await;
                }
            }
        }

        let report = RunReport::new(run_id, manifest_name, start_time, results);
        info!(
            "Run completed: {}/{} tasks succeeded",
            report.summary.successful_tasks, report.summary.total_tasks
        );

        Ok(report)
    }
}
