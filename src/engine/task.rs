// ABOUTME: Task model for the automation engine
// ABOUTME: Defines the immutable description of a single unit of work

use std::time::Duration;

/// A named unit of work with a command and declared dependency names.
///
/// Tasks are immutable after construction. The name doubles as the graph
/// node key and the task-map key, so it must be unique within one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub command: String,
    pub dependencies: Vec<String>,
    /// Per-attempt bound; `None` means unbounded.
    pub timeout: Option<Duration>,
    /// Additional attempts allowed after the first failure.
    pub retry_count: u32,
    /// Disabled tasks are skipped during execution but still participate
    /// in dependency ordering.
    pub enabled: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            dependencies: Vec::new(),
            timeout: None,
            retry_count: 1,
            enabled: true,
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retries(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Total attempts the executor may make for this task.
    pub fn max_attempts(&self) -> u32 {
        self.retry_count + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("backup", "tar czf backup.tar.gz data/")
            .with_dependencies(["prepare"])
            .with_timeout(Duration::from_secs(30))
            .with_retries(2);

        assert_eq!(task.name, "backup");
        assert_eq!(task.dependencies, vec!["prepare"]);
        assert_eq!(task.timeout, Some(Duration::from_secs(30)));
        assert_eq!(task.retry_count, 2);
        assert!(task.enabled);
        assert_eq!(task.max_attempts(), 3);
    }

    #[test]
    fn test_task_defaults() {
        let task = Task::new("noop", "true");
        assert!(task.dependencies.is_empty());
        assert_eq!(task.timeout, None);
        assert_eq!(task.retry_count, 1);
        assert_eq!(task.max_attempts(), 2);
    }

    #[test]
    fn test_disabled_task() {
        let task = Task::new("noop", "true").disabled();
        assert!(!task.enabled);
    }
}
