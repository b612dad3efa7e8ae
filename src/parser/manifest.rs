// ABOUTME: Manifest data structures and JSON parsing
// ABOUTME: Converts task descriptors from configuration into engine tasks

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::{Result, ValidationError};
use crate::engine::Task;

/// A parsed task configuration file: a list of task descriptors with an
/// optional manifest-level name and description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEntry {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Per-attempt timeout in whole seconds.
    #[serde(default)]
    pub timeout: Option<u64>,
    #[serde(default)]
    pub options: TaskOptions,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOptions {
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
}

fn default_enabled() -> bool {
    true
}

fn default_retry_count() -> u32 {
    1
}

impl Default for TaskOptions {
    fn default() -> Self {
        Self {
            retry_count: default_retry_count(),
        }
    }
}

impl Manifest {
    /// Parse a manifest from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(content)?;
        manifest.validate_structure()?;
        Ok(manifest)
    }

    /// Validate basic structure. An empty task list is allowed; a run over
    /// it simply executes nothing.
    fn validate_structure(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();

        for entry in &self.tasks {
            if entry.name.trim().is_empty() {
                return Err(ValidationError::InvalidTaskConfig {
                    task: entry.name.clone(),
                    reason: "task name cannot be empty".to_string(),
                }
                .into());
            }

            if !seen.insert(entry.name.clone()) {
                return Err(ValidationError::DuplicateTask {
                    task: entry.name.clone(),
                }
                .into());
            }

            if entry.command.trim().is_empty() {
                return Err(ValidationError::InvalidTaskConfig {
                    task: entry.name.clone(),
                    reason: "command cannot be empty".to_string(),
                }
                .into());
            }

            if entry.timeout == Some(0) {
                return Err(ValidationError::InvalidTaskConfig {
                    task: entry.name.clone(),
                    reason: "timeout must be greater than 0".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Convert descriptors into engine tasks, preserving manifest order.
    /// The resulting map order is the scheduler's tie-break among
    /// independent tasks.
    pub fn into_tasks(&self) -> IndexMap<String, Task> {
        self.tasks
            .iter()
            .map(|entry| {
                let mut task = Task::new(&entry.name, &entry.command)
                    .with_dependencies(entry.dependencies.clone())
                    .with_retries(entry.options.retry_count);
                if let Some(secs) = entry.timeout {
                    task = task.with_timeout(Duration::from_secs(secs));
                }
                if !entry.enabled {
                    task = task.disabled();
                }
                (entry.name.clone(), task)
            })
            .collect()
    }

    pub fn task_names(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.name.clone()).collect()
    }
}
