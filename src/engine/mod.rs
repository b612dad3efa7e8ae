// ABOUTME: Task execution engine module for the cairn automation engine
// ABOUTME: Handles dependency resolution, task execution, and run coordination

pub mod coordinator;
pub mod error;
pub mod executor;
pub mod result;
pub mod runner;
pub mod scheduler;
pub mod task;

pub use coordinator::{DependencyPolicy, ExecutionCoordinator};
pub use error::{ExecutionError, Result};
pub use executor::TaskExecutor;
pub use result::{ExecutionResult, RunReport, RunSummary, TaskStatus};
pub use runner::{CommandRunner, RunOutcome, ShellRunner};
pub use scheduler::{DependencyGraph, DependencyScheduler};
pub use task::Task;
