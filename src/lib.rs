// ABOUTME: Main library module for the cairn task automation engine
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod engine;
pub mod parser;
pub mod reporting;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use engine::{
    DependencyPolicy, DependencyScheduler, ExecutionCoordinator, ExecutionResult, RunReport,
    Task, TaskExecutor, TaskStatus,
};
pub use parser::{Manifest, TaskEntry};
pub use reporting::ExecutionReporter;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
