// ABOUTME: Error types for task execution engine operations
// ABOUTME: Defines configuration and scheduling errors that abort a run

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Circular dependency detected among tasks: {tasks:?}")]
    CircularDependency { tasks: Vec<String> },

    #[error("Unknown dependencies referenced: {names:?}")]
    MissingDependencies { names: Vec<String> },

    #[error("Task not found: {name}")]
    TaskNotFound { name: String },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExecutionError>;
