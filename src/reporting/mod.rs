// ABOUTME: Reporting module for run results
// ABOUTME: Exports the execution reporter

pub mod reporter;

pub use reporter::ExecutionReporter;
