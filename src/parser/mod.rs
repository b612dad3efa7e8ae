// ABOUTME: Parser module for JSON task manifests
// ABOUTME: Exports manifest parsing, validation, and data structures

pub mod error;
pub mod manifest;

pub use error::{ParserError, Result, ValidationError};
pub use manifest::{Manifest, TaskEntry, TaskOptions};
