// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for building and writing test manifests

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestManifestBuilder {
    name: String,
    tasks: Vec<Value>,
}

impl TestManifestBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn add_task(mut self, entry: Value) -> Self {
        self.tasks.push(entry);
        self
    }

    pub fn add_echo_task(self, name: &str, message: &str) -> Self {
        let command = format!("echo {}", message);
        self.add_task(json!({
            "name": name,
            "command": command,
            "dependencies": [],
            "options": {"retry_count": 0}
        }))
    }

    pub fn add_dependent_task(self, name: &str, command: &str, dependencies: Vec<&str>) -> Self {
        self.add_task(json!({
            "name": name,
            "command": command,
            "dependencies": dependencies,
            "options": {"retry_count": 0}
        }))
    }

    pub fn add_failing_task(self, name: &str) -> Self {
        self.add_task(json!({
            "name": name,
            "command": "echo failing >&2; exit 1",
            "dependencies": [],
            "options": {"retry_count": 0}
        }))
    }

    pub fn add_retry_task(self, name: &str, command: &str, retry_count: u32) -> Self {
        self.add_task(json!({
            "name": name,
            "command": command,
            "dependencies": [],
            "options": {"retry_count": retry_count}
        }))
    }

    pub fn add_timeout_task(self, name: &str, sleep_secs: u32, timeout_secs: u64) -> Self {
        let command = format!("sleep {}", sleep_secs);
        self.add_task(json!({
            "name": name,
            "command": command,
            "dependencies": [],
            "timeout": timeout_secs,
            "options": {"retry_count": 0}
        }))
    }

    pub fn add_disabled_task(self, name: &str) -> Self {
        self.add_task(json!({
            "name": name,
            "command": "echo disabled",
            "dependencies": [],
            "enabled": false,
            "options": {"retry_count": 0}
        }))
    }

    pub fn to_json(&self) -> String {
        json!({
            "name": self.name,
            "tasks": self.tasks,
        })
        .to_string()
    }

    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_json())
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn manifest_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}.json", name))
    }

    pub fn create_manifest_file(&self, name: &str, builder: &TestManifestBuilder) -> PathBuf {
        let manifest_file = self.manifest_file(name);
        builder
            .write_to_file(&manifest_file)
            .expect("Failed to write manifest file");
        manifest_file
    }

    /// Shell command that appends its argument to a log file, for asserting
    /// execution order across tasks.
    pub fn append_command(&self, marker: &str) -> String {
        format!(
            "echo {} >> {}",
            marker,
            self.path().join("order.log").display()
        )
    }

    pub fn read_order_log(&self) -> Vec<String> {
        let path = self.path().join("order.log");
        if !path.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(path)
            .expect("Failed to read order log")
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    /// Shell command that fails until its marker file exists, creating the
    /// marker on the first attempt. Fails exactly once, then succeeds.
    pub fn fail_once_command(&self, marker: &str) -> String {
        let marker_path = self.path().join(marker);
        format!(
            "if [ -e {path} ]; then echo recovered; else touch {path}; echo first attempt >&2; exit 1; fi",
            path = marker_path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_builder_output() {
        let builder = TestManifestBuilder::new("build_test")
            .add_echo_task("one", "hello")
            .add_dependent_task("two", "echo world", vec!["one"]);

        let json = builder.to_json();
        assert!(json.contains("build_test"));
        assert!(json.contains("\"one\""));
        assert!(json.contains("\"dependencies\":[\"one\"]"));
    }

    #[test]
    fn test_environment_setup() {
        let env = TestEnvironment::new();
        assert!(env.path().exists());
        assert!(env
            .manifest_file("sample")
            .to_string_lossy()
            .contains("sample.json"));
    }
}
