// ABOUTME: Run-command capability used by the task executor
// ABOUTME: Defines the runner contract and the shell-backed implementation

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Outcome of a single command attempt.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Completed {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    TimedOut {
        after: Duration,
    },
    /// Spawn failure or any other unexpected error from the run capability.
    Error {
        message: String,
    },
}

/// Contract for invoking an external command: command string, optional
/// per-attempt timeout, optional working directory in; captured output,
/// error text, and exit status out.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        command: &str,
        timeout: Option<Duration>,
        working_dir: Option<&Path>,
    ) -> RunOutcome;
}

/// Runs commands through a shell interpreter (`<shell> -c <command>`).
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            shell: default_shell(),
        }
    }

    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_shell() -> String {
    "/bin/sh".to_string()
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(
        &self,
        command: &str,
        limit: Option<Duration>,
        working_dir: Option<&Path>,
    ) -> RunOutcome {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        debug!("Running command via {}: {}", self.shell, command);

        let output = match limit {
            Some(limit) => match timeout(limit, cmd.output()).await {
                Ok(result) => result,
                Err(_) => return RunOutcome::TimedOut { after: limit },
            },
            None => cmd.output().await,
        };

        match output {
            Ok(output) => RunOutcome::Completed {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            Err(e) => RunOutcome::Error {
                message: format!("Failed to execute: {}", e),
            },
        }
    }
}
