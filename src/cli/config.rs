// ABOUTME: Configuration management for the cairn application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workspace root; tasks run in `<workspace>/tasks` when it exists.
    #[serde(default)]
    pub workspace: Option<PathBuf>,

    #[serde(default = "default_shell")]
    pub shell: String,

    #[serde(default)]
    pub skip_failed_dependents: bool,

    #[serde(default, with = "humantime_serde")]
    pub pause_between_tasks: Option<Duration>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_shell() -> String {
    "/bin/sh".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: None,
            shell: default_shell(),
            skip_failed_dependents: false,
            pause_between_tasks: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".cairn").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        let possible_paths = [
            PathBuf::from("cairn.yaml"),
            PathBuf::from("cairn.yml"),
            PathBuf::from(".cairn.yaml"),
            PathBuf::from(".cairn.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        PathBuf::from("cairn.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(workspace) = std::env::var("TASK_WORKSPACE") {
            if !workspace.is_empty() {
                self.workspace = Some(PathBuf::from(workspace));
            }
        }
        if let Ok(shell) = std::env::var("CAIRN_SHELL") {
            self.shell = shell;
        }
        if let Ok(level) = std::env::var("CAIRN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CAIRN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.workspace, None);
        assert_eq!(config.shell, "/bin/sh");
        assert!(!config.skip_failed_dependents);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("cairn.yaml");

        let config_content = r#"
workspace: /srv/automation
skip_failed_dependents: true
pause_between_tasks: 500ms
logging:
  level: debug
  format: compact
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.workspace, Some(PathBuf::from("/srv/automation")));
        assert!(config.skip_failed_dependents);
        assert_eq!(
            config.pause_between_tasks,
            Some(Duration::from_millis(500))
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = Config::load(Some(temp_dir.path().join("absent.yaml"))).unwrap();
        assert_eq!(config.shell, "/bin/sh");
    }
}
