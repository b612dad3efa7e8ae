// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for cairn

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cairn")]
#[command(about = "A sequential task automation engine with dependency-ordered execution")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute all tasks from a JSON manifest in dependency order
    Run {
        #[arg(help = "Path to task manifest JSON file")]
        manifest: PathBuf,

        #[arg(long, help = "Dry run - resolve and report without executing")]
        dry_run: bool,

        #[arg(short, long, help = "Workspace root for task working directories")]
        workspace: Option<PathBuf>,

        #[arg(long, help = "Skip dependents of failed tasks instead of attempting them")]
        skip_failed_deps: bool,

        #[arg(long, help = "Pause between tasks (e.g. 500ms, 2s)")]
        pause: Option<humantime::Duration>,

        #[arg(short, long, help = "Write the full JSON report to a file")]
        output: Option<PathBuf>,
    },

    /// Validate a manifest without executing anything
    Validate {
        #[arg(help = "Path to task manifest JSON file")]
        manifest: PathBuf,
    },

    /// Show the resolved execution plan for a manifest
    Plan {
        #[arg(help = "Path to task manifest JSON file")]
        manifest: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
