// ABOUTME: Command implementations for the cairn CLI
// ABOUTME: Wires manifests, the execution engine, and reporting together

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::Config;
use crate::engine::{
    DependencyPolicy, DependencyScheduler, ExecutionCoordinator, ShellRunner, TaskExecutor,
};
use crate::parser::Manifest;
use crate::reporting::ExecutionReporter;

#[allow(clippy::too_many_arguments)]
pub async fn run_manifest(
    manifest_path: PathBuf,
    dry_run: bool,
    workspace: Option<PathBuf>,
    skip_failed_deps: bool,
    pause: Option<Duration>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let manifest = Manifest::from_file(&manifest_path)
        .with_context(|| format!("failed to load manifest from {}", manifest_path.display()))?;
    let tasks = manifest.into_tasks();

    let workspace = workspace.or_else(|| config.workspace.clone());
    let runner = std::sync::Arc::new(ShellRunner::with_shell(&config.shell));
    let executor = TaskExecutor::with_runner(runner, workspace);

    let policy = if skip_failed_deps || config.skip_failed_dependents {
        DependencyPolicy::SkipOnFailure
    } else {
        DependencyPolicy::OrderOnly
    };

    let mut coordinator = ExecutionCoordinator::new(executor).with_policy(policy);
    if let Some(pause) = pause.or(config.pause_between_tasks) {
        coordinator = coordinator.with_pause(pause);
    }
    if dry_run {
        coordinator = coordinator.dry_run();
    }

    let report = coordinator.run(&tasks, manifest.name.clone()).await?;

    let reporter = ExecutionReporter::new();
    println!("{}", reporter.render_results(&report));
    println!("{}", reporter.render_summary(&report));

    if let Some(output_path) = output {
        reporter
            .write_json(&report, &output_path)
            .with_context(|| format!("failed to write report to {}", output_path.display()))?;
        info!("Report written to {}", output_path.display());
    }

    if report.has_failures() {
        anyhow::bail!(
            "{} of {} tasks failed",
            report.summary.failed_tasks,
            report.summary.total_tasks
        );
    }

    Ok(())
}

pub async fn validate_manifest(manifest_path: PathBuf) -> Result<()> {
    let manifest = Manifest::from_file(&manifest_path)
        .with_context(|| format!("failed to load manifest from {}", manifest_path.display()))?;
    let tasks = manifest.into_tasks();

    let scheduler = DependencyScheduler::new();
    let missing = scheduler.validate_dependencies(&tasks);
    if !missing.is_empty() {
        anyhow::bail!("unknown dependencies referenced: {:?}", missing);
    }

    // Exercises cycle detection as well.
    let order = scheduler.resolve_order(&tasks)?;

    println!(
        "Manifest OK: {} tasks, {} dependency chains",
        order.len(),
        scheduler.count_dependency_chains(&tasks)
    );
    Ok(())
}

pub async fn plan_manifest(manifest_path: PathBuf) -> Result<()> {
    let manifest = Manifest::from_file(&manifest_path)
        .with_context(|| format!("failed to load manifest from {}", manifest_path.display()))?;
    let tasks = manifest.into_tasks();

    let scheduler = DependencyScheduler::new();
    let order = scheduler.resolve_order(&tasks)?;
    let chains = scheduler.count_dependency_chains(&tasks);

    println!("Execution plan ({} tasks, {} chains):", order.len(), chains);
    for (position, name) in order.iter().enumerate() {
        let task = &tasks[name];
        let deps = if task.dependencies.is_empty() {
            "none".to_string()
        } else {
            task.dependencies.join(", ")
        };
        let marker = if task.enabled { " " } else { "-" };
        println!("  {}{}. {} (depends on: {})", marker, position + 1, name, deps);
    }

    Ok(())
}
