// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;

use std::path::PathBuf;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::dag::{Plan, Planner, TaskGraph};
use crate::engine::Runner;
use crate::errors::{Result, TaskrunError};
use crate::exec::ShellExecutor;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + validation
/// - plan resolution
/// - sequential execution via the shell executor
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    if args.list {
        print_task_list(&cfg);
        return Ok(());
    }

    let requested = cfg
        .resolve_task_name(args.task.as_deref())
        .ok_or_else(|| {
            TaskrunError::ConfigError("no task requested and none configured".to_string())
        })?;

    let planner = Planner::from_config(&cfg);
    let plan = planner.plan(&requested)?;

    if args.dry_run {
        print_plan(&requested, &plan);
        return Ok(());
    }

    info!(task = %requested, tasks_in_plan = plan.len(), "starting run");

    let mut runner = Runner::new(ShellExecutor::new());
    let summary = runner.run_plan(&plan).await?;

    info!(
        tasks = summary.tasks_run,
        commands = summary.commands_run,
        "all tasks completed"
    );

    Ok(())
}

/// `--list` output: tasks, prerequisites, reverse dependencies and commands.
fn print_task_list(cfg: &ConfigFile) {
    let graph = TaskGraph::from_config(cfg);

    println!("tasks ({}):", cfg.task.len());
    for (name, task) in cfg.task.iter() {
        match task.description {
            Some(ref desc) => println!("  - {name}: {desc}"),
            None => println!("  - {name}"),
        }
        if !task.after.is_empty() {
            println!("      after: {:?}", task.after);
        }
        let needed_by = graph.dependents_of(name);
        if !needed_by.is_empty() {
            println!("      needed by: {needed_by:?}");
        }
        for cmd in &task.cmds {
            println!("      cmd: {cmd}");
        }
    }

    if let Some(ref name) = cfg.config.default_task {
        println!();
        println!("default task: {name}");
    }
}

/// `--dry-run` output: the resolved plan, in execution order.
fn print_plan(requested: &str, plan: &Plan) {
    println!("taskrun dry-run for '{requested}'");
    println!("plan ({} tasks):", plan.len());
    for task in plan.tasks() {
        println!("  - {}", task.name);
        for cmd in &task.cmds {
            println!("      cmd: {cmd}");
        }
    }
}
