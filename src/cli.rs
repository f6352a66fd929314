// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskrun",
    version,
    about = "Run named tasks and their prerequisites, fail-fast.",
    long_about = None
)]
pub struct CliArgs {
    /// Task to run.
    ///
    /// If omitted, `config.default_task` is used; if that is unset too,
    /// the first task in the table (name order) runs.
    #[arg(value_name = "TASK")]
    pub task: Option<String>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Taskrun.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Taskrun.toml")]
    pub config: String,

    /// List all tasks with their prerequisites, without executing anything.
    #[arg(long)]
    pub list: bool,

    /// Print the resolved execution plan, but don't execute any commands.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
