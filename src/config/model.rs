// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// default_task = "install"
///
/// [task.install]
/// description = "install package with extras"
/// cmds = ["python -m pip install -Ue .[dev]"]
///
/// [task.release]
/// cmds = ["flit publish"]
/// after = ["lint", "test", "clean"]
/// ```
///
/// The table is built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Global behaviour config from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[task.<name>]`.
    ///
    /// Keys are the *task names* (e.g. `"install"`, `".venv"`).
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigSection {
    /// Task to run when the CLI names none.
    ///
    /// If unset, the first task in the table (name order) is used.
    #[serde(default)]
    pub default_task: Option<String>,
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskConfig {
    /// One-line description, shown by `--list`.
    #[serde(default)]
    pub description: Option<String>,

    /// Ordered shell commands to execute when the task runs.
    ///
    /// May be empty: a task with no commands is a pure aggregation
    /// target (e.g. an alias that only pulls in prerequisites).
    #[serde(default)]
    pub cmds: Vec<String>,

    /// Prerequisite list: tasks that must complete before this one runs.
    #[serde(default)]
    pub after: Vec<String>,
}

impl ConfigFile {
    /// Resolve which task an invocation should run.
    ///
    /// Precedence: explicit request, then `config.default_task`, then
    /// the first task in the table.
    pub fn resolve_task_name(&self, requested: Option<&str>) -> Option<String> {
        requested
            .map(|s| s.to_string())
            .or_else(|| self.config.default_task.clone())
            .or_else(|| self.task.keys().next().cloned())
    }
}
