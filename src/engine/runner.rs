// src/engine/runner.rs

//! Sequential, fail-fast plan execution.

use std::fmt;

use tracing::{debug, error, info};

use crate::dag::Plan;
use crate::errors::{Result, TaskrunError};
use crate::exec::{CommandExecutor, CommandOutcome};

/// What a completed run did, for the final log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub tasks_run: usize,
    pub commands_run: usize,
}

/// Walks a resolved [`Plan`] in order and runs each task's commands,
/// one at a time, each to completion before the next starts.
///
/// Fail-fast: the first command that exits non-zero aborts the entire
/// invocation; no further commands or dependent tasks run, and nothing
/// is retried. An interrupt likewise aborts the remaining plan.
pub struct Runner<E: CommandExecutor> {
    executor: E,
}

impl<E: CommandExecutor> fmt::Debug for Runner<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner").finish_non_exhaustive()
    }
}

impl<E: CommandExecutor> Runner<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Execute the plan, strictly sequentially.
    pub async fn run_plan(&mut self, plan: &Plan) -> Result<RunSummary> {
        let mut commands_run = 0;

        for task in plan.tasks() {
            if task.cmds.is_empty() {
                debug!(task = %task.name, "task has no commands; nothing to do");
                continue;
            }

            info!(task = %task.name, commands = task.cmds.len(), "running task");

            for cmd in &task.cmds {
                match self.executor.run_command(&task.name, cmd).await? {
                    CommandOutcome::Success => {
                        commands_run += 1;
                    }
                    CommandOutcome::Failed(code) => {
                        error!(
                            task = %task.name,
                            cmd = %cmd,
                            exit_code = code,
                            "command failed; aborting remaining plan"
                        );
                        return Err(TaskrunError::CommandFailed {
                            task: task.name.clone(),
                            cmd: cmd.clone(),
                            code,
                        });
                    }
                    CommandOutcome::Interrupted => {
                        return Err(TaskrunError::Interrupted {
                            task: task.name.clone(),
                        });
                    }
                }
            }
        }

        info!(
            tasks = plan.len(),
            commands = commands_run,
            "run complete"
        );

        Ok(RunSummary {
            tasks_run: plan.len(),
            commands_run,
        })
    }
}
