// src/exec/shell.rs

//! Real shell executor.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{info, warn};

use crate::errors::Result;
use crate::exec::backend::{CommandExecutor, CommandOutcome};

/// Executor that runs each command through the platform shell with
/// inherited stdio, one command at a time.
#[derive(Debug, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ShellExecutor {
    fn run_command<'a>(
        &'a mut self,
        task: &'a str,
        cmd: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(run_shell_command(task, cmd))
    }
}

/// Run a single shell command to completion.
///
/// Either the process exits on its own (normal case), or an interrupt
/// arrives first, in which case the child is killed and
/// [`CommandOutcome::Interrupted`] is returned so the runner can abort
/// the remaining plan.
async fn run_shell_command(task: &str, cmd_text: &str) -> Result<CommandOutcome> {
    info!(task = %task, cmd = %cmd_text, "starting command");

    // Build a shell command appropriate for the platform.
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd_text);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd_text);
        c
    };

    // Stdio is inherited: the commands own the terminal while they run,
    // and logs go to stderr via tracing.
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning process for task '{task}'"))?;

    tokio::select! {
        status_res = child.wait() => {
            let status = status_res
                .with_context(|| format!("waiting for process of task '{task}'"))?;

            Ok(outcome_from_status(task, status))
        }

        ctrl = tokio::signal::ctrl_c() => {
            match ctrl {
                Ok(()) => {
                    info!(task = %task, "interrupt received; killing current command");
                    if let Err(e) = child.kill().await {
                        warn!(
                            task = %task,
                            error = %e,
                            "failed to kill child process on interrupt"
                        );
                    }

                    Ok(CommandOutcome::Interrupted)
                }
                Err(e) => {
                    // Signal handler registration failed: no interrupt has
                    // actually arrived, so wait the command out normally.
                    warn!(
                        task = %task,
                        error = %e,
                        "failed to listen for Ctrl+C; waiting for command to finish"
                    );

                    let status = child
                        .wait()
                        .await
                        .with_context(|| format!("waiting for process of task '{task}'"))?;

                    Ok(outcome_from_status(task, status))
                }
            }
        }
    }
}

fn outcome_from_status(task: &str, status: std::process::ExitStatus) -> CommandOutcome {
    let code = status.code().unwrap_or(-1);
    info!(
        task = %task,
        exit_code = code,
        success = status.success(),
        "command exited"
    );

    if status.success() {
        CommandOutcome::Success
    } else {
        CommandOutcome::Failed(code)
    }
}
