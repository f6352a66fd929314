// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! The runner talks to a `CommandExecutor` instead of spawning
//! processes directly. This makes it easy to swap in a fake executor in
//! tests while keeping the production implementation in [`shell`].
//!
//! - [`ShellExecutor`] is the default implementation used by `taskrun`.
//! - Tests can provide their own `CommandExecutor` that, for example,
//!   records which commands were run and scripts their outcomes.
//!
//! [`ShellExecutor`]: crate::exec::ShellExecutor
//! [`shell`]: crate::exec::shell

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

/// Result of running one shell command to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command exited with status 0.
    Success,
    /// The command exited with the given non-zero code.
    Failed(i32),
    /// The command was killed by an interrupt before completing.
    Interrupted,
}

/// Trait abstracting how a single command is executed.
///
/// The implementation is free to:
/// - spawn an OS process and wait for it (production)
/// - record the command and return a scripted outcome (tests)
///
/// An `Err` means the command could not be run at all (e.g. spawn
/// failure); a non-zero exit is reported via [`CommandOutcome::Failed`].
pub trait CommandExecutor: Send {
    fn run_command<'a>(
        &'a mut self,
        task: &'a str,
        cmd: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>>;
}
