// src/exec/mod.rs

//! Command execution: the executor abstraction and the real shell
//! implementation.

pub mod backend;
pub mod shell;

pub use backend::{CommandExecutor, CommandOutcome};
pub use shell::ShellExecutor;
