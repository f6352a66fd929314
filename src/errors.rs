// src/errors.rs

//! Crate-wide error types.
//!
//! Every variant is fatal to the invocation: nothing is caught or
//! retried internally. `main.rs` maps variants to process exit codes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskrunError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Cycle detected in task graph: {0}")]
    DependencyCycle(String),

    #[error("Task '{task}' failed: `{cmd}` exited with code {code}")]
    CommandFailed {
        task: String,
        cmd: String,
        code: i32,
    },

    #[error("Interrupted while running task '{task}'")]
    Interrupted { task: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskrunError>;
