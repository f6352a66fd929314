// src/engine/mod.rs

//! Plan execution engine.

pub mod runner;

pub use runner::{RunSummary, Runner};
