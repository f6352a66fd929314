// src/dag/mod.rs

//! Task graph and plan construction.

pub mod graph;
pub mod planner;

pub use graph::TaskGraph;
pub use planner::{Plan, PlannedTask, Planner};
