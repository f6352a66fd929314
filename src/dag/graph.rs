// src/dag/graph.rs

use std::collections::HashMap;

use crate::config::model::ConfigFile;

/// Adjacency view of the task table, keyed by task name.
///
/// Acyclicity is checked in `config::validate`; this type only answers
/// adjacency queries, forwards for the planner and reverse for
/// `--list` output.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    /// Direct prerequisites per task, in `after` order.
    deps: HashMap<String, Vec<String>>,
    /// Reverse edges: which tasks list this one in their `after`.
    dependents: HashMap<String, Vec<String>>,
}

impl TaskGraph {
    /// Build the graph from a validated [`ConfigFile`].
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let mut deps: HashMap<String, Vec<String>> = HashMap::new();
        let mut dependents: HashMap<String, Vec<String>> = HashMap::new();

        for (name, task) in cfg.task.iter() {
            deps.insert(name.clone(), task.after.clone());
            dependents.entry(name.clone()).or_default();
        }

        // Reverse edges follow table order, so listings stay stable.
        for (name, task) in cfg.task.iter() {
            for dep in task.after.iter() {
                if let Some(entry) = dependents.get_mut(dep) {
                    entry.push(name.clone());
                }
            }
        }

        Self { deps, dependents }
    }

    /// Whether a task with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.deps.contains_key(name)
    }

    /// Return all task names.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.deps.keys().map(|s| s.as_str())
    }

    /// Immediate prerequisites of a task (the tasks listed in its `after`).
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.deps.get(name).map(|d| d.as_slice()).unwrap_or(&[])
    }

    /// Immediate dependents of a task (tasks that list this one in their `after`).
    pub fn dependents_of(&self, name: &str) -> &[String] {
        self.dependents
            .get(name)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }
}
