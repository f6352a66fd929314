// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::ConfigFile;
use crate::errors::{Result, TaskrunError};

/// Run semantic validation against a loaded configuration.
///
/// This checks:
/// - there is at least one task
/// - all `after` prerequisites refer to existing tasks
/// - no task lists itself in `after`
/// - the prerequisite graph has no cycles
/// - `default_task`, if set, names an existing task
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_default_task(cfg)?;
    validate_task_prerequisites(cfg)?;
    validate_acyclic(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &ConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(TaskrunError::ConfigError(
            "config must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_default_task(cfg: &ConfigFile) -> Result<()> {
    if let Some(ref name) = cfg.config.default_task {
        if !cfg.task.contains_key(name) {
            return Err(TaskrunError::ConfigError(format!(
                "default_task '{name}' does not match any [task.<name>] section"
            )));
        }
    }
    Ok(())
}

fn validate_task_prerequisites(cfg: &ConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        for dep in task.after.iter() {
            if !cfg.task.contains_key(dep) {
                return Err(TaskrunError::ConfigError(format!(
                    "task '{name}' has unknown dependency '{dep}' in `after`"
                )));
            }
            if dep == name {
                return Err(TaskrunError::ConfigError(format!(
                    "task '{name}' cannot depend on itself in `after`"
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclic(cfg: &ConfigFile) -> Result<()> {
    // Edge direction: prerequisite -> task.
    // For:
    //   [task.release]
    //   after = ["lint"]
    // we add edge lint -> release.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in cfg.task.keys() {
        graph.add_node(name.as_str());
    }

    for (name, task) in cfg.task.iter() {
        for dep in task.after.iter() {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(TaskrunError::DependencyCycle(format!(
                "cycle detected in prerequisite graph involving task '{node}'"
            )))
        }
    }
}
