// src/dag/planner.rs

//! Plan construction.
//!
//! The planner resolves a requested task name into a dependency-ordered
//! execution plan via a depth-first traversal. Each task is visited at
//! most once per invocation, so a prerequisite reachable via multiple
//! paths still runs exactly once (standard phony-target semantics).
//!
//! Cycles are detected with tagged traversal state rather than assumed
//! away: `config::validate` already rejects cyclic configs, but the
//! planner must not rely on that.

use std::collections::HashMap;

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::dag::graph::TaskGraph;
use crate::errors::{Result, TaskrunError};

/// One slot in a resolved [`Plan`]: a task name and its command list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTask {
    pub name: String,
    pub cmds: Vec<String>,
}

/// Dependency-ordered list of tasks for a single invocation.
///
/// Prerequisites always precede their dependents, each task appears at
/// most once, and the requested task is last.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    tasks: Vec<PlannedTask>,
}

impl Plan {
    /// Tasks in execution order.
    pub fn tasks(&self) -> &[PlannedTask] {
        &self.tasks
    }

    /// Task names in execution order.
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Traversal tag for a task during planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// On the current DFS path; seeing this again means a cycle.
    InProgress,
    /// Already placed in the plan.
    Done,
}

/// Resolves task names into execution plans against an immutable table.
#[derive(Debug, Clone)]
pub struct Planner {
    graph: TaskGraph,
    cmds: HashMap<String, Vec<String>>,
}

impl Planner {
    /// Construct a planner from a validated [`ConfigFile`].
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let graph = TaskGraph::from_config(cfg);
        let cmds = cfg
            .task
            .iter()
            .map(|(name, task)| (name.clone(), task.cmds.clone()))
            .collect();

        Self { graph, cmds }
    }

    /// Resolve `root` into a dependency-ordered [`Plan`].
    ///
    /// Fails with [`TaskrunError::UnknownTask`] if `root` (or any
    /// transitive prerequisite) is not in the table, and with
    /// [`TaskrunError::DependencyCycle`] if the prerequisite graph
    /// reaches back to a task already on the traversal path.
    pub fn plan(&self, root: &str) -> Result<Plan> {
        let mut states: HashMap<String, VisitState> = HashMap::new();
        let mut plan = Plan::default();

        self.visit(root, &mut states, &mut plan)?;

        debug!(task = %root, order = ?plan.task_names(), "resolved execution plan");
        Ok(plan)
    }

    fn visit(
        &self,
        name: &str,
        states: &mut HashMap<String, VisitState>,
        plan: &mut Plan,
    ) -> Result<()> {
        match states.get(name) {
            Some(VisitState::Done) => return Ok(()),
            Some(VisitState::InProgress) => {
                return Err(TaskrunError::DependencyCycle(format!(
                    "task '{name}' transitively depends on itself"
                )));
            }
            None => {}
        }

        if !self.graph.contains(name) {
            return Err(TaskrunError::UnknownTask(name.to_string()));
        }

        states.insert(name.to_string(), VisitState::InProgress);

        for dep in self.graph.dependencies_of(name).to_vec() {
            self.visit(&dep, states, plan)?;
        }

        states.insert(name.to_string(), VisitState::Done);
        plan.tasks.push(PlannedTask {
            name: name.to_string(),
            cmds: self.cmds.get(name).cloned().unwrap_or_default(),
        });

        Ok(())
    }
}
