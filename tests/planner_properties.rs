// tests/planner_properties.rs

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use taskrun::config::ConfigFile;
use taskrun::dag::Planner;
use taskrun_test_utils::builders::{ConfigFileBuilder, TaskConfigBuilder};

// Strategy to generate a valid DAG configuration.
// We ensure acyclicity by only allowing task N to depend on tasks 0..N-1.
fn dag_config_strategy(max_tasks: usize) -> impl Strategy<Value = ConfigFile> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            num_tasks,
        );

        deps_strat.prop_map(move |raw_deps| {
            let mut builder = ConfigFileBuilder::new();
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                let name = format!("task_{}", i);
                let mut task_builder =
                    TaskConfigBuilder::new().cmd(&format!("echo {}", name));

                // Sanitize dependencies: only allow deps < i
                let mut valid_deps = HashSet::new();
                for dep_idx in potential_deps {
                    if i > 0 {
                        valid_deps.insert(dep_idx % i);
                    }
                }

                for dep_idx in valid_deps {
                    task_builder = task_builder.after(&format!("task_{}", dep_idx));
                }
                builder = builder.with_task(&name, task_builder.build());
            }
            builder.build()
        })
    })
}

/// Transitive prerequisite closure of `root`, including `root` itself.
fn transitive_closure(cfg: &ConfigFile, root: &str) -> HashSet<String> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([root.to_string()]);

    while let Some(name) = queue.pop_front() {
        if !seen.insert(name.clone()) {
            continue;
        }
        if let Some(task) = cfg.task.get(&name) {
            for dep in &task.after {
                queue.push_back(dep.clone());
            }
        }
    }

    seen
}

proptest! {
    #[test]
    fn plan_is_dependency_ordered_and_duplicate_free(
        cfg in dag_config_strategy(10),
        root_idx in 0..10usize,
    ) {
        let names: Vec<String> = cfg.task.keys().cloned().collect();
        let root = &names[root_idx % names.len()];

        let planner = Planner::from_config(&cfg);
        let plan = planner.plan(root).expect("acyclic config must plan");
        let order: Vec<String> =
            plan.task_names().iter().map(|s| s.to_string()).collect();

        // Each task appears exactly once, even via multiple paths.
        let unique: HashSet<&String> = order.iter().collect();
        prop_assert_eq!(unique.len(), order.len());

        // The requested task is last.
        prop_assert_eq!(order.last().map(|s| s.as_str()), Some(root.as_str()));

        // Every prerequisite precedes its dependent.
        for (pos, name) in order.iter().enumerate() {
            for dep in &cfg.task[name].after {
                let dep_pos = order
                    .iter()
                    .position(|n| n == dep)
                    .expect("prerequisite must be in plan");
                prop_assert!(dep_pos < pos, "{} must precede {}", dep, name);
            }
        }

        // The plan is exactly the transitive closure of the root.
        let expected = transitive_closure(&cfg, root);
        let planned: HashSet<String> = order.iter().cloned().collect();
        prop_assert_eq!(planned, expected);
    }
}
