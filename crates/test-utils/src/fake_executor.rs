use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use taskrun::errors::Result;
use taskrun::exec::{CommandExecutor, CommandOutcome};

/// A fake executor that:
/// - records every (task, command) pair it is asked to run
/// - returns `Success` unless the command has a scripted outcome.
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<(String, String)>>>,
    outcomes: HashMap<String, CommandOutcome>,
}

impl FakeExecutor {
    pub fn new(executed: Arc<Mutex<Vec<(String, String)>>>) -> Self {
        Self {
            executed,
            outcomes: HashMap::new(),
        }
    }

    /// Script a non-zero exit code for the given command.
    pub fn fail_on(mut self, cmd: &str, code: i32) -> Self {
        self.outcomes
            .insert(cmd.to_string(), CommandOutcome::Failed(code));
        self
    }

    /// Script an interrupt for the given command.
    pub fn interrupt_on(mut self, cmd: &str) -> Self {
        self.outcomes
            .insert(cmd.to_string(), CommandOutcome::Interrupted);
        self
    }
}

impl CommandExecutor for FakeExecutor {
    fn run_command<'a>(
        &'a mut self,
        task: &'a str,
        cmd: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(async move {
            {
                let mut guard = self.executed.lock().unwrap();
                guard.push((task.to_string(), cmd.to_string()));
            }

            Ok(self
                .outcomes
                .get(cmd)
                .copied()
                .unwrap_or(CommandOutcome::Success))
        })
    }
}
