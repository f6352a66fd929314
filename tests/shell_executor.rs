// tests/shell_executor.rs

#![cfg(unix)]

use taskrun::exec::{CommandExecutor, CommandOutcome, ShellExecutor};
use taskrun_test_utils::{init_tracing, with_timeout};

#[tokio::test]
async fn completed_command_is_never_reported_as_interrupted() {
    init_tracing();

    // No interrupt arrives here; the command must run to completion and
    // report its real outcome.
    let mut exec = ShellExecutor::new();
    let outcome = with_timeout(exec.run_command("noop", "exit 0"))
        .await
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Success);
}

#[tokio::test]
async fn failing_command_reports_its_exit_code() {
    init_tracing();

    let mut exec = ShellExecutor::new();
    let outcome = with_timeout(exec.run_command("flaky", "exit 7"))
        .await
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Failed(7));
}
