// src/main.rs

use taskrun::errors::TaskrunError;
use taskrun::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("taskrun error: failed to initialise logging: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        eprintln!("taskrun error: {err}");
        std::process::exit(exit_code_for(&err));
    }
}

/// Map a fatal error to the process exit status.
///
/// A failed command propagates its own exit code; an interrupt maps to
/// the conventional 130; everything else is 1.
fn exit_code_for(err: &TaskrunError) -> i32 {
    match err {
        TaskrunError::CommandFailed { code, .. } if *code > 0 => *code,
        TaskrunError::Interrupted { .. } => 130,
        _ => 1,
    }
}
