// tests/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;

use taskrun::config::load_and_validate;
use taskrun::errors::TaskrunError;

#[test]
fn dag_cycle_returns_structured_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[task.a]
cmds = ["echo a"]
after = ["b"]

[task.b]
cmds = ["echo b"]
after = ["a"]
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(TaskrunError::DependencyCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("a") || msg.contains("b"));
        }
        Err(e) => panic!("Expected DependencyCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_dependency_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[task.release]
cmds = ["flit publish"]
after = ["nonexistent"]
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(TaskrunError::ConfigError(msg)) => {
            assert!(msg.contains("unknown dependency"));
            assert!(msg.contains("nonexistent"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn self_dependency_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[task.lint]
cmds = ["echo lint"]
after = ["lint"]
"#
    )
    .unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskrunError::ConfigError(_))
    ));
}

#[test]
fn empty_task_table_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[config]\n").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskrunError::ConfigError(_))
    ));
}

#[test]
fn missing_default_task_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[config]
default_task = "nope"

[task.lint]
cmds = ["echo lint"]
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(TaskrunError::ConfigError(msg)) => {
            assert!(msg.contains("default_task"));
            assert!(msg.contains("nope"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn malformed_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[task.lint\ncmds = ").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskrunError::TomlError(_))
    ));
}

#[test]
fn missing_file_returns_io_error() {
    let result = load_and_validate("does/not/exist/Taskrun.toml");
    assert!(matches!(result, Err(TaskrunError::IoError(_))));
}
