// tests/integration/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;

use runloop::config::load_and_validate;
use runloop::errors::RunloopError;

#[test]
fn zero_times_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[run]\ntimes = 0\n").unwrap();

    match load_and_validate(file.path()) {
        Err(RunloopError::ConfigError(msg)) => assert!(msg.contains("times")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn negative_delay_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[run]\ndelay_seconds = -1\n").unwrap();

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(RunloopError::TomlError(_))), "got {result:?}");
}

#[test]
fn unknown_delay_display_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[run]\ndelay_display = \"spinner\"\n").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(RunloopError::TomlError(_))
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[run]\nretries = 3\n").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(RunloopError::TomlError(_))
    ));
}

#[test]
fn unreadable_config_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(RunloopError::IoError(_))));
}
