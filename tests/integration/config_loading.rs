// tests/integration/config_loading.rs

use std::error::Error;
use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use runloop::config::{load_and_validate, load_optional, DEFAULT_CONFIG_FILE};
use runloop::types::DelayDisplay;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_config_is_loaded() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[run]
times = 3
delay_seconds = 0
delay_display = "countdown"
pause_at_end = false

[command]
program = "node"
args = ["index.js", "--fast"]

[environment]
venv = ".venv"
"#
    )?;

    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.run.times, 3);
    assert_eq!(cfg.run.delay_seconds, 0);
    assert_eq!(cfg.run.delay_display, DelayDisplay::Countdown);
    assert!(!cfg.run.pause_at_end);
    assert_eq!(cfg.command.program, "node");
    assert_eq!(cfg.command.args, vec!["index.js", "--fast"]);
    assert_eq!(cfg.environment.venv_dir(), Some(".venv"));
    Ok(())
}

#[test]
fn missing_sections_fall_back_to_defaults() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, "[run]\ntimes = 2\n")?;

    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.run.times, 2);
    assert_eq!(Duration::from_secs(cfg.run.delay_seconds), Duration::from_secs(5));
    assert_eq!(cfg.command.program, "python");
    assert_eq!(cfg.command.args, vec!["main.py"]);
    assert_eq!(cfg.environment.venv_dir(), Some("venv"));
    Ok(())
}

#[test]
fn empty_venv_disables_activation() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, "[environment]\nvenv = \"\"\n")?;

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.environment.venv_dir(), None);
    Ok(())
}

#[test]
fn default_file_in_directory_is_picked_up() -> TestResult {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[run]\ntimes = 7\n")?;

    let cfg = load_optional(dir.path())?;
    assert_eq!(cfg.run.times, 7);
    Ok(())
}

#[test]
fn absent_default_file_means_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;

    let cfg = load_optional(dir.path())?;
    assert_eq!(cfg.run.times, 10);
    assert_eq!(cfg.run.delay_seconds, 5);
    Ok(())
}

#[test]
fn demo_config_matches_builtin_defaults() -> TestResult {
    let manifest = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let demo = load_and_validate(manifest.join("demos/Runloop.toml"))?;
    let dir = tempfile::tempdir()?;
    let defaults = load_optional(dir.path())?;

    assert_eq!(demo.run.times, defaults.run.times);
    assert_eq!(demo.run.delay_seconds, defaults.run.delay_seconds);
    assert_eq!(demo.run.delay_display, defaults.run.delay_display);
    assert_eq!(demo.run.pause_at_end, defaults.run.pause_at_end);
    assert_eq!(demo.command.program, defaults.command.program);
    assert_eq!(demo.command.args, defaults.command.args);
    assert_eq!(demo.environment.venv_dir(), defaults.environment.venv_dir());
    Ok(())
}
