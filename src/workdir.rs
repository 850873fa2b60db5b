// src/workdir.rs

//! Working directory resolution.
//!
//! The command, its entry-point file and the virtual environment are all
//! resolved against one directory, independent of where `runloop` was
//! started from:
//!
//! 1. `--workdir` if given
//! 2. the directory containing an explicit `--config` file
//! 3. the directory containing the `runloop` executable
//!
//! The result is always absolute: the child runs with it as its current
//! directory, so a relative venv or program path built from it would be
//! resolved twice.

use std::path::{Path, PathBuf};

use crate::errors::{Result, RunloopError};

pub fn resolve_workdir(workdir: Option<&Path>, config_path: Option<&Path>) -> Result<PathBuf> {
    let dir = match (workdir, config_path) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(config)) => config_parent_dir(config),
        (None, None) => executable_dir()?,
    };

    if !dir.is_dir() {
        return Err(RunloopError::ConfigError(format!(
            "working directory {:?} does not exist or is not a directory",
            dir
        )));
    }

    Ok(std::path::absolute(&dir)?)
}

/// Directory holding the config file.
///
/// A bare filename like `Runloop.toml` has an empty parent, which means the
/// current directory.
fn config_parent_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        RunloopError::ConfigError(format!("executable path {:?} has no parent directory", exe))
    })
}
