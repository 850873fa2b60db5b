// src/venv.rs

//! Activation of a pre-existing local virtual environment.
//!
//! Activation does what the environment's own `activate` script does, but
//! per child process instead of for the whole shell:
//! - `VIRTUAL_ENV` points at the environment root
//! - the environment's bin directory is prepended to `PATH`
//! - `PYTHONHOME` is removed

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{Result, RunloopError};

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

/// An environment that passed activation checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedEnv {
    root: PathBuf,
    bin_dir: PathBuf,
    path: OsString,
}

impl ActivatedEnv {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `PATH` value children run with.
    pub fn path_var(&self) -> &OsString {
        &self.path
    }

    /// Apply the environment to a command about to be spawned.
    pub fn apply(&self, cmd: &mut Command) {
        cmd.env("VIRTUAL_ENV", &self.root)
            .env("PATH", &self.path)
            .env_remove("PYTHONHOME");
    }

    /// Resolve a bare program name against the environment's bin directory.
    ///
    /// Names containing a path separator, and names not present in the bin
    /// directory, are returned unchanged.
    pub fn resolve_program(&self, program: &str) -> PathBuf {
        if Path::new(program).components().count() != 1 {
            return PathBuf::from(program);
        }

        let candidate = self.bin_dir.join(program);
        if candidate.is_file() {
            return candidate;
        }

        let with_suffix = self
            .bin_dir
            .join(format!("{program}{}", std::env::consts::EXE_SUFFIX));
        if with_suffix.is_file() {
            return with_suffix;
        }

        PathBuf::from(program)
    }
}

/// Check that `root` is a usable virtual environment and compute the child
/// environment for it.
pub fn activate(root: &Path) -> Result<ActivatedEnv> {
    if !root.is_dir() {
        return Err(RunloopError::EnvActivation(format!(
            "virtual environment {:?} does not exist",
            root
        )));
    }

    let bin_dir = root.join(BIN_DIR);
    if !bin_dir.is_dir() {
        return Err(RunloopError::EnvActivation(format!(
            "virtual environment {:?} has no {BIN_DIR} directory",
            root
        )));
    }

    let inherited = std::env::var_os("PATH").unwrap_or_default();
    let path = prepend_path(&bin_dir, &inherited)?;

    info!(venv = %root.display(), "virtual environment activated");
    debug!(path = ?path, "child PATH");

    Ok(ActivatedEnv {
        root: root.to_path_buf(),
        bin_dir,
        path,
    })
}

fn prepend_path(dir: &Path, existing: &OsString) -> Result<OsString> {
    let entries = std::iter::once(dir.to_path_buf()).chain(std::env::split_paths(existing));
    std::env::join_paths(entries).map_err(|e| {
        RunloopError::EnvActivation(format!("cannot add {:?} to PATH: {e}", dir))
    })
}
