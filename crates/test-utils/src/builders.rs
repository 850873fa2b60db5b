#![allow(dead_code)]

use std::path::{Path, PathBuf};

use runloop::config::{ConfigFile, RawConfigFile};
use runloop::exec::Invocation;
use runloop::types::DelayDisplay;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn times(mut self, times: u32) -> Self {
        self.config.run.times = times;
        self
    }

    pub fn delay_seconds(mut self, secs: u64) -> Self {
        self.config.run.delay_seconds = secs;
        self
    }

    pub fn delay_display(mut self, display: DelayDisplay) -> Self {
        self.config.run.delay_display = display;
        self
    }

    pub fn pause_at_end(mut self, val: bool) -> Self {
        self.config.run.pause_at_end = val;
        self
    }

    pub fn command(mut self, program: &str, args: &[&str]) -> Self {
        self.config.command.program = program.to_string();
        self.config.command.args = args.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn venv(mut self, dir: &str) -> Self {
        self.config.environment.venv = dir.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Invocation`.
pub struct InvocationBuilder {
    invocation: Invocation,
}

impl InvocationBuilder {
    pub fn new(program: &str) -> Self {
        Self {
            invocation: Invocation {
                program: program.to_string(),
                args: vec![],
                workdir: PathBuf::from("."),
                environment: None,
            },
        }
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.invocation.args.push(arg.to_string());
        self
    }

    pub fn workdir(mut self, dir: impl AsRef<Path>) -> Self {
        self.invocation.workdir = dir.as_ref().to_path_buf();
        self
    }

    pub fn build(self) -> Invocation {
        self.invocation
    }
}
