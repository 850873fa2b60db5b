// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RunloopError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = RunloopError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.run, raw.command, raw.environment))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_times(cfg.run.times)?;
    validate_program(&cfg.command.program)?;
    Ok(())
}

pub(crate) fn validate_times(times: u32) -> Result<()> {
    if times == 0 {
        return Err(RunloopError::ConfigError(
            "[run].times must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_program(program: &str) -> Result<()> {
    if program.trim().is_empty() {
        return Err(RunloopError::ConfigError(
            "[command].program must not be empty".to_string(),
        ));
    }
    Ok(())
}
