// src/exec/invocation.rs

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::config::RunPlan;
use crate::venv::ActivatedEnv;

/// A fully described external command, built once and run `times` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub workdir: PathBuf,
    pub environment: Option<ActivatedEnv>,
}

impl Invocation {
    pub fn from_plan(plan: &RunPlan, environment: Option<ActivatedEnv>) -> Self {
        Self {
            program: plan.program.clone(),
            args: plan.args.clone(),
            workdir: plan.workdir.clone(),
            environment,
        }
    }

    /// The program path that will actually be spawned.
    pub fn resolved_program(&self) -> PathBuf {
        match &self.environment {
            Some(env) => env.resolve_program(&self.program),
            None => PathBuf::from(&self.program),
        }
    }

    /// Build the `tokio` command for one run.
    ///
    /// Stdio is inherited so the child's output interleaves with the
    /// progress lines. The child is killed if the returned command's child
    /// handle is dropped before it exits (Ctrl+C).
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(self.resolved_program());
        cmd.args(&self.args)
            .current_dir(&self.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        if let Some(env) = &self.environment {
            env.apply(&mut cmd);
        }

        cmd
    }

    pub fn command_line(&self) -> String {
        join_command_line(&self.program, &self.args)
    }
}

/// `program arg1 arg2` for logs and console output.
pub fn join_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
