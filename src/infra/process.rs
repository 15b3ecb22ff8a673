// src/infra/process.rs - Running external tools
//
// Collaborators are fire-and-forget: the child inherits stdio so the user
// sees the tool's own progress output, and only the exit status comes back.

use std::process::Stdio;

use tokio::process::Command;

use crate::infra::errors::BrightsideError;

/// Whether `bin` resolves on PATH.
pub fn command_exists(bin: &str) -> bool {
    which::which(bin).is_ok()
}

/// Run `program args...` with inherited stdio and wait for it.
pub async fn run_inherited(program: &str, args: &[&str]) -> Result<(), BrightsideError> {
    run(program, args, true).await
}

/// Run without attaching stdin, for installers that would otherwise prompt.
pub async fn run_detached_stdin(program: &str, args: &[&str]) -> Result<(), BrightsideError> {
    run(program, args, false).await
}

async fn run(program: &str, args: &[&str], stdin: bool) -> Result<(), BrightsideError> {
    tracing::debug!(program, ?args, "spawning");

    let status = Command::new(program)
        .args(args)
        .stdin(if stdin { Stdio::inherit() } else { Stdio::null() })
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| BrightsideError::action(program, e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(BrightsideError::action(program, status.to_string()))
    }
}
