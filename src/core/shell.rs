//! Runs a saved command through `bash -c`.

use std::io::{self, IsTerminal};
use std::process::{Command, ExitStatus, Stdio};

use super::pipeline;
use super::storage::Recipe;
use crate::error::{GcmdError, Result};

/// What this process has on its standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinSource {
    /// A pipe: there is data to forward.
    Piped,
    /// An interactive terminal.
    Terminal,
    /// Anything else: closed, a redirected file, a socket or a device.
    Closed,
}

impl StdinSource {
    /// Classifies the current process's standard input.
    pub fn detect() -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return StdinSource::Terminal;
        }
        detect_non_terminal(&stdin)
    }
}

#[cfg(unix)]
fn detect_non_terminal(stdin: &io::Stdin) -> StdinSource {
    use std::fs::File;
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    let Ok(fd) = stdin.as_fd().try_clone_to_owned() else {
        return StdinSource::Closed;
    };
    match File::from(fd).metadata() {
        Ok(meta) if meta.file_type().is_fifo() => StdinSource::Piped,
        _ => StdinSource::Closed,
    }
}

#[cfg(not(unix))]
fn detect_non_terminal(_stdin: &io::Stdin) -> StdinSource {
    StdinSource::Piped
}

/// Decides how the child's stdin is wired, enforcing the recipe's stdin contract.
pub fn child_stdin(recipe: &Recipe, source: StdinSource) -> Result<Stdio> {
    match (recipe.stdin, source) {
        (true, StdinSource::Piped) => Ok(Stdio::inherit()),
        (true, _) => Err(GcmdError::StdinRequired),
        (false, _) => Ok(Stdio::null()),
    }
}

/// Builds the `bash -c` invocation for a recipe. Stdout and stderr are inherited.
pub fn command(recipe: &Recipe, stdin: Stdio) -> Command {
    let mut cmd = Command::new("bash");
    cmd.arg("-c")
        .arg(pipeline::format(recipe))
        .stdin(stdin)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

/// Executes a recipe and waits for it to finish.
pub fn execute(recipe: &Recipe, source: StdinSource) -> Result<()> {
    tracing::debug!(?source, needs_stdin = recipe.stdin, "checking stdin");
    let stdin = child_stdin(recipe, source)?;

    let mut cmd = command(recipe, stdin);
    tracing::debug!(?cmd, "spawning subshell");
    let status = cmd.status().map_err(GcmdError::Spawn)?;
    check_status(status)
}

fn check_status(status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    let code = exit_code(status);
    tracing::debug!(code, "subshell failed");
    Err(GcmdError::Subshell { code })
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
