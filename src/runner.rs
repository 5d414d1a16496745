use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

use crate::dispatch::CommandLine;

/// Run a resolved command line in `cwd`, streaming stdout/stderr to the
/// user's terminal. Blocks until the child exits and returns its status
/// unmasked; exit-code policy belongs to the caller.
pub fn run(line: &CommandLine, cwd: &Path) -> Result<ExitStatus> {
    debug!("running `{}` in {:?}", line, cwd);

    Command::new(line.program())
        .args(line.argv())
        .current_dir(cwd)
        .status()
        .with_context(|| format!("Failed to execute `{}`", line))
}

/// Run a command only when its program is installed. Returns `None` when
/// the binary cannot be found on PATH.
pub fn run_if_available(line: &CommandLine, cwd: &Path) -> Result<Option<ExitStatus>> {
    if which::which(line.program()).is_err() {
        debug!("{} not on PATH, skipping `{}`", line.program(), line);
        return Ok(None);
    }

    run(line, cwd).map(Some)
}
