use anyhow::Result;
use std::process::ExitCode;

use crate::dispatch::Action;
use crate::project::ProjectContext;

pub fn execute(
    project: &ProjectContext,
    packages: Vec<String>,
    dev: bool,
    global: bool,
    dry_run: bool,
) -> Result<ExitCode> {
    let action = Action::Add {
        packages,
        dev,
        global,
    };
    super::run_resolved(project, &action, dry_run)
}
