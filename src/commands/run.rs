use anyhow::Result;
use std::process::ExitCode;

use crate::dispatch::Action;
use crate::project::ProjectContext;

pub fn execute(
    project: &ProjectContext,
    script: &str,
    args: Vec<String>,
    dry_run: bool,
) -> Result<ExitCode> {
    let action = Action::Run {
        script: script.to_string(),
        args,
    };
    super::run_resolved(project, &action, dry_run)
}
