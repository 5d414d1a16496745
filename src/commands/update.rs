use anyhow::Result;
use std::process::ExitCode;

use crate::dispatch::Action;
use crate::project::ProjectContext;

pub fn execute(project: &ProjectContext, dry_run: bool) -> Result<ExitCode> {
    super::run_resolved(project, &Action::Update, dry_run)
}
