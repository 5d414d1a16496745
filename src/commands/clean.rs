use anyhow::Result;
use std::process::ExitCode;

use crate::project::ProjectContext;

pub fn execute(project: &ProjectContext, dry_run: bool) -> Result<ExitCode> {
    let plan = crate::clean::clean_plan(project)?;
    super::execute_clean_plan(&plan, project.root(), dry_run)
}
