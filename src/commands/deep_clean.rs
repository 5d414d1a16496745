use anyhow::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::config::Config;
use crate::project::ProjectContext;
use crate::ui;

pub fn execute(project: &ProjectContext, force: bool, dry_run: bool) -> Result<ExitCode> {
    let config = Config::load_default()?;
    let plan = crate::clean::deep_clean_plan(project, &config)?;

    if !dry_run && !force && !confirm(project)? {
        ui::warn("deep clean cancelled");
        return Ok(ExitCode::SUCCESS);
    }

    super::execute_clean_plan(&plan, project.root(), dry_run)
}

fn confirm(project: &ProjectContext) -> Result<bool> {
    print!(
        "Remove dependencies, lockfiles, build output, and caches under {}? [y/N] ",
        project.root().display()
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
