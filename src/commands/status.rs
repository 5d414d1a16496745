use anyhow::Result;
use std::process::ExitCode;

use crate::project::ProjectContext;
use crate::ui;

pub fn execute(project: &ProjectContext) -> Result<ExitCode> {
    ui::status("Project", project.root().display());

    match project.manager() {
        Some(manager) => {
            ui::success("Manager", manager);
            ui::status("Markers", project.markers().join(", "));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            ui::warn("no package manager detected (no package.json or lockfile)");
            Ok(ExitCode::FAILURE)
        }
    }
}
