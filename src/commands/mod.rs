use anyhow::{Context, Result};
use std::path::Path;
use std::process::{ExitCode, ExitStatus};

use crate::cli::{Cli, Commands};
use crate::clean::CleanPlan;
use crate::dispatch::{self, Action};
use crate::project::ProjectContext;
use crate::{runner, ui};

mod add;
mod clean;
mod deep_clean;
mod install;
mod remove;
mod run;
mod status;
mod update;

pub fn execute(cli: Cli) -> Result<ExitCode> {
    // Inspect the project directory once; every command starts from this context
    let root = cli
        .dir
        .canonicalize()
        .with_context(|| format!("Project directory {:?} not found", cli.dir))?;
    let project = ProjectContext::inspect(root);

    match cli.command {
        Commands::Install => install::execute(&project, cli.dry_run),

        Commands::Run { script, args } => run::execute(&project, &script, args, cli.dry_run),
        Commands::Dev { args } => run::execute(&project, "dev", args, cli.dry_run),
        Commands::Build { args } => run::execute(&project, "build", args, cli.dry_run),
        Commands::Test { args } => run::execute(&project, "test", args, cli.dry_run),
        Commands::Lint { args } => run::execute(&project, "lint", args, cli.dry_run),
        Commands::Start { args } => run::execute(&project, "start", args, cli.dry_run),
        Commands::Preview { args } => run::execute(&project, "preview", args, cli.dry_run),
        Commands::Format { args } => run::execute(&project, "format", args, cli.dry_run),
        Commands::Watch { args } => run::execute(&project, "watch", args, cli.dry_run),

        Commands::Add {
            packages,
            dev,
            global,
        } => add::execute(&project, packages, dev, global, cli.dry_run),

        Commands::Remove { packages } => remove::execute(&project, packages, cli.dry_run),

        Commands::Update => update::execute(&project, cli.dry_run),

        Commands::Clean => clean::execute(&project, cli.dry_run),

        Commands::DeepClean { force } => deep_clean::execute(&project, force, cli.dry_run),

        Commands::Status => status::execute(&project),
    }
}

/// Resolve `action` against the project's manager and run it (or print it
/// under dry-run). The child's exit code becomes ours, unmasked.
fn run_resolved(project: &ProjectContext, action: &Action, dry_run: bool) -> Result<ExitCode> {
    let manager = project.require_manager()?;
    let line = dispatch::resolve(Some(manager), action)?;

    if dry_run {
        println!("{line}");
        return Ok(ExitCode::SUCCESS);
    }

    ui::status("Running", &line);
    let status = runner::run(&line, project.root())?;
    Ok(child_exit_code(status))
}

fn child_exit_code(status: ExitStatus) -> ExitCode {
    if status.success() {
        return ExitCode::SUCCESS;
    }
    match status.code() {
        Some(code) => ExitCode::from(code.clamp(1, 255) as u8),
        // Terminated by signal
        None => ExitCode::FAILURE,
    }
}

fn execute_clean_plan(plan: &CleanPlan, root: &Path, dry_run: bool) -> Result<ExitCode> {
    if dry_run {
        for path in &plan.remove {
            println!("rm -rf {}", path.display());
        }
        for line in plan.best_effort.iter().chain(&plan.commands) {
            println!("{line}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    for path in &plan.remove {
        ui::status("Removing", path.display());
        crate::clean::remove_path(path)?;
    }

    for line in &plan.best_effort {
        match runner::run_if_available(line, root)? {
            Some(status) if !status.success() => {
                ui::warn(format!("`{line}` exited with {status}"));
            }
            Some(_) => {}
            None => ui::info(format!("{} not installed, skipping `{line}`", line.program())),
        }
    }

    for line in &plan.commands {
        ui::status("Running", line);
        let status = runner::run(line, root)?;
        if !status.success() {
            return Ok(child_exit_code(status));
        }
    }

    Ok(ExitCode::SUCCESS)
}
