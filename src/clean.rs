use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::detect::PackageManager;
use crate::dispatch::{self, Action, CommandLine};
use crate::project::ProjectContext;

const NODE_MODULES: &str = "node_modules";

/// Build output directories removed by a deep clean.
const BUILD_DIRS: [&str; 8] = [
    "build",
    "dist",
    "out",
    ".next",
    ".nuxt",
    ".output",
    ".svelte-kit",
    "coverage",
];

/// Bundler and tool cache directories removed by a deep clean.
const CACHE_DIRS: [&str; 4] = [".cache", ".parcel-cache", ".vite", ".turbo"];

/// Everything a clean pass will do, computed before anything happens.
/// Building a plan touches nothing; execution is a separate step so
/// `--dry-run` can print the plan verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanPlan {
    /// Paths to delete. Only paths that exist at planning time are listed.
    pub remove: Vec<PathBuf>,
    /// Commands that must succeed, in order.
    pub commands: Vec<CommandLine>,
    /// Cache-clearing commands skipped when their binary is not installed.
    pub best_effort: Vec<CommandLine>,
}

/// Clean scoped to the detected manager: drop `node_modules` and the
/// manager's own lockfile, clear its cache, then reinstall.
pub fn clean_plan(project: &ProjectContext) -> Result<CleanPlan> {
    let manager = project.require_manager()?;
    let root = project.root();

    let mut plan = CleanPlan::default();
    push_existing(&mut plan.remove, root.join(NODE_MODULES));
    push_existing(&mut plan.remove, root.join(manager.lockfile()));

    if let Some(line) = dispatch::cache_clean(manager) {
        plan.commands.push(line);
    }
    plan.commands
        .push(dispatch::resolve(Some(manager), &Action::Install)?);

    Ok(plan)
}

/// Deep clean is deliberately manager-agnostic: every lockfile goes, along
/// with build output and bundler caches, and every manager installed on
/// the system gets its cache cleared. Does not reinstall.
pub fn deep_clean_plan(project: &ProjectContext, config: &Config) -> Result<CleanPlan> {
    project.require_manager()?;
    let root = project.root();

    let mut plan = CleanPlan::default();
    push_existing(&mut plan.remove, root.join(NODE_MODULES));
    for manager in PackageManager::all() {
        push_existing(&mut plan.remove, root.join(manager.lockfile()));
    }
    for dir in BUILD_DIRS.iter().chain(CACHE_DIRS.iter()) {
        push_existing(&mut plan.remove, root.join(dir));
    }
    for dir in config.extra_clean_dirs() {
        push_existing(&mut plan.remove, root.join(dir));
    }

    for manager in PackageManager::all() {
        if let Some(line) = dispatch::cache_clean(manager) {
            plan.best_effort.push(line);
        }
    }

    Ok(plan)
}

fn push_existing(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if path.exists() {
        paths.push(path);
    }
}

/// Delete a file or directory. A path that is already gone is not an error.
pub fn remove_path(path: &Path) -> Result<()> {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other.with_context(|| format!("Failed to remove {:?}", path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::CleanConfig;
    use std::fs;
    use tempfile::TempDir;

    fn seed(temp: &TempDir, files: &[&str], dirs: &[&str]) -> ProjectContext {
        for file in files {
            fs::write(temp.path().join(file), "").unwrap();
        }
        for dir in dirs {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        ProjectContext::inspect(temp.path())
    }

    fn command_strings(lines: &[CommandLine]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_clean_plan_scopes_to_detected_manager() {
        let temp = TempDir::new().unwrap();
        let project = seed(&temp, &["yarn.lock", "package.json"], &["node_modules"]);

        let plan = clean_plan(&project).unwrap();

        assert_eq!(
            plan.remove,
            vec![
                temp.path().join("node_modules"),
                temp.path().join("yarn.lock")
            ]
        );
        assert_eq!(
            command_strings(&plan.commands),
            vec!["yarn cache clean", "yarn install"]
        );
        assert!(plan.best_effort.is_empty());
    }

    #[test]
    fn test_clean_plan_manifest_only_falls_back_to_npm() {
        let temp = TempDir::new().unwrap();
        let project = seed(&temp, &["package.json"], &["node_modules"]);

        let plan = clean_plan(&project).unwrap();

        // No npm lockfile on disk, so only node_modules is removed
        assert_eq!(plan.remove, vec![temp.path().join("node_modules")]);
        assert_eq!(
            command_strings(&plan.commands),
            vec!["npm cache clean --force", "npm install"]
        );
    }

    #[test]
    fn test_clean_plan_bun_has_no_cache_step() {
        let temp = TempDir::new().unwrap();
        let project = seed(&temp, &["bun.lockb"], &[]);

        let plan = clean_plan(&project).unwrap();

        assert_eq!(command_strings(&plan.commands), vec!["bun install"]);
    }

    #[test]
    fn test_clean_plan_fails_without_project() {
        let temp = TempDir::new().unwrap();
        let project = ProjectContext::inspect(temp.path());

        assert!(clean_plan(&project).is_err());
    }

    #[test]
    fn test_deep_clean_plan_removes_all_lockfiles() {
        let temp = TempDir::new().unwrap();
        let project = seed(
            &temp,
            &["yarn.lock", "pnpm-lock.yaml", "package.json"],
            &["node_modules", "dist", ".vite"],
        );

        let plan = deep_clean_plan(&project, &Config::default()).unwrap();

        assert!(plan.remove.contains(&temp.path().join("node_modules")));
        assert!(plan.remove.contains(&temp.path().join("yarn.lock")));
        assert!(plan.remove.contains(&temp.path().join("pnpm-lock.yaml")));
        assert!(plan.remove.contains(&temp.path().join("dist")));
        assert!(plan.remove.contains(&temp.path().join(".vite")));
        // Absent allow-list entries are not planned
        assert!(!plan.remove.contains(&temp.path().join("build")));

        // Cache clearing covers every manager that has a subcommand
        assert_eq!(
            command_strings(&plan.best_effort),
            vec!["npm cache clean --force", "yarn cache clean", "pnpm store prune"]
        );

        // Deep clean never reinstalls
        assert!(plan.commands.is_empty());
    }

    #[test]
    fn test_deep_clean_plan_includes_config_extras() {
        let temp = TempDir::new().unwrap();
        let project = seed(&temp, &["package.json"], &[".angular"]);

        let config = Config {
            clean: CleanConfig {
                extra_dirs: vec![".angular".to_string(), "missing".to_string()],
            },
        };
        let plan = deep_clean_plan(&project, &config).unwrap();

        assert!(plan.remove.contains(&temp.path().join(".angular")));
        assert!(!plan.remove.contains(&temp.path().join("missing")));
    }

    #[test]
    fn test_deep_clean_plan_fails_without_project() {
        let temp = TempDir::new().unwrap();
        let project = ProjectContext::inspect(temp.path());

        assert!(deep_clean_plan(&project, &Config::default()).is_err());
    }

    #[test]
    fn test_remove_path_handles_files_dirs_and_missing() {
        let temp = TempDir::new().unwrap();

        let file = temp.path().join("yarn.lock");
        fs::write(&file, "").unwrap();
        remove_path(&file).unwrap();
        assert!(!file.exists());

        let dir = temp.path().join("node_modules/.bin");
        fs::create_dir_all(&dir).unwrap();
        remove_path(&temp.path().join("node_modules")).unwrap();
        assert!(!dir.exists());

        remove_path(&temp.path().join("gone")).unwrap();
    }
}
