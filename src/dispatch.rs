use std::fmt;
use thiserror::Error;

use crate::detect::PackageManager;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no package manager detected for this project; cannot dispatch the requested action")]
    UnsupportedManager,
}

/// An abstract operation to perform against a project, independent of
/// which package manager ends up carrying it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Install,
    Run { script: String, args: Vec<String> },
    Add { packages: Vec<String>, dev: bool, global: bool },
    Remove { packages: Vec<String> },
    Update,
}

/// A resolved command line: program followed by its arguments.
///
/// Resolution only builds the token list; executing it is the caller's
/// job (see `runner`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            tokens: vec![program.into()],
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.tokens.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn argv(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Translate an action into the concrete command line for the detected
/// manager. Pure: no filesystem access, no subprocess, no state.
///
/// `None` means no manager was detected; every action fails against it.
pub fn resolve(
    manager: Option<PackageManager>,
    action: &Action,
) -> Result<CommandLine, DispatchError> {
    let manager = manager.ok_or(DispatchError::UnsupportedManager)?;
    let program = manager.as_str();

    let line = match action {
        Action::Install => CommandLine::new(program).arg("install"),

        Action::Run { script, args } => CommandLine::new(program)
            .arg("run")
            .arg(script)
            .args(args.iter().cloned()),

        Action::Add {
            packages,
            dev,
            global,
        } => add_command(manager, packages, *dev, *global),

        Action::Remove { packages } => {
            let verb = match manager {
                PackageManager::Npm => "uninstall",
                _ => "remove",
            };
            CommandLine::new(program).arg(verb).args(packages.iter().cloned())
        }

        Action::Update => {
            let verb = match manager {
                PackageManager::Yarn => "upgrade",
                _ => "update",
            };
            CommandLine::new(program).arg(verb)
        }
    };

    Ok(line)
}

fn add_command(
    manager: PackageManager,
    packages: &[String],
    dev: bool,
    global: bool,
) -> CommandLine {
    let packages = packages.iter().cloned();
    let program = manager.as_str();

    match manager {
        PackageManager::Npm => {
            let flag = if global {
                "--global"
            } else if dev {
                "--save-dev"
            } else {
                "--save"
            };
            CommandLine::new(program).arg("install").arg(flag).args(packages)
        }
        PackageManager::Yarn => {
            if global {
                CommandLine::new(program).arg("global").arg("add").args(packages)
            } else if dev {
                CommandLine::new(program).arg("add").arg("--dev").args(packages)
            } else {
                CommandLine::new(program).arg("add").args(packages)
            }
        }
        PackageManager::Pnpm => {
            let line = CommandLine::new(program).arg("add");
            if global {
                line.arg("-g").args(packages)
            } else if dev {
                line.arg("-D").args(packages)
            } else {
                line.args(packages)
            }
        }
        PackageManager::Bun => {
            // bun has no global flag distinct from a plain add
            let line = CommandLine::new(program).arg("add");
            if dev && !global {
                line.arg("-D").args(packages)
            } else {
                line.args(packages)
            }
        }
    }
}

/// Cache-clearing invocation for a manager, when it has one. bun keeps no
/// clearable local cache subcommand.
pub fn cache_clean(manager: PackageManager) -> Option<CommandLine> {
    match manager {
        PackageManager::Npm => Some(
            CommandLine::new("npm").arg("cache").arg("clean").arg("--force"),
        ),
        PackageManager::Yarn => Some(CommandLine::new("yarn").arg("cache").arg("clean")),
        PackageManager::Pnpm => Some(CommandLine::new("pnpm").arg("store").arg("prune")),
        PackageManager::Bun => None,
    }
}
