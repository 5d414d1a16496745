use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Package manager multiplexer
///
/// pmx figures out which JavaScript package manager governs a project
/// (npm, yarn, pnpm, or bun, by lockfile) and translates one set of
/// commands into the right invocation for it. Detection re-reads the
/// project directory on every run; nothing is cached.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory to operate on
    #[arg(
        short = 'C',
        long = "dir",
        global = true,
        value_name = "DIR",
        default_value = "."
    )]
    pub dir: PathBuf,

    /// Print the resolved commands without executing anything
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install project dependencies
    Install,

    /// Run a package script
    Run {
        /// Script name from package.json
        #[arg(value_name = "SCRIPT")]
        script: String,

        /// Extra arguments forwarded to the script
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shortcut for `run dev`
    Dev {
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shortcut for `run build`
    Build {
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shortcut for `run test`
    Test {
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shortcut for `run lint`
    Lint {
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shortcut for `run start`
    Start {
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shortcut for `run preview`
    Preview {
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shortcut for `run format`
    Format {
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shortcut for `run watch`
    Watch {
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Add dependencies
    Add {
        /// Packages to add
        #[arg(value_name = "PACKAGE", required = true)]
        packages: Vec<String>,

        /// Add as development dependencies
        #[arg(short = 'D', long, conflicts_with = "global")]
        dev: bool,

        /// Add globally
        #[arg(short = 'g', long)]
        global: bool,
    },

    /// Remove dependencies
    Remove {
        /// Packages to remove
        #[arg(value_name = "PACKAGE", required = true)]
        packages: Vec<String>,
    },

    /// Update dependencies
    Update,

    /// Remove node_modules and the manager's lockfile, then reinstall
    Clean,

    /// Remove dependencies, every lockfile, build output, and caches
    ///
    /// Aggressive and manager-agnostic: clears the cache of every package
    /// manager installed on the system, not just the detected one.
    #[command(name = "deep-clean")]
    DeepClean {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show the detected package manager and marker files
    Status,
}
