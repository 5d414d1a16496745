// Public API
pub mod cli;
pub mod commands;
pub mod ui;

// Core domain types
mod clean;
mod config;
mod detect;
mod dispatch;
mod project;
mod runner;

// Re-export main types
pub use clean::{clean_plan, deep_clean_plan, CleanPlan};
pub use config::{Config, CleanConfig};
pub use detect::{detect, PackageManager, MANIFEST};
pub use dispatch::{cache_clean, resolve, Action, CommandLine, DispatchError};
pub use project::{ProjectContext, ProjectError};
pub use runner::{run, run_if_available};
