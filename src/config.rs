use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, loaded from `config.toml` in the pmx config
/// directory. Everything is optional; a missing file means defaults.
///
/// Configuration is additive only: it can widen the deep-clean scope but
/// never changes manager detection or command mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clean: CleanConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Extra directories removed by `deep-clean`, relative to the project
    /// root unless absolute. `~` expands to the home directory.
    #[serde(default)]
    pub extra_dirs: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Load from the default location (`config.toml` under `config_dir`).
    pub fn load_default() -> Result<Self> {
        Self::load(&config_dir()?.join("config.toml"))
    }

    /// Deep-clean extras with `~` expanded.
    pub fn extra_clean_dirs(&self) -> Vec<PathBuf> {
        self.clean
            .extra_dirs
            .iter()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).into_owned()))
            .collect()
    }
}

/// Get the XDG config directory for pmx
///
/// Returns `$XDG_CONFIG_HOME/pmx` or `~/.config/pmx` if not set
pub fn config_dir() -> Result<PathBuf> {
    let base = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            directories::BaseDirs::new()
                .expect("Failed to get home directory")
                .home_dir()
                .join(".config")
        });

    Ok(base.join("pmx"))
}
