use std::fmt;
use std::path::Path;
use tracing::debug;

/// Project manifest file name.
pub const MANIFEST: &str = "package.json";

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Detection precedence, highest priority first. A project that has been
/// migrated between managers can carry more than one lockfile; this fixed
/// order keeps detection deterministic regardless of file age.
const PRECEDENCE: [PackageManager; 4] = [
    PackageManager::Bun,
    PackageManager::Pnpm,
    PackageManager::Yarn,
    PackageManager::Npm,
];

impl PackageManager {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            "bun" => Some(PackageManager::Bun),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// The lockfile that marks a project as governed by this manager.
    pub fn lockfile(self) -> &'static str {
        match self {
            PackageManager::Npm => "package-lock.json",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Bun => "bun.lockb",
        }
    }

    /// All managers in detection precedence order.
    pub fn all() -> impl Iterator<Item = PackageManager> {
        PRECEDENCE.into_iter()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Determine which package manager governs `dir`.
///
/// Checks only for the presence of marker files in `dir` itself (no file
/// contents are parsed, no parent directories are searched). A manifest
/// without any lockfile falls back to npm. Returns `None` when no marker
/// is present; callers decide whether that is fatal.
pub fn detect(dir: &Path) -> Option<PackageManager> {
    for manager in PackageManager::all() {
        if dir.join(manager.lockfile()).exists() {
            debug!("detected {} via {}", manager, manager.lockfile());
            return Some(manager);
        }
    }

    if dir.join(MANIFEST).exists() {
        debug!("manifest without lockfile, defaulting to npm");
        return Some(PackageManager::Npm);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "").unwrap();
    }

    #[rstest]
    #[case("bun.lockb", PackageManager::Bun)]
    #[case("pnpm-lock.yaml", PackageManager::Pnpm)]
    #[case("yarn.lock", PackageManager::Yarn)]
    #[case("package-lock.json", PackageManager::Npm)]
    fn test_detect_single_lockfile(#[case] lockfile: &str, #[case] expected: PackageManager) {
        let temp = TempDir::new().unwrap();
        touch(&temp, lockfile);

        assert_eq!(detect(temp.path()), Some(expected));
    }

    #[test]
    fn test_detect_manifest_only_defaults_to_npm() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "package.json");

        assert_eq!(detect(temp.path()), Some(PackageManager::Npm));
    }

    #[test]
    fn test_detect_empty_directory() {
        let temp = TempDir::new().unwrap();

        assert_eq!(detect(temp.path()), None);
    }

    #[rstest]
    #[case(&["yarn.lock", "pnpm-lock.yaml"], PackageManager::Pnpm)]
    #[case(&["package-lock.json", "yarn.lock"], PackageManager::Yarn)]
    #[case(&["bun.lockb", "pnpm-lock.yaml", "yarn.lock", "package-lock.json"], PackageManager::Bun)]
    #[case(&["package.json", "package-lock.json"], PackageManager::Npm)]
    fn test_detect_precedence(#[case] markers: &[&str], #[case] expected: PackageManager) {
        let temp = TempDir::new().unwrap();
        for marker in markers {
            touch(&temp, marker);
        }

        assert_eq!(detect(temp.path()), Some(expected));
    }

    #[test]
    fn test_detect_is_idempotent() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "yarn.lock");

        let first = detect(temp.path());
        let second = detect(temp.path());
        assert_eq!(first, second);
        assert_eq!(first, Some(PackageManager::Yarn));
    }

    #[test]
    fn test_detect_does_not_search_parent_directories() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "yarn.lock");
        let nested = temp.path().join("packages/app");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(detect(&nested), None);
    }

    #[test]
    fn test_from_name_round_trip() {
        for manager in PackageManager::all() {
            assert_eq!(PackageManager::from_name(manager.as_str()), Some(manager));
        }
        assert_eq!(PackageManager::from_name("cargo"), None);
    }
}
