use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::detect::{self, PackageManager, MANIFEST};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(
        "no JavaScript project in {}: no package.json or lockfile found (run `npm init` to create one)",
        path.display()
    )]
    NoProjectFound { path: PathBuf },
}

/// Snapshot of the package-manager markers in a project directory.
///
/// Inspection re-reads the filesystem on every construction; nothing is
/// cached between invocations, so a context is only valid for the files
/// as they were when it was built.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
    markers: Vec<&'static str>,
    manager: Option<PackageManager>,
}

impl ProjectContext {
    pub fn inspect(root: impl Into<PathBuf>) -> Self {
        let root = root.into();

        let mut markers = Vec::new();
        for manager in PackageManager::all() {
            if root.join(manager.lockfile()).exists() {
                markers.push(manager.lockfile());
            }
        }
        if root.join(MANIFEST).exists() {
            markers.push(MANIFEST);
        }

        let manager = detect::detect(&root);

        Self {
            root,
            markers,
            manager,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Marker files found in the project directory, precedence order.
    pub fn markers(&self) -> &[&'static str] {
        &self.markers
    }

    pub fn manager(&self) -> Option<PackageManager> {
        self.manager
    }

    pub fn has_manifest(&self) -> bool {
        self.markers.contains(&MANIFEST)
    }

    /// The manager governing this project, or an error suitable for the
    /// user when the directory carries no project markers at all.
    pub fn require_manager(&self) -> Result<PackageManager, ProjectError> {
        self.manager.ok_or_else(|| ProjectError::NoProjectFound {
            path: self.root.clone(),
        })
    }
}
