//! [`TestProject`] builder for extension test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use kubext_core::{KubernetesExtension, Project, Properties};
use tempfile::TempDir;

/// A temporary project directory with the conventional layout.
///
/// # Example
///
/// ```rust,no_run
/// use kubext_test_utils::TestProject;
///
/// let project = TestProject::new().property("jkube.namespace", "dev");
/// let path = project.write_document("kubext.toml", "[kubernetes]\noffline = true\n");
/// let extension = project.load(&path);
/// assert!(extension.offline_or_default().unwrap());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    properties: Properties,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            properties: Properties::new(),
        }
    }

    /// Root of the temporary project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add one property override.
    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Write `content` to `name` under the project root and return its path.
    pub fn write_document(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// A [`Project`] over this directory carrying the configured properties.
    pub fn project(&self) -> Project {
        Project::conventional(self.root(), self.properties.clone()).unwrap()
    }

    /// An extension with nothing declared.
    pub fn extension(&self) -> KubernetesExtension {
        KubernetesExtension::new(self.project())
    }

    /// Load the extension from a document written with [`Self::write_document`].
    ///
    /// # Panics
    /// Panics if the document fails to load or bind.
    pub fn load(&self, path: &Path) -> KubernetesExtension {
        KubernetesExtension::load(self.project(), path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {e}", path.display()))
    }
}
