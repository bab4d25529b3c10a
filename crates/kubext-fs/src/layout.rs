//! Project directory layout
//!
//! The build tool hands the extension three absolute directories: the project
//! base, the build directory and the compiled-output directory. Path-valued
//! settings compute their defaults from these and resolve property overrides
//! against the base.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Build directory name under the project base in the conventional layout.
pub const BUILD_DIR: &str = "build";

/// Compiled-output directory relative to the build directory.
pub const OUTPUT_DIR: [&str; 3] = ["classes", "java", "main"];

/// Absolute directories of the project being configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    base: PathBuf,
    build: PathBuf,
    output: PathBuf,
}

impl ProjectLayout {
    /// Create a layout from explicit directories.
    pub fn new(base: impl Into<PathBuf>, build: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            build: build.into(),
            output: output.into(),
        }
    }

    /// Create the conventional layout rooted at `base`:
    /// `<base>/build` and `<base>/build/classes/java/main`.
    ///
    /// The base must be absolute; nothing is checked on disk.
    pub fn conventional(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        if !base.is_absolute() {
            return Err(Error::RelativeBase { path: base });
        }
        let build = base.join(BUILD_DIR);
        let output = OUTPUT_DIR.iter().fold(build.clone(), |dir, seg| dir.join(seg));
        Ok(Self { base, build, output })
    }

    /// The project base directory.
    pub fn base_directory(&self) -> &Path {
        &self.base
    }

    /// The build output directory.
    pub fn build_directory(&self) -> &Path {
        &self.build
    }

    /// The compiled-output directory.
    pub fn output_directory(&self) -> &Path {
        &self.output
    }

    /// Resolve a path string against the base directory.
    ///
    /// Absolute input replaces the base, as with [`Path::join`].
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_layout_nests_output_under_build() {
        let layout = ProjectLayout::conventional("/proj").unwrap();
        assert_eq!(layout.build_directory(), Path::new("/proj/build"));
        assert_eq!(
            layout.output_directory(),
            Path::new("/proj/build/classes/java/main")
        );
    }

    #[test]
    fn conventional_layout_rejects_relative_base() {
        assert!(ProjectLayout::conventional("proj").is_err());
    }
}
