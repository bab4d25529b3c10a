//! The project the extension configures: directory layout plus properties

use std::path::{Path, PathBuf};

use kubext_fs::ProjectLayout;

use crate::{Properties, Result};

/// Project metadata handed to the extension at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    layout: ProjectLayout,
    properties: Properties,
}

impl Project {
    pub fn new(layout: ProjectLayout, properties: Properties) -> Self {
        Self { layout, properties }
    }

    /// A project with the conventional layout under `base`.
    pub fn conventional(base: impl Into<PathBuf>, properties: Properties) -> Result<Self> {
        Ok(Self::new(ProjectLayout::conventional(base)?, properties))
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn base_directory(&self) -> &Path {
        self.layout.base_directory()
    }

    pub fn build_directory(&self) -> &Path {
        self.layout.build_directory()
    }

    pub fn output_directory(&self) -> &Path {
        self.layout.output_directory()
    }
}
