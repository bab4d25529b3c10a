//! Layered configuration for the Kubernetes build extension.
//!
//! A build declares its deployment settings in a `kubernetes` block. Every
//! setting is then resolved in three tiers: a project property override, the
//! value the block declared, and a default. [`KubernetesExtension`] is the
//! root object; the [`config`] kinds hold the nested sub-blocks.
//!
//! ```no_run
//! use std::path::Path;
//! use kubext_core::{KubernetesExtension, Project, Properties};
//!
//! let properties = Properties::new().with("jkube.namespace", "staging");
//! let project = Project::conventional("/work/app", properties)?;
//! let extension = KubernetesExtension::load(project, Path::new("/work/app/kubext.toml"))?;
//! assert_eq!(extension.namespace_or_default()?.as_deref(), Some("staging"));
//! # Ok::<(), kubext_core::Error>(())
//! ```

pub mod cluster;
pub mod config;
pub mod error;
pub mod extension;
pub mod logger;
pub mod mode;
pub mod project;
pub mod property;
pub mod resolve;
pub mod settings;

pub use cluster::{ClusterProbe, StaticProbe};
pub use error::{Error, Result};
pub use extension::{DeclaredSettings, EffectiveSettings, KubernetesExtension};
pub use logger::{KitLogger, TracingLogger};
pub use mode::{BuildStrategy, PlatformMode, ResourceClassifier, ResourceFileType, RuntimeMode};
pub use project::Project;
pub use property::{Properties, PropertySource};
pub use settings::{CATALOG, SettingKind, SettingSpec};
