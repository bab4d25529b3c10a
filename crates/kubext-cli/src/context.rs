//! Project context assembly
//!
//! Builds the [`KubernetesExtension`] a command works on from the source
//! arguments. Property sources are layered lowest first:
//!
//! 1. `.properties` files, in the order given
//! 2. `JKUBE_*` environment variables (with `--env`)
//! 3. `-D key=value` arguments
//!
//! Without `--config`, the first of [`DEFAULT_CONFIG_FILES`] found in the base
//! directory is loaded; if there is none the extension starts empty.

use std::path::{Path, PathBuf};

use kubext_core::{KubernetesExtension, Project, Properties};

use crate::cli::SourceArgs;
use crate::error::{CliError, Result};

/// Configuration documents looked up in the base directory.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["kubext.toml", "kubext.yaml", "kubext.yml"];

/// Resolve the base directory to an absolute path.
pub fn base_directory(base: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match base {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}

/// Merge every property source named by the arguments.
pub fn collect_properties(args: &SourceArgs) -> Result<Properties> {
    let mut properties = Properties::new();
    for file in &args.properties_files {
        properties.merge(Properties::load(file)?);
    }
    if args.env {
        properties.merge(Properties::from_env(std::env::vars()));
    }
    properties.extend(args.defines.iter().cloned());
    tracing::debug!(count = properties.len(), "Collected properties");
    Ok(properties)
}

/// The configuration document to load, if any.
pub fn config_path(args: &SourceArgs, base: &Path) -> Result<Option<PathBuf>> {
    match &args.config {
        Some(path) if path.is_file() => Ok(Some(path.clone())),
        Some(path) => Err(CliError::user(format!(
            "Configuration file not found: {}",
            path.display()
        ))),
        None => Ok(DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| base.join(name))
            .find(|path| path.is_file())),
    }
}

/// Build the extension for a command.
pub fn load_extension(args: &SourceArgs) -> Result<KubernetesExtension> {
    let base = base_directory(args.base.as_deref())?;
    let properties = collect_properties(args)?;
    let project = Project::conventional(&base, properties)?;

    match config_path(args, &base)? {
        Some(path) => {
            tracing::debug!(?path, "Loading configuration document");
            Ok(KubernetesExtension::load(project, &path)?)
        }
        None => {
            tracing::debug!(?base, "No configuration document, using defaults");
            Ok(KubernetesExtension::new(project))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defines_override_properties_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("gradle.properties");
        fs::write(&file, "jkube.namespace=from-file\njkube.offline=true\n").unwrap();

        let args = SourceArgs {
            properties_files: vec![file],
            defines: vec![("jkube.namespace".into(), "from-define".into())],
            ..Default::default()
        };
        let properties = collect_properties(&args).unwrap();
        assert_eq!(properties.get("jkube.namespace"), Some("from-define"));
        assert_eq!(properties.get("jkube.offline"), Some("true"));
    }

    #[test]
    fn default_config_is_found_in_base() {
        let temp = TempDir::new().unwrap();
        assert_eq!(config_path(&SourceArgs::default(), temp.path()).unwrap(), None);

        fs::write(temp.path().join("kubext.yml"), "kubernetes: {}\n").unwrap();
        assert_eq!(
            config_path(&SourceArgs::default(), temp.path()).unwrap(),
            Some(temp.path().join("kubext.yml"))
        );
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let args = SourceArgs {
            config: Some(PathBuf::from("/nonexistent/kubext.toml")),
            ..Default::default()
        };
        let err = config_path(&args, Path::new("/")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn relative_base_is_made_absolute() {
        let base = base_directory(Some(Path::new("sub"))).unwrap();
        assert!(base.is_absolute());
        assert!(base.ends_with("sub"));
    }
}
