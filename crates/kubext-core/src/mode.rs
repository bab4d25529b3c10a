//! Enumerated settings and fixed modes of the Kubernetes extension

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// How container images are built.
///
/// Names are matched exactly, as written in property values and scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStrategy {
    /// OpenShift source-to-image
    S2i,
    /// Docker daemon build
    #[default]
    Docker,
    /// Daemonless Jib build
    Jib,
    /// Cloud Native Buildpacks
    Buildpacks,
}

impl BuildStrategy {
    const EXPECTED: &'static str = "s2i, docker, jib, buildpacks";

    /// Whether builds with this strategy talk to a Docker daemon.
    pub fn requires_docker_access(&self) -> bool {
        !matches!(self, BuildStrategy::Jib)
    }
}

impl FromStr for BuildStrategy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "s2i" => Ok(BuildStrategy::S2i),
            "docker" => Ok(BuildStrategy::Docker),
            "jib" => Ok(BuildStrategy::Jib),
            "buildpacks" => Ok(BuildStrategy::Buildpacks),
            _ => Err(Error::UnknownVariant {
                kind: "build strategy",
                value: s.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for BuildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStrategy::S2i => write!(f, "s2i"),
            BuildStrategy::Docker => write!(f, "docker"),
            BuildStrategy::Jib => write!(f, "jib"),
            BuildStrategy::Buildpacks => write!(f, "buildpacks"),
        }
    }
}

/// Serialization format of generated resource files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFileType {
    Json,
    #[default]
    Yaml,
}

impl FromStr for ResourceFileType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(ResourceFileType::Json),
            "yaml" => Ok(ResourceFileType::Yaml),
            _ => Err(Error::UnknownVariant {
                kind: "resource file type",
                value: s.to_string(),
                expected: "json, yaml",
            }),
        }
    }
}

impl fmt::Display for ResourceFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceFileType::Json => write!(f, "json"),
            ResourceFileType::Yaml => write!(f, "yaml"),
        }
    }
}

/// Cluster flavour the extension targets at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Kubernetes,
    Openshift,
}

/// Platform whose resource dialect is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformMode {
    Kubernetes,
    Openshift,
}

/// Classifier of generated resource manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceClassifier {
    Kubernetes,
    Openshift,
}

impl ResourceClassifier {
    /// Manifest file stem, e.g. `kubernetes` in `kubernetes.yml`.
    pub fn value(&self) -> &'static str {
        match self {
            ResourceClassifier::Kubernetes => "kubernetes",
            ResourceClassifier::Openshift => "openshift",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_strategy_names_are_exact() {
        assert_eq!("jib".parse::<BuildStrategy>().unwrap(), BuildStrategy::Jib);
        assert!("Jib".parse::<BuildStrategy>().is_err());
        assert!("".parse::<BuildStrategy>().is_err());
    }

    #[test]
    fn only_jib_skips_docker_access() {
        assert!(!BuildStrategy::Jib.requires_docker_access());
        assert!(BuildStrategy::Docker.requires_docker_access());
        assert!(BuildStrategy::S2i.requires_docker_access());
        assert!(BuildStrategy::Buildpacks.requires_docker_access());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for strategy in [
            BuildStrategy::S2i,
            BuildStrategy::Docker,
            BuildStrategy::Jib,
            BuildStrategy::Buildpacks,
        ] {
            assert_eq!(strategy.to_string().parse::<BuildStrategy>().unwrap(), strategy);
        }
        assert_eq!(ResourceFileType::Json.to_string(), "json");
    }

    #[test]
    fn unknown_resource_type_lists_expected_values() {
        let err = "xml".parse::<ResourceFileType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown resource file type 'xml', expected one of: json, yaml"
        );
    }
}
