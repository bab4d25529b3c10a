//! The `kubernetes` extension root
//!
//! [`KubernetesExtension`] holds everything a build script declared inside
//! its `kubernetes { ... }` block and answers every setting query through
//! the three-tier resolver. The methods are split by concern:
//!
//! - [`binding`]: applying blocks and the per-kind mutators
//! - [`accessors`]: the `*_or_default` resolvers and manifest selection
//! - [`effective`]: the fully resolved snapshot

mod accessors;
mod binding;
mod effective;

use std::path::PathBuf;

use kubext_blocks::Repeatable;
use serde::Serialize;

use crate::Project;
use crate::config::{
    ClusterConfiguration, DockerMachineConfiguration, ImageConfiguration, MappingConfig,
    ProcessorConfig, RegistryAuthConfiguration, ResourceConfig,
};
use crate::mode::{BuildStrategy, PlatformMode, ResourceClassifier, ResourceFileType, RuntimeMode};

pub use effective::EffectiveSettings;

/// Scalar values assigned in the extension block.
///
/// `None` means the build script never assigned the field; the resolver then
/// falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredSettings {
    pub offline: Option<bool>,
    pub use_project_class_path: Option<bool>,
    pub fail_on_validation_error: Option<bool>,
    pub merge_with_dekorate: Option<bool>,
    pub interpolate_template_parameters: Option<bool>,
    pub skip_resource_validation: Option<bool>,
    pub log_follow: Option<bool>,
    pub log_pod_name: Option<String>,
    pub log_container_name: Option<String>,
    pub recreate: Option<bool>,
    pub skip: Option<bool>,
    pub skip_apply: Option<bool>,
    pub skip_push: Option<bool>,
    pub skip_tag: Option<bool>,
    pub fail_on_no_kubernetes_json: Option<bool>,
    pub create_new_resources: Option<bool>,
    pub services_only: Option<bool>,
    pub ignore_services: Option<bool>,
    pub json_log_dir: Option<PathBuf>,
    pub delete_pods_on_replication_controller_update: Option<bool>,
    #[serde(rename = "ignoreRunningOAuthClients")]
    pub ignore_running_oauth_clients: Option<bool>,
    pub process_templates_locally: Option<bool>,
    pub rolling_upgrades: Option<bool>,
    pub rolling_upgrade_preserve_scale: Option<bool>,
    pub service_url_wait_time_seconds: Option<i32>,
    pub kubernetes_manifest: Option<PathBuf>,
    pub push_retries: Option<i32>,
    pub skip_extended_auth: Option<bool>,
    pub skip_machine: Option<bool>,
    pub use_color: Option<bool>,
    pub max_connections: Option<i32>,
    pub filter: Option<String>,
    pub api_version: Option<String>,
    pub image_pull_policy: Option<String>,
    pub auto_pull: Option<String>,
    pub docker_host: Option<String>,
    pub cert_path: Option<String>,
    pub registry: Option<String>,
    pub pull_registry: Option<String>,
    pub force_pull: Option<bool>,
    pub build_recreate: Option<String>,
    pub build_source_directory: Option<String>,
    pub build_output_directory: Option<String>,
    pub resource_source_directory: Option<PathBuf>,
    pub resource_target_directory: Option<PathBuf>,
    pub resource_environment: Option<String>,
    pub work_directory: Option<PathBuf>,
    pub profile: Option<String>,
    pub namespace: Option<String>,
    pub minimal_api_version: Option<String>,
    pub source_directory: Option<String>,
    pub output_directory: Option<String>,
    pub push_registry: Option<String>,
}

/// Configuration root of the Kubernetes build extension.
#[derive(Debug, Clone)]
pub struct KubernetesExtension {
    project: Project,
    declared: DeclaredSettings,
    build_strategy: Option<BuildStrategy>,
    resource_file_type: Option<ResourceFileType>,
    access: Option<ClusterConfiguration>,
    resources: Option<ResourceConfig>,
    enricher: Option<ProcessorConfig>,
    generator: Option<ProcessorConfig>,
    images: Repeatable<ImageConfiguration>,
    machine: Option<DockerMachineConfiguration>,
    auth_config: Option<RegistryAuthConfiguration>,
    mappings: Repeatable<MappingConfig>,
}

impl KubernetesExtension {
    /// Name of the extension block in build scripts and documents.
    pub const BLOCK: &'static str = "kubernetes";

    /// An extension with nothing declared.
    pub fn new(project: Project) -> Self {
        Self {
            project,
            declared: DeclaredSettings::default(),
            build_strategy: None,
            resource_file_type: None,
            access: None,
            resources: None,
            enricher: None,
            generator: None,
            images: Repeatable::new(),
            machine: None,
            auth_config: None,
            mappings: Repeatable::new(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn declared(&self) -> &DeclaredSettings {
        &self.declared
    }

    pub fn set_build_strategy(&mut self, strategy: BuildStrategy) {
        self.build_strategy = Some(strategy);
    }

    pub fn set_resource_file_type(&mut self, file_type: ResourceFileType) {
        self.resource_file_type = Some(file_type);
    }

    /// The plain build strategy field, ignoring property overrides.
    pub fn build_strategy(&self) -> BuildStrategy {
        self.build_strategy.unwrap_or_default()
    }

    /// The plain resource file type field, ignoring property overrides.
    pub fn resource_file_type(&self) -> ResourceFileType {
        self.resource_file_type.unwrap_or_default()
    }

    pub fn runtime_mode(&self) -> RuntimeMode {
        RuntimeMode::Kubernetes
    }

    pub fn platform_mode(&self) -> PlatformMode {
        PlatformMode::Kubernetes
    }

    pub fn resource_classifier(&self) -> ResourceClassifier {
        ResourceClassifier::Kubernetes
    }

    pub fn is_support_oauth_clients(&self) -> bool {
        false
    }

    pub fn access(&self) -> Option<&ClusterConfiguration> {
        self.access.as_ref()
    }

    pub fn resources(&self) -> Option<&ResourceConfig> {
        self.resources.as_ref()
    }

    pub fn enricher(&self) -> Option<&ProcessorConfig> {
        self.enricher.as_ref()
    }

    pub fn generator(&self) -> Option<&ProcessorConfig> {
        self.generator.as_ref()
    }

    /// Declared images, or `None` if no image declaration was ever made.
    pub fn images(&self) -> Option<&[ImageConfiguration]> {
        self.images.items()
    }

    pub fn machine(&self) -> Option<&DockerMachineConfiguration> {
        self.machine.as_ref()
    }

    pub fn auth_config(&self) -> Option<&RegistryAuthConfiguration> {
        self.auth_config.as_ref()
    }

    pub fn mappings(&self) -> Option<&[MappingConfig]> {
        self.mappings.items()
    }

    // DSL-only values with no property or default tier

    pub fn minimal_api_version(&self) -> Option<&str> {
        self.declared.minimal_api_version.as_deref()
    }

    pub fn source_directory(&self) -> Option<&str> {
        self.declared.source_directory.as_deref()
    }

    pub fn output_directory(&self) -> Option<&str> {
        self.declared.output_directory.as_deref()
    }

    pub fn push_registry(&self) -> Option<&str> {
        self.declared.push_registry.as_deref()
    }
}
