//! Fully resolved snapshot of the extension

use std::path::PathBuf;

use serde::Serialize;

use super::KubernetesExtension;
use crate::config::{
    ClusterConfiguration, DockerMachineConfiguration, ImageConfiguration, MappingConfig,
    ProcessorConfig, RegistryAuthConfiguration, ResourceConfig,
};
use crate::mode::{BuildStrategy, PlatformMode, ResourceClassifier, ResourceFileType, RuntimeMode};
use crate::Result;

/// Every setting after resolution, plus the declared sub-configurations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    pub runtime_mode: RuntimeMode,
    pub platform_mode: PlatformMode,
    pub resource_classifier: ResourceClassifier,
    pub support_oauth_clients: bool,
    pub build_strategy: BuildStrategy,
    pub resource_file_type: ResourceFileType,
    pub docker_access_required: bool,

    pub offline: bool,
    pub use_project_class_path: bool,
    pub fail_on_validation_error: bool,
    pub merge_with_dekorate: bool,
    pub interpolate_template_parameters: bool,
    pub skip_resource_validation: bool,
    pub log_follow: bool,
    pub log_pod_name: Option<String>,
    pub log_container_name: Option<String>,
    pub recreate: bool,
    pub skip: bool,
    pub skip_apply: bool,
    pub skip_push: bool,
    pub skip_tag: bool,
    pub fail_on_no_kubernetes_json: bool,
    pub create_new_resources: bool,
    pub services_only: bool,
    pub ignore_services: bool,
    pub json_log_dir: PathBuf,
    pub delete_pods_on_replication_controller_update: bool,
    #[serde(rename = "ignoreRunningOAuthClients")]
    pub ignore_running_oauth_clients: bool,
    pub process_templates_locally: bool,
    pub rolling_upgrades: bool,
    pub rolling_upgrade_preserve_scale: bool,
    pub service_url_wait_time_seconds: i32,
    pub kubernetes_manifest: PathBuf,
    pub push_retries: i32,
    pub skip_extended_auth: bool,
    pub skip_machine: bool,
    pub use_color: bool,
    pub max_connections: i32,
    pub filter: Option<String>,
    pub api_version: Option<String>,
    pub image_pull_policy: Option<String>,
    pub auto_pull: Option<String>,
    pub docker_host: Option<String>,
    pub cert_path: Option<String>,
    pub force_pull: bool,
    pub registry: String,
    pub pull_registry: String,
    pub build_recreate: String,
    pub build_source_directory: String,
    pub build_output_directory: String,
    pub resource_source_directory: PathBuf,
    pub resource_target_directory: PathBuf,
    pub resource_environment: Option<String>,
    pub work_directory: PathBuf,
    pub profile: Option<String>,
    pub namespace: Option<String>,

    pub minimal_api_version: Option<String>,
    pub source_directory: Option<String>,
    pub output_directory: Option<String>,
    pub push_registry: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<ClusterConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enricher: Option<ProcessorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<ProcessorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine: Option<DockerMachineConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_config: Option<RegistryAuthConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings: Option<Vec<MappingConfig>>,
}

impl KubernetesExtension {
    /// Resolve every setting at once.
    ///
    /// Fails on the first property that does not parse; there is no partial
    /// result.
    pub fn resolve_all(&self) -> Result<EffectiveSettings> {
        let settings = EffectiveSettings {
            runtime_mode: self.runtime_mode(),
            platform_mode: self.platform_mode(),
            resource_classifier: self.resource_classifier(),
            support_oauth_clients: self.is_support_oauth_clients(),
            build_strategy: self.build_strategy_or_default()?,
            resource_file_type: self.resource_file_type_or_default()?,
            docker_access_required: self.is_docker_access_required()?,

            offline: self.offline_or_default()?,
            use_project_class_path: self.use_project_class_path_or_default()?,
            fail_on_validation_error: self.fail_on_validation_error_or_default()?,
            merge_with_dekorate: self.merge_with_dekorate_or_default()?,
            interpolate_template_parameters: self.interpolate_template_parameters_or_default()?,
            skip_resource_validation: self.skip_resource_validation_or_default()?,
            log_follow: self.log_follow_or_default()?,
            log_pod_name: self.log_pod_name_or_default()?,
            log_container_name: self.log_container_name_or_default()?,
            recreate: self.recreate_or_default()?,
            skip: self.skip_or_default()?,
            skip_apply: self.skip_apply_or_default()?,
            skip_push: self.skip_push_or_default()?,
            skip_tag: self.skip_tag_or_default()?,
            fail_on_no_kubernetes_json: self.fail_on_no_kubernetes_json_or_default()?,
            create_new_resources: self.create_new_resources_or_default()?,
            services_only: self.services_only_or_default()?,
            ignore_services: self.ignore_services_or_default()?,
            json_log_dir: self.json_log_dir_or_default(),
            delete_pods_on_replication_controller_update: self
                .delete_pods_on_replication_controller_update_or_default()?,
            ignore_running_oauth_clients: self.ignore_running_oauth_clients_or_default()?,
            process_templates_locally: self.process_templates_locally_or_default()?,
            rolling_upgrades: self.rolling_upgrades_or_default()?,
            rolling_upgrade_preserve_scale: self.rolling_upgrade_preserve_scale_or_default()?,
            service_url_wait_time_seconds: self.service_url_wait_time_seconds_or_default()?,
            kubernetes_manifest: self.kubernetes_manifest_or_default(),
            push_retries: self.push_retries_or_default()?,
            skip_extended_auth: self.skip_extended_auth_or_default()?,
            skip_machine: self.skip_machine_or_default()?,
            use_color: self.use_color_or_default()?,
            max_connections: self.max_connections_or_default()?,
            filter: self.filter_or_default()?,
            api_version: self.api_version_or_default()?,
            image_pull_policy: self.image_pull_policy_or_default()?,
            auto_pull: self.auto_pull_or_default()?,
            docker_host: self.docker_host_or_default()?,
            cert_path: self.cert_path_or_default()?,
            force_pull: self.force_pull_or_default()?,
            registry: self.registry_or_default()?,
            pull_registry: self.pull_registry_or_default()?,
            build_recreate: self.build_recreate_or_default()?,
            build_source_directory: self.build_source_directory_or_default()?,
            build_output_directory: self.build_output_directory_or_default()?,
            resource_source_directory: self.resource_source_directory_or_default(),
            resource_target_directory: self.resource_target_directory_or_default(),
            resource_environment: self.resource_environment_or_default()?,
            work_directory: self.work_directory_or_default(),
            profile: self.profile_or_default()?,
            namespace: self.namespace_or_default()?,

            minimal_api_version: self.declared.minimal_api_version.clone(),
            source_directory: self.declared.source_directory.clone(),
            output_directory: self.declared.output_directory.clone(),
            push_registry: self.declared.push_registry.clone(),

            access: self.access.clone(),
            resources: self.resources.clone(),
            enricher: self.enricher.clone(),
            generator: self.generator.clone(),
            images: self.images.items().map(<[_]>::to_vec),
            machine: self.machine.clone(),
            auth_config: self.auth_config.clone(),
            mappings: self.mappings.items().map(<[_]>::to_vec),
        };
        tracing::debug!(
            build_strategy = %settings.build_strategy,
            images = settings.images.as_ref().map_or(0, Vec::len),
            "Resolved extension settings"
        );
        Ok(settings)
    }
}
