//! Effective setting values
//!
//! Every `*_or_default` method re-reads the project properties, so a
//! property changed between calls is picked up by the next call.

use std::path::{Path, PathBuf};

use super::KubernetesExtension;
use crate::cluster::ClusterProbe;
use crate::logger::KitLogger;
use crate::mode::{BuildStrategy, ResourceFileType};
use crate::property::Properties;
use crate::resolve::{resolve, resolve_field, resolve_optional, resolve_path};
use crate::settings::{self, keys};
use crate::Result;

/// `base` joined with each default path segment.
fn under(base: &Path, segments: &[&str]) -> PathBuf {
    segments.iter().fold(base.to_path_buf(), |path, segment| path.join(segment))
}

impl KubernetesExtension {
    fn properties(&self) -> &Properties {
        self.project.properties()
    }

    fn flag(&self, key: &str, declared: Option<bool>, default: bool) -> Result<bool> {
        resolve(self.properties(), key, declared, default)
    }

    fn number(&self, key: &str, declared: Option<i32>, default: i32) -> Result<i32> {
        resolve(self.properties(), key, declared, default)
    }

    fn text(&self, key: &str, declared: &Option<String>) -> Result<Option<String>> {
        resolve_optional(self.properties(), key, declared.clone(), None)
    }

    fn text_or(&self, key: &str, declared: &Option<String>, default: &str) -> Result<String> {
        resolve(self.properties(), key, declared.clone(), default.to_string())
    }

    fn path(&self, key: &str, declared: &Option<PathBuf>, default: PathBuf) -> PathBuf {
        resolve_path(
            self.properties(),
            self.project.layout(),
            key,
            declared.as_deref(),
            default,
        )
    }

    pub fn offline_or_default(&self) -> Result<bool> {
        self.flag(keys::OFFLINE, self.declared.offline, false)
    }

    pub fn use_project_class_path_or_default(&self) -> Result<bool> {
        self.flag(keys::USE_PROJECT_CLASSPATH, self.declared.use_project_class_path, false)
    }

    pub fn fail_on_validation_error_or_default(&self) -> Result<bool> {
        self.flag(keys::FAIL_ON_VALIDATION_ERROR, self.declared.fail_on_validation_error, false)
    }

    pub fn merge_with_dekorate_or_default(&self) -> Result<bool> {
        self.flag(keys::MERGE_WITH_DEKORATE, self.declared.merge_with_dekorate, false)
    }

    pub fn interpolate_template_parameters_or_default(&self) -> Result<bool> {
        self.flag(
            keys::INTERPOLATE_TEMPLATE_PARAMETERS,
            self.declared.interpolate_template_parameters,
            true,
        )
    }

    pub fn skip_resource_validation_or_default(&self) -> Result<bool> {
        self.flag(keys::SKIP_RESOURCE_VALIDATION, self.declared.skip_resource_validation, false)
    }

    pub fn log_follow_or_default(&self) -> Result<bool> {
        self.flag(keys::LOG_FOLLOW, self.declared.log_follow, true)
    }

    pub fn log_pod_name_or_default(&self) -> Result<Option<String>> {
        self.text(keys::LOG_POD, &self.declared.log_pod_name)
    }

    pub fn log_container_name_or_default(&self) -> Result<Option<String>> {
        self.text(keys::LOG_CONTAINER, &self.declared.log_container_name)
    }

    pub fn recreate_or_default(&self) -> Result<bool> {
        self.flag(keys::RECREATE, self.declared.recreate, false)
    }

    pub fn skip_or_default(&self) -> Result<bool> {
        self.flag(keys::SKIP, self.declared.skip, false)
    }

    pub fn skip_apply_or_default(&self) -> Result<bool> {
        self.flag(keys::SKIP_APPLY, self.declared.skip_apply, false)
    }

    pub fn skip_push_or_default(&self) -> Result<bool> {
        self.flag(keys::SKIP_PUSH, self.declared.skip_push, false)
    }

    pub fn skip_tag_or_default(&self) -> Result<bool> {
        self.flag(keys::SKIP_TAG, self.declared.skip_tag, false)
    }

    pub fn fail_on_no_kubernetes_json_or_default(&self) -> Result<bool> {
        self.flag(
            keys::FAIL_ON_NO_KUBERNETES_JSON,
            self.declared.fail_on_no_kubernetes_json,
            false,
        )
    }

    pub fn create_new_resources_or_default(&self) -> Result<bool> {
        self.flag(keys::CREATE_NEW_RESOURCES, self.declared.create_new_resources, true)
    }

    pub fn services_only_or_default(&self) -> Result<bool> {
        self.flag(keys::SERVICES_ONLY, self.declared.services_only, false)
    }

    pub fn ignore_services_or_default(&self) -> Result<bool> {
        self.flag(keys::IGNORE_SERVICES, self.declared.ignore_services, false)
    }

    /// Defaults to `<build>/jkube/applyJson`.
    pub fn json_log_dir_or_default(&self) -> PathBuf {
        self.path(
            keys::JSON_LOG_DIR,
            &self.declared.json_log_dir,
            under(self.project.build_directory(), &settings::DEFAULT_JSON_LOG_DIR),
        )
    }

    pub fn delete_pods_on_replication_controller_update_or_default(&self) -> Result<bool> {
        self.flag(
            keys::DELETE_PODS,
            self.declared.delete_pods_on_replication_controller_update,
            true,
        )
    }

    pub fn ignore_running_oauth_clients_or_default(&self) -> Result<bool> {
        self.flag(
            keys::IGNORE_RUNNING_OAUTH_CLIENTS,
            self.declared.ignore_running_oauth_clients,
            true,
        )
    }

    pub fn process_templates_locally_or_default(&self) -> Result<bool> {
        self.flag(
            keys::PROCESS_TEMPLATES_LOCALLY,
            self.declared.process_templates_locally,
            true,
        )
    }

    pub fn rolling_upgrades_or_default(&self) -> Result<bool> {
        self.flag(keys::ROLLING, self.declared.rolling_upgrades, false)
    }

    pub fn rolling_upgrade_preserve_scale_or_default(&self) -> Result<bool> {
        self.flag(
            keys::ROLLING_PRESERVE_SCALE,
            self.declared.rolling_upgrade_preserve_scale,
            false,
        )
    }

    pub fn service_url_wait_time_seconds_or_default(&self) -> Result<i32> {
        self.number(
            keys::SERVICE_URL_WAIT_SECONDS,
            self.declared.service_url_wait_time_seconds,
            settings::DEFAULT_SERVICE_URL_WAIT_SECONDS,
        )
    }

    /// Defaults to `<output>/META-INF/jkube/kubernetes.yml`.
    pub fn kubernetes_manifest_or_default(&self) -> PathBuf {
        self.path(
            keys::KUBERNETES_MANIFEST,
            &self.declared.kubernetes_manifest,
            under(self.project.output_directory(), &settings::DEFAULT_KUBERNETES_MANIFEST),
        )
    }

    /// The manifest to apply.
    ///
    /// The path never depends on the cluster; an incompatible cluster only
    /// produces two advisories on `logger`.
    pub fn manifest<L, P>(&self, logger: &L, probe: &P) -> PathBuf
    where
        L: KitLogger + ?Sized,
        P: ClusterProbe + ?Sized,
    {
        if probe.is_incompatible_cluster_type() {
            logger.warn("OpenShift cluster detected, using Kubernetes manifests");
            logger.warn("Switch to openshift-gradle-plugin in case there are any problems");
        }
        self.kubernetes_manifest_or_default()
    }

    pub fn push_retries_or_default(&self) -> Result<i32> {
        self.number(
            keys::PUSH_RETRIES,
            self.declared.push_retries,
            settings::DEFAULT_PUSH_RETRIES,
        )
    }

    pub fn skip_extended_auth_or_default(&self) -> Result<bool> {
        self.flag(keys::SKIP_EXTENDED_AUTH, self.declared.skip_extended_auth, false)
    }

    pub fn skip_machine_or_default(&self) -> Result<bool> {
        self.flag(keys::SKIP_MACHINE, self.declared.skip_machine, false)
    }

    pub fn use_color_or_default(&self) -> Result<bool> {
        self.flag(keys::USE_COLOR, self.declared.use_color, true)
    }

    pub fn max_connections_or_default(&self) -> Result<i32> {
        self.number(
            keys::MAX_CONNECTIONS,
            self.declared.max_connections,
            settings::DEFAULT_MAX_CONNECTIONS,
        )
    }

    pub fn filter_or_default(&self) -> Result<Option<String>> {
        self.text(keys::IMAGE_FILTER, &self.declared.filter)
    }

    pub fn api_version_or_default(&self) -> Result<Option<String>> {
        self.text(keys::DOCKER_API_VERSION, &self.declared.api_version)
    }

    pub fn image_pull_policy_or_default(&self) -> Result<Option<String>> {
        self.text(keys::IMAGE_PULL_POLICY, &self.declared.image_pull_policy)
    }

    pub fn auto_pull_or_default(&self) -> Result<Option<String>> {
        self.text(keys::AUTO_PULL, &self.declared.auto_pull)
    }

    pub fn docker_host_or_default(&self) -> Result<Option<String>> {
        self.text(keys::DOCKER_HOST, &self.declared.docker_host)
    }

    pub fn cert_path_or_default(&self) -> Result<Option<String>> {
        self.text(keys::CERT_PATH, &self.declared.cert_path)
    }

    pub fn force_pull_or_default(&self) -> Result<bool> {
        self.flag(keys::FORCE_PULL, self.declared.force_pull, false)
    }

    pub fn registry_or_default(&self) -> Result<String> {
        self.text_or(keys::REGISTRY, &self.declared.registry, settings::DEFAULT_REGISTRY)
    }

    /// Falls back to the effective registry, not to a fixed default.
    pub fn pull_registry_or_default(&self) -> Result<String> {
        let registry = self.registry_or_default()?;
        self.text_or(keys::PULL_REGISTRY, &self.declared.pull_registry, &registry)
    }

    pub fn build_recreate_or_default(&self) -> Result<String> {
        self.text_or(
            keys::BUILD_RECREATE,
            &self.declared.build_recreate,
            settings::DEFAULT_BUILD_RECREATE,
        )
    }

    pub fn build_source_directory_or_default(&self) -> Result<String> {
        self.text_or(
            keys::BUILD_SOURCE_DIR,
            &self.declared.build_source_directory,
            settings::DEFAULT_BUILD_SOURCE_DIR,
        )
    }

    pub fn build_output_directory_or_default(&self) -> Result<String> {
        self.text_or(
            keys::BUILD_TARGET_DIR,
            &self.declared.build_output_directory,
            settings::DEFAULT_BUILD_TARGET_DIR,
        )
    }

    /// Defaults to `<base>/src/main/jkube`.
    pub fn resource_source_directory_or_default(&self) -> PathBuf {
        self.path(
            keys::RESOURCE_DIR,
            &self.declared.resource_source_directory,
            under(self.project.base_directory(), &settings::DEFAULT_RESOURCE_SOURCE_DIR),
        )
    }

    /// Defaults to `<output>/META-INF/jkube`.
    pub fn resource_target_directory_or_default(&self) -> PathBuf {
        self.path(
            keys::TARGET_DIR,
            &self.declared.resource_target_directory,
            under(self.project.output_directory(), &settings::DEFAULT_RESOURCE_TARGET_DIR),
        )
    }

    pub fn resource_environment_or_default(&self) -> Result<Option<String>> {
        self.text(keys::ENVIRONMENT, &self.declared.resource_environment)
    }

    /// Defaults to `<build>/jkube`.
    pub fn work_directory_or_default(&self) -> PathBuf {
        self.path(
            keys::WORK_DIR,
            &self.declared.work_directory,
            self.project.build_directory().join(settings::DEFAULT_WORK_DIR),
        )
    }

    pub fn profile_or_default(&self) -> Result<Option<String>> {
        self.text(keys::PROFILE, &self.declared.profile)
    }

    pub fn namespace_or_default(&self) -> Result<Option<String>> {
        self.text(keys::NAMESPACE, &self.declared.namespace)
    }

    /// Property override, else the plain `build_strategy` field.
    pub fn build_strategy_or_default(&self) -> Result<BuildStrategy> {
        resolve_field(self.properties(), keys::BUILD_STRATEGY, self.build_strategy())
    }

    /// Property override, else the plain `resource_file_type` field.
    pub fn resource_file_type_or_default(&self) -> Result<ResourceFileType> {
        resolve_field(self.properties(), keys::RESOURCE_TYPE, self.resource_file_type())
    }

    /// Every strategy except Jib needs a Docker daemon.
    pub fn is_docker_access_required(&self) -> Result<bool> {
        Ok(self.build_strategy_or_default()?.requires_docker_access())
    }
}
