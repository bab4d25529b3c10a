//! Settings catalog: property keys, value kinds and defaults
//!
//! Every independently resolvable setting has a stable dotted property key.
//! The [`CATALOG`] lists them with the name used in the build script block
//! and a description of the default, for tooling that enumerates settings.

use std::fmt;

/// Property keys, grouped as `<domain>.<setting>`.
pub mod keys {
    pub const OFFLINE: &str = "jkube.offline";
    pub const USE_PROJECT_CLASSPATH: &str = "jkube.useProjectClasspath";
    pub const FAIL_ON_VALIDATION_ERROR: &str = "jkube.failOnValidationError";
    pub const MERGE_WITH_DEKORATE: &str = "jkube.mergeWithDekorate";
    pub const INTERPOLATE_TEMPLATE_PARAMETERS: &str = "jkube.interpolateTemplateParameters";
    pub const SKIP_RESOURCE_VALIDATION: &str = "jkube.skipResourceValidation";
    pub const LOG_FOLLOW: &str = "jkube.log.follow";
    pub const LOG_POD: &str = "jkube.log.pod";
    pub const LOG_CONTAINER: &str = "jkube.log.container";
    pub const RECREATE: &str = "jkube.recreate";
    pub const SKIP: &str = "jkube.skip";
    pub const SKIP_APPLY: &str = "jkube.skip.apply";
    pub const SKIP_PUSH: &str = "jkube.skip.push";
    pub const SKIP_TAG: &str = "jkube.skip.tag";
    pub const FAIL_ON_NO_KUBERNETES_JSON: &str = "jkube.deploy.failOnNoKubernetesJson";
    pub const CREATE_NEW_RESOURCES: &str = "jkube.deploy.create";
    pub const SERVICES_ONLY: &str = "jkube.deploy.servicesOnly";
    pub const IGNORE_SERVICES: &str = "jkube.deploy.ignoreServices";
    pub const JSON_LOG_DIR: &str = "jkube.deploy.jsonLogDir";
    pub const DELETE_PODS: &str = "jkube.deploy.deletePods";
    pub const IGNORE_RUNNING_OAUTH_CLIENTS: &str = "jkube.deploy.ignoreRunningOAuthClients";
    pub const PROCESS_TEMPLATES_LOCALLY: &str = "jkube.deploy.processTemplatesLocally";
    pub const ROLLING: &str = "jkube.rolling";
    pub const ROLLING_PRESERVE_SCALE: &str = "jkube.rolling.preserveScale";
    pub const SERVICE_URL_WAIT_SECONDS: &str = "jkube.serviceUrl.waitSeconds";
    pub const KUBERNETES_MANIFEST: &str = "jkube.kubernetesManifest";
    pub const PUSH_RETRIES: &str = "jkube.docker.push.retries";
    pub const SKIP_EXTENDED_AUTH: &str = "jkube.docker.skip.extendedAuth";
    pub const SKIP_MACHINE: &str = "jkube.docker.skip.machine";
    pub const USE_COLOR: &str = "jkube.useColor";
    pub const MAX_CONNECTIONS: &str = "jkube.docker.maxConnections";
    pub const IMAGE_FILTER: &str = "jkube.image.filter";
    pub const DOCKER_API_VERSION: &str = "jkube.docker.apiVersion";
    pub const IMAGE_PULL_POLICY: &str = "jkube.docker.imagePullPolicy";
    pub const AUTO_PULL: &str = "jkube.docker.autoPull";
    pub const DOCKER_HOST: &str = "jkube.docker.host";
    pub const CERT_PATH: &str = "jkube.docker.certPath";
    pub const REGISTRY: &str = "jkube.docker.registry";
    pub const PULL_REGISTRY: &str = "jkube.docker.pull.registry";
    pub const FORCE_PULL: &str = "jkube.build.forcePull";
    pub const BUILD_RECREATE: &str = "jkube.build.recreate";
    pub const BUILD_SOURCE_DIR: &str = "jkube.build.source.dir";
    pub const BUILD_TARGET_DIR: &str = "jkube.build.target.dir";
    pub const BUILD_STRATEGY: &str = "jkube.build.strategy";
    pub const RESOURCE_DIR: &str = "jkube.resourceDir";
    pub const TARGET_DIR: &str = "jkube.targetDir";
    pub const RESOURCE_TYPE: &str = "jkube.resourceType";
    pub const ENVIRONMENT: &str = "jkube.environment";
    pub const WORK_DIR: &str = "jkube.workDir";
    pub const PROFILE: &str = "jkube.profile";
    pub const NAMESPACE: &str = "jkube.namespace";
}

pub const DEFAULT_MAX_CONNECTIONS: i32 = 100;
pub const DEFAULT_SERVICE_URL_WAIT_SECONDS: i32 = 5;
pub const DEFAULT_PUSH_RETRIES: i32 = 0;
pub const DEFAULT_REGISTRY: &str = "docker.io";
pub const DEFAULT_BUILD_RECREATE: &str = "none";
pub const DEFAULT_BUILD_SOURCE_DIR: &str = "src/main/docker";
pub const DEFAULT_BUILD_TARGET_DIR: &str = "build/docker";

/// Relative to the compiled-output directory.
pub const DEFAULT_KUBERNETES_MANIFEST: [&str; 3] = ["META-INF", "jkube", "kubernetes.yml"];
/// Relative to the build directory.
pub const DEFAULT_JSON_LOG_DIR: [&str; 2] = ["jkube", "applyJson"];
/// Relative to the project base directory.
pub const DEFAULT_RESOURCE_SOURCE_DIR: [&str; 3] = ["src", "main", "jkube"];
/// Relative to the compiled-output directory.
pub const DEFAULT_RESOURCE_TARGET_DIR: [&str; 2] = ["META-INF", "jkube"];
/// Relative to the build directory.
pub const DEFAULT_WORK_DIR: &str = "jkube";

/// Value kind of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Boolean,
    Integer,
    String,
    Path,
    /// Two-tier enumerated setting (property, then plain field)
    Enumeration,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingKind::Boolean => "boolean",
            SettingKind::Integer => "integer",
            SettingKind::String => "string",
            SettingKind::Path => "path",
            SettingKind::Enumeration => "enum",
        };
        f.write_str(name)
    }
}

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingSpec {
    /// Field name inside the `kubernetes` block
    pub name: &'static str,
    pub key: &'static str,
    pub kind: SettingKind,
    /// Human-readable default
    pub default: &'static str,
}

const fn spec(name: &'static str, key: &'static str, kind: SettingKind, default: &'static str) -> SettingSpec {
    SettingSpec {
        name,
        key,
        kind,
        default,
    }
}

use SettingKind::{Boolean, Enumeration, Integer, Path, String as Str};

pub const CATALOG: &[SettingSpec] = &[
    spec("offline", keys::OFFLINE, Boolean, "false"),
    spec("useProjectClassPath", keys::USE_PROJECT_CLASSPATH, Boolean, "false"),
    spec("failOnValidationError", keys::FAIL_ON_VALIDATION_ERROR, Boolean, "false"),
    spec("mergeWithDekorate", keys::MERGE_WITH_DEKORATE, Boolean, "false"),
    spec("interpolateTemplateParameters", keys::INTERPOLATE_TEMPLATE_PARAMETERS, Boolean, "true"),
    spec("skipResourceValidation", keys::SKIP_RESOURCE_VALIDATION, Boolean, "false"),
    spec("logFollow", keys::LOG_FOLLOW, Boolean, "true"),
    spec("logPodName", keys::LOG_POD, Str, "-"),
    spec("logContainerName", keys::LOG_CONTAINER, Str, "-"),
    spec("recreate", keys::RECREATE, Boolean, "false"),
    spec("skip", keys::SKIP, Boolean, "false"),
    spec("skipApply", keys::SKIP_APPLY, Boolean, "false"),
    spec("skipPush", keys::SKIP_PUSH, Boolean, "false"),
    spec("skipTag", keys::SKIP_TAG, Boolean, "false"),
    spec("failOnNoKubernetesJson", keys::FAIL_ON_NO_KUBERNETES_JSON, Boolean, "false"),
    spec("createNewResources", keys::CREATE_NEW_RESOURCES, Boolean, "true"),
    spec("servicesOnly", keys::SERVICES_ONLY, Boolean, "false"),
    spec("ignoreServices", keys::IGNORE_SERVICES, Boolean, "false"),
    spec("jsonLogDir", keys::JSON_LOG_DIR, Path, "<build>/jkube/applyJson"),
    spec("deletePodsOnReplicationControllerUpdate", keys::DELETE_PODS, Boolean, "true"),
    spec("ignoreRunningOAuthClients", keys::IGNORE_RUNNING_OAUTH_CLIENTS, Boolean, "true"),
    spec("processTemplatesLocally", keys::PROCESS_TEMPLATES_LOCALLY, Boolean, "true"),
    spec("rollingUpgrades", keys::ROLLING, Boolean, "false"),
    spec("rollingUpgradePreserveScale", keys::ROLLING_PRESERVE_SCALE, Boolean, "false"),
    spec("serviceUrlWaitTimeSeconds", keys::SERVICE_URL_WAIT_SECONDS, Integer, "5"),
    spec("kubernetesManifest", keys::KUBERNETES_MANIFEST, Path, "<output>/META-INF/jkube/kubernetes.yml"),
    spec("pushRetries", keys::PUSH_RETRIES, Integer, "0"),
    spec("skipExtendedAuth", keys::SKIP_EXTENDED_AUTH, Boolean, "false"),
    spec("skipMachine", keys::SKIP_MACHINE, Boolean, "false"),
    spec("useColor", keys::USE_COLOR, Boolean, "true"),
    spec("maxConnections", keys::MAX_CONNECTIONS, Integer, "100"),
    spec("filter", keys::IMAGE_FILTER, Str, "-"),
    spec("apiVersion", keys::DOCKER_API_VERSION, Str, "-"),
    spec("imagePullPolicy", keys::IMAGE_PULL_POLICY, Str, "-"),
    spec("autoPull", keys::AUTO_PULL, Str, "-"),
    spec("dockerHost", keys::DOCKER_HOST, Str, "-"),
    spec("certPath", keys::CERT_PATH, Str, "-"),
    spec("registry", keys::REGISTRY, Str, "docker.io"),
    spec("pullRegistry", keys::PULL_REGISTRY, Str, "<registry>"),
    spec("forcePull", keys::FORCE_PULL, Boolean, "false"),
    spec("buildRecreate", keys::BUILD_RECREATE, Str, "none"),
    spec("buildSourceDirectory", keys::BUILD_SOURCE_DIR, Str, "src/main/docker"),
    spec("buildOutputDirectory", keys::BUILD_TARGET_DIR, Str, "build/docker"),
    spec("buildStrategy", keys::BUILD_STRATEGY, Enumeration, "docker"),
    spec("resourceSourceDirectory", keys::RESOURCE_DIR, Path, "<base>/src/main/jkube"),
    spec("resourceTargetDirectory", keys::TARGET_DIR, Path, "<output>/META-INF/jkube"),
    spec("resourceFileType", keys::RESOURCE_TYPE, Enumeration, "yaml"),
    spec("resourceEnvironment", keys::ENVIRONMENT, Str, "-"),
    spec("workDirectory", keys::WORK_DIR, Path, "<build>/jkube"),
    spec("profile", keys::PROFILE, Str, "-"),
    spec("namespace", keys::NAMESPACE, Str, "-"),
];

/// Environment variable carrying a setting: `jkube.log.pod` -> `JKUBE_LOG_POD`.
pub fn env_var_name(key: &str) -> String {
    key.replace('.', "_").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_keys_are_unique() {
        let keys: HashSet<_> = CATALOG.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn catalog_keys_follow_domain_convention() {
        for spec in CATALOG {
            assert!(spec.key.starts_with("jkube."), "{}", spec.key);
        }
    }

    #[test]
    fn env_var_name_upper_snake_cases_key() {
        assert_eq!(env_var_name(keys::PUSH_RETRIES), "JKUBE_DOCKER_PUSH_RETRIES");
    }
}
