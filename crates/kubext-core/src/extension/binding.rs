//! Applying blocks to the extension
//!
//! Structured fields go through one mutator per kind. Collections follow the
//! [`Repeatable`](kubext_blocks::Repeatable) policy: `images`/`mappings`
//! replace, `image`/`mapping` append.

use std::path::Path;

use kubext_blocks::{Bind, Binding, Block, Field, bind, bind_into, load_document};

use super::{DeclaredSettings, KubernetesExtension};
use crate::{Error, Project, Result};

const IMAGE: &str = "image";
const MAPPING: &str = "mapping";

impl Bind for DeclaredSettings {
    const KIND: &'static str = KubernetesExtension::BLOCK;

    fn bind_field(&mut self, field: Field<'_>) -> kubext_blocks::Result<Binding> {
        match field.name() {
            "offline" => self.offline = Some(field.boolean()?),
            "useProjectClassPath" => self.use_project_class_path = Some(field.boolean()?),
            "failOnValidationError" => self.fail_on_validation_error = Some(field.boolean()?),
            "mergeWithDekorate" => self.merge_with_dekorate = Some(field.boolean()?),
            "interpolateTemplateParameters" => {
                self.interpolate_template_parameters = Some(field.boolean()?)
            }
            "skipResourceValidation" => self.skip_resource_validation = Some(field.boolean()?),
            "logFollow" => self.log_follow = Some(field.boolean()?),
            "logPodName" => self.log_pod_name = Some(field.string()?),
            "logContainerName" => self.log_container_name = Some(field.string()?),
            "recreate" => self.recreate = Some(field.boolean()?),
            "skip" => self.skip = Some(field.boolean()?),
            "skipApply" => self.skip_apply = Some(field.boolean()?),
            "skipPush" => self.skip_push = Some(field.boolean()?),
            "skipTag" => self.skip_tag = Some(field.boolean()?),
            "failOnNoKubernetesJson" => self.fail_on_no_kubernetes_json = Some(field.boolean()?),
            "createNewResources" => self.create_new_resources = Some(field.boolean()?),
            "servicesOnly" => self.services_only = Some(field.boolean()?),
            "ignoreServices" => self.ignore_services = Some(field.boolean()?),
            "jsonLogDir" => self.json_log_dir = Some(field.path()?),
            "deletePodsOnReplicationControllerUpdate" => {
                self.delete_pods_on_replication_controller_update = Some(field.boolean()?)
            }
            "ignoreRunningOAuthClients" => {
                self.ignore_running_oauth_clients = Some(field.boolean()?)
            }
            "processTemplatesLocally" => self.process_templates_locally = Some(field.boolean()?),
            "rollingUpgrades" => self.rolling_upgrades = Some(field.boolean()?),
            "rollingUpgradePreserveScale" => {
                self.rolling_upgrade_preserve_scale = Some(field.boolean()?)
            }
            "serviceUrlWaitTimeSeconds" => {
                self.service_url_wait_time_seconds = Some(field.integer()?)
            }
            "kubernetesManifest" => self.kubernetes_manifest = Some(field.path()?),
            "pushRetries" => self.push_retries = Some(field.integer()?),
            "skipExtendedAuth" => self.skip_extended_auth = Some(field.boolean()?),
            "skipMachine" => self.skip_machine = Some(field.boolean()?),
            "useColor" => self.use_color = Some(field.boolean()?),
            "maxConnections" => self.max_connections = Some(field.integer()?),
            "filter" => self.filter = Some(field.string()?),
            "apiVersion" => self.api_version = Some(field.string()?),
            "imagePullPolicy" => self.image_pull_policy = Some(field.string()?),
            "autoPull" => self.auto_pull = Some(field.string()?),
            "dockerHost" => self.docker_host = Some(field.string()?),
            "certPath" => self.cert_path = Some(field.string()?),
            "registry" => self.registry = Some(field.string()?),
            "pullRegistry" => self.pull_registry = Some(field.string()?),
            "forcePull" => self.force_pull = Some(field.boolean()?),
            "buildRecreate" => self.build_recreate = Some(field.string()?),
            "buildSourceDirectory" => self.build_source_directory = Some(field.string()?),
            "buildOutputDirectory" => self.build_output_directory = Some(field.string()?),
            "resourceSourceDirectory" => self.resource_source_directory = Some(field.path()?),
            "resourceTargetDirectory" => self.resource_target_directory = Some(field.path()?),
            "resourceEnvironment" => self.resource_environment = Some(field.string()?),
            "workDirectory" => self.work_directory = Some(field.path()?),
            "profile" => self.profile = Some(field.string()?),
            "namespace" => self.namespace = Some(field.string()?),
            "minimalApiVersion" => self.minimal_api_version = Some(field.string()?),
            "sourceDirectory" => self.source_directory = Some(field.string()?),
            "outputDirectory" => self.output_directory = Some(field.string()?),
            "pushRegistry" => self.push_registry = Some(field.string()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

impl Bind for KubernetesExtension {
    const KIND: &'static str = KubernetesExtension::BLOCK;

    fn bind_field(&mut self, field: Field<'_>) -> kubext_blocks::Result<Binding> {
        match field.name() {
            "buildStrategy" => self.build_strategy = Some(field.parse()?),
            "resourceFileType" => self.resource_file_type = Some(field.parse()?),
            "access" => self.access = Some(field.bind()?),
            "resources" => self.resources = Some(field.bind()?),
            "enricher" => self.enricher = Some(field.bind()?),
            "generator" => self.generator = Some(field.bind()?),
            "machine" => self.machine = Some(field.bind()?),
            "authConfig" => self.auth_config = Some(field.bind()?),
            "images" => self.images.replace(field, IMAGE)?,
            "image" => self.images.extend(field)?,
            "mappings" => self.mappings.replace(field, MAPPING)?,
            "mapping" => self.mappings.extend(field)?,
            _ => return self.declared.bind_field(field),
        }
        Ok(Binding::Bound)
    }
}

impl KubernetesExtension {
    /// Apply the assignments of a `kubernetes` block in order.
    ///
    /// Later assignments override earlier ones; unknown fields are reported
    /// together once the block has been walked.
    pub fn apply_block(&mut self, block: &Block) -> Result<()> {
        tracing::debug!(fields = block.len(), "Applying extension block");
        bind_into(self, block)?;
        Ok(())
    }

    /// Build an extension from a parsed document whose root holds a
    /// `kubernetes` block.
    pub fn from_document(project: Project, document: &Block) -> Result<Self> {
        let value = document.get(Self::BLOCK).ok_or_else(|| Error::MissingBlock {
            name: Self::BLOCK.to_string(),
        })?;
        let block = Field::new("document", Self::BLOCK, value).block()?;

        let mut extension = Self::new(project);
        extension.apply_block(block)?;
        Ok(extension)
    }

    /// Load a TOML or YAML document from disk and build an extension from it.
    pub fn load(project: Project, path: &Path) -> Result<Self> {
        let document = load_document(path)?;
        Self::from_document(project, &document)
    }

    pub fn declare_access(&mut self, block: &Block) -> Result<()> {
        self.access = Some(bind(block)?);
        Ok(())
    }

    pub fn declare_resources(&mut self, block: &Block) -> Result<()> {
        self.resources = Some(bind(block)?);
        Ok(())
    }

    pub fn declare_enricher(&mut self, block: &Block) -> Result<()> {
        self.enricher = Some(bind(block)?);
        Ok(())
    }

    pub fn declare_generator(&mut self, block: &Block) -> Result<()> {
        self.generator = Some(bind(block)?);
        Ok(())
    }

    pub fn declare_machine(&mut self, block: &Block) -> Result<()> {
        self.machine = Some(bind(block)?);
        Ok(())
    }

    pub fn declare_auth_config(&mut self, block: &Block) -> Result<()> {
        self.auth_config = Some(bind(block)?);
        Ok(())
    }

    /// `images { app { ... } sidecar { ... } }`: replaces the image list.
    pub fn declare_images(&mut self, block: &Block) -> Result<()> {
        self.images.replace_with_block(block, IMAGE)?;
        Ok(())
    }

    /// `images([{ ... }, { ... }])`: replaces the image list.
    pub fn declare_images_list<'b, I>(&mut self, blocks: I) -> Result<()>
    where
        I: IntoIterator<Item = &'b Block>,
    {
        self.images.replace_with_list(blocks)?;
        Ok(())
    }

    /// `image { ... }`: appends one image.
    pub fn declare_image(&mut self, block: &Block) -> Result<()> {
        self.images.append(block)?;
        Ok(())
    }

    pub fn declare_mappings(&mut self, block: &Block) -> Result<()> {
        self.mappings.replace_with_block(block, MAPPING)?;
        Ok(())
    }

    pub fn declare_mappings_list<'b, I>(&mut self, blocks: I) -> Result<()>
    where
        I: IntoIterator<Item = &'b Block>,
    {
        self.mappings.replace_with_list(blocks)?;
        Ok(())
    }

    pub fn declare_mapping(&mut self, block: &Block) -> Result<()> {
        self.mappings.append(block)?;
        Ok(())
    }
}
