//! Resource generation settings

use std::collections::BTreeMap;

use kubext_blocks::{Bind, Binding, Field, Result};
use serde::Serialize;

/// Controller-level settings applied to generated resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<MetaDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<MetaDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remotes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_resource_definitions: Vec<String>,
}

impl Bind for ResourceConfig {
    const KIND: &'static str = "resources";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "controllerName" => self.controller_name = Some(field.string()?),
            "imagePullPolicy" => self.image_pull_policy = Some(field.string()?),
            "replicas" => self.replicas = Some(field.integer()?),
            "namespace" => self.namespace = Some(field.string()?),
            "serviceAccount" => self.service_account = Some(field.string()?),
            "env" => self.env = field.string_map()?,
            "labels" => self.labels = Some(field.bind()?),
            "annotations" => self.annotations = Some(field.bind()?),
            "configMap" => self.config_map = Some(field.bind()?),
            "remotes" => self.remotes = field.strings()?,
            "customResourceDefinitions" => self.custom_resource_definitions = field.strings()?,
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

/// Labels or annotations, per target resource kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDataConfig {
    /// Applied to every generated resource
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub all: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub deployment: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pod: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub replica_set: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub service: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ingress: BTreeMap<String, String>,
}

impl Bind for MetaDataConfig {
    const KIND: &'static str = "metadata";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        let target = match field.name() {
            "all" => &mut self.all,
            "deployment" => &mut self.deployment,
            "pod" => &mut self.pod,
            "replicaSet" => &mut self.replica_set,
            "service" => &mut self.service,
            "ingress" => &mut self.ingress,
            _ => return Ok(Binding::Unknown),
        };
        *target = field.string_map()?;
        Ok(Binding::Bound)
    }
}

/// A ConfigMap assembled from literal values and files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<ConfigMapEntry>,
}

impl Bind for ConfigMap {
    const KIND: &'static str = "configMap";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "name" => self.name = Some(field.string()?),
            "entries" => self.entries = field.bind_list()?,
            "entry" => self.entries.push(field.bind()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigMapEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Bind for ConfigMapEntry {
    const KIND: &'static str = "entry";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "name" => self.name = Some(field.string()?),
            "value" => self.value = Some(field.string()?),
            "file" => self.file = Some(field.string()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubext_blocks::{Block, Error, bind};
    use pretty_assertions::assert_eq;

    #[test]
    fn binds_nested_metadata_and_config_map() {
        let block = Block::new()
            .with("replicas", 3)
            .with("labels", Block::new().with("all", Block::new().with("team", "core")))
            .with(
                "configMap",
                Block::new()
                    .with("name", "app-config")
                    .with("entry", Block::new().with("name", "A").with("value", "1"))
                    .with("entry", Block::new().with("file", "app.properties")),
            );
        let resources: ResourceConfig = bind(&block).unwrap();
        assert_eq!(resources.replicas, Some(3));
        assert_eq!(resources.labels.unwrap().all["team"], "core");
        let config_map = resources.config_map.unwrap();
        assert_eq!(config_map.name.as_deref(), Some("app-config"));
        assert_eq!(config_map.entries.len(), 2);
        assert_eq!(config_map.entries[1].file.as_deref(), Some("app.properties"));
    }

    #[test]
    fn unknown_metadata_target_is_reported() {
        let block = Block::new().with("labels", Block::new().with("daemonSet", Block::new()));
        let err = bind::<ResourceConfig>(&block).unwrap_err();
        assert!(matches!(err, Error::UnknownFields { ref kind, .. } if kind == "metadata"));
    }
}
