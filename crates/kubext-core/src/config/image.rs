//! Image declarations

use std::collections::BTreeMap;

use kubext_blocks::{Bind, Binding, Field, Result, Value};
use serde::Serialize;

/// One image to build and push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildConfiguration>,
}

impl Bind for ImageConfiguration {
    const KIND: &'static str = "image";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "name" => self.name = Some(field.string()?),
            "alias" => self.alias = Some(field.string()?),
            "registry" => self.registry = Some(field.string()?),
            "build" => self.build = Some(field.bind()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Port specs such as `8080` or `9090/udp`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cmd: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entry_point: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly: Option<AssemblyConfiguration>,
}

impl Bind for BuildConfiguration {
    const KIND: &'static str = "build";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "from" => self.from = Some(field.string()?),
            "dockerFile" => self.docker_file = Some(field.string()?),
            "contextDir" => self.context_dir = Some(field.string()?),
            "workdir" => self.workdir = Some(field.string()?),
            "user" => self.user = Some(field.string()?),
            "ports" => self.ports = ports(&field)?,
            "tags" => self.tags = field.strings()?,
            "env" => self.env = field.string_map()?,
            "labels" => self.labels = field.string_map()?,
            "cmd" => self.cmd = command(&field)?,
            "entryPoint" => self.entry_point = command(&field)?,
            "assembly" => self.assembly = Some(field.bind()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

/// Ports may be written as numbers or as `port/protocol` strings.
fn ports(field: &Field<'_>) -> Result<Vec<String>> {
    let items = field
        .value()
        .as_list()
        .ok_or_else(|| field.mismatch("list of ports"))?;
    items
        .iter()
        .map(|item| match item {
            Value::Integer(n) => Ok(n.to_string()),
            Value::String(s) => Ok(s.clone()),
            _ => Err(field.mismatch("list of ports")),
        })
        .collect()
}

/// A shell-form string or an exec-form list.
fn command(field: &Field<'_>) -> Result<Vec<String>> {
    match field.value() {
        Value::String(s) => Ok(vec![s.clone()]),
        _ => field.strings(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Assembly>,
}

impl Bind for AssemblyConfiguration {
    const KIND: &'static str = "assembly";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "name" => self.name = Some(field.string()?),
            "targetDir" => self.target_dir = Some(field.string()?),
            "layers" => self.layers = field.bind_list()?,
            "layer" => self.layers.push(field.bind()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

/// One layer of an assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assembly {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<AssemblyFile>,
}

impl Bind for Assembly {
    const KIND: &'static str = "layer";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "id" => self.id = Some(field.string()?),
            "files" => self.files = field.bind_list()?,
            "file" => self.files.push(field.bind()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,
}

impl Bind for AssemblyFile {
    const KIND: &'static str = "file";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "source" => self.source = Some(field.string()?),
            "outputDirectory" => self.output_directory = Some(field.string()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubext_blocks::{Block, bind};
    use pretty_assertions::assert_eq;

    #[test]
    fn ports_accept_numbers_and_strings() {
        let block = Block::new().with(
            "build",
            Block::new()
                .with("from", "eclipse-temurin:17")
                .with("ports", Value::List(vec![8080.into(), "9090/udp".into()]))
                .with("cmd", "java -jar app.jar"),
        );
        let image: ImageConfiguration = bind(&block).unwrap();
        let build = image.build.unwrap();
        assert_eq!(build.ports, vec!["8080", "9090/udp"]);
        assert_eq!(build.cmd, vec!["java -jar app.jar"]);
    }

    #[test]
    fn assembly_layers_bind_in_order() {
        let block = Block::new()
            .with("targetDir", "/deployments")
            .with(
                "layer",
                Block::new()
                    .with("id", "libs")
                    .with("file", Block::new().with("source", "build/libs/app.jar")),
            )
            .with("layer", Block::new().with("id", "static"));
        let assembly: AssemblyConfiguration = bind(&block).unwrap();
        let ids: Vec<_> = assembly.layers.iter().filter_map(|l| l.id.as_deref()).collect();
        assert_eq!(ids, vec!["libs", "static"]);
        assert_eq!(
            assembly.layers[0].files[0].source.as_deref(),
            Some("build/libs/app.jar")
        );
    }
}
