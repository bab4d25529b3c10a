//! Docker machine configuration

use std::collections::BTreeMap;

use kubext_blocks::{Bind, Binding, Field, Result};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerMachineConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regenerate_certs_after_start: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub create_options: BTreeMap<String, String>,
}

impl Bind for DockerMachineConfiguration {
    const KIND: &'static str = "machine";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "name" => self.name = Some(field.string()?),
            "autoCreate" => self.auto_create = Some(field.boolean()?),
            "regenerateCertsAfterStart" => {
                self.regenerate_certs_after_start = Some(field.boolean()?)
            }
            "createOptions" => self.create_options = field.string_map()?,
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}
