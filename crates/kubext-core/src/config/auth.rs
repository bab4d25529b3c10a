//! Registry authentication

use std::collections::BTreeMap;

use kubext_blocks::{Bind, Binding, Field, Result};
use serde::Serialize;

/// Credentials for pushing to and pulling from image registries.
///
/// `push` and `pull` hold per-direction overrides (`username`, `password`,
/// ...) applied on top of the shared values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryAuthConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub push: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pull: BTreeMap<String, String>,
}

impl Bind for RegistryAuthConfiguration {
    const KIND: &'static str = "authConfig";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "username" => self.username = Some(field.string()?),
            "password" => self.password = Some(field.string()?),
            "email" => self.email = Some(field.string()?),
            "authToken" => self.auth_token = Some(field.string()?),
            "push" => self.push = field.string_map()?,
            "pull" => self.pull = field.string_map()?,
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}
