//! Property sources: ambient string overrides attached to the project
//!
//! Values come from `-D` style arguments, environment variables and
//! `.properties` files. They are always strings; each setting parses its own.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::settings::{CATALOG, env_var_name};
use crate::Result;

/// Read-only string lookup by property key.
pub trait PropertySource {
    fn get(&self, key: &str) -> Option<&str>;
}

impl PropertySource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

/// Key-ordered property map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// The raw value for `key`, blank or not.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of this set; its values win.
    pub fn merge(&mut self, other: Properties) {
        self.values.extend(other.values);
    }

    /// Load a `.properties` file.
    pub fn load(path: &Path) -> Result<Self> {
        let pairs = kubext_fs::read_properties(path)?;
        Ok(pairs.into_iter().collect())
    }

    /// Pick the environment variables that name catalog settings.
    ///
    /// A setting's variable is its key upper-cased with dots replaced by
    /// underscores, so `jkube.docker.maxConnections` is read from
    /// `JKUBE_DOCKER_MAXCONNECTIONS`.
    pub fn from_env<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let by_name: HashMap<String, &'static str> = CATALOG
            .iter()
            .map(|spec| (env_var_name(spec.key), spec.key))
            .collect();

        let mut props = Properties::new();
        for (name, value) in vars {
            if let Some(key) = by_name.get(name.as_ref()) {
                tracing::trace!(var = name.as_ref(), key, "Mapped environment variable");
                props.set(*key, value);
            }
        }
        props
    }
}

impl PropertySource for Properties {
    fn get(&self, key: &str) -> Option<&str> {
        Properties::get(self, key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Properties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}
