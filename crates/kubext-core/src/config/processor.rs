//! Enricher and generator rules

use std::collections::BTreeMap;

use kubext_blocks::{Bind, Binding, Field, Result};
use serde::Serialize;

/// Which processors (enrichers or generators) run, and their configuration.
///
/// ```text
/// enricher {
///     excludes = ['jkube-expose']
///     config {
///         'jkube-service' { type = 'NodePort' }
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessorConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
    /// Per-processor options keyed by processor name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, BTreeMap<String, String>>,
}

impl ProcessorConfig {
    /// Whether the named processor is enabled by these rules.
    ///
    /// Exclusions win; an empty include list admits everything.
    pub fn is_enabled(&self, name: &str) -> bool {
        if self.excludes.iter().any(|e| e == name) {
            return false;
        }
        self.includes.is_empty() || self.includes.iter().any(|i| i == name)
    }

    /// Options for one processor.
    pub fn options(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.config.get(name)
    }
}

impl Bind for ProcessorConfig {
    const KIND: &'static str = "processor";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "includes" => self.includes = field.strings()?,
            "excludes" => self.excludes = field.strings()?,
            "config" => {
                for (name, value) in field.block()?.entries() {
                    let options = Field::new(Self::KIND, name, value).string_map()?;
                    self.config.insert(name.to_string(), options);
                }
            }
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}
