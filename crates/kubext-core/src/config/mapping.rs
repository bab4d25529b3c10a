//! Resource fragment file-name mappings

use kubext_blocks::{Bind, Binding, Field, Result};
use serde::Serialize;

/// Maps fragment file names to a resource kind, e.g. `foo.yml`, `bar.yml`
/// to a `Var` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Comma-separated file name stems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename_types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl MappingConfig {
    /// The file name stems, trimmed, with empty entries dropped.
    pub fn filenames(&self) -> Vec<&str> {
        self.filename_types
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// A mapping needs a kind and at least one file name.
    pub fn is_valid(&self) -> bool {
        self.kind.as_deref().is_some_and(|k| !k.trim().is_empty()) && !self.filenames().is_empty()
    }
}

impl Bind for MappingConfig {
    const KIND: &'static str = "mapping";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "kind" => self.kind = Some(field.string()?),
            "filenameTypes" => self.filename_types = Some(field.string()?),
            "apiVersion" => self.api_version = Some(field.string()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_split_and_trimmed() {
        let mapping = MappingConfig {
            kind: Some("Var".to_string()),
            filename_types: Some(" foo, bar ,,baz".to_string()),
            api_version: None,
        };
        assert_eq!(mapping.filenames(), vec!["foo", "bar", "baz"]);
        assert!(mapping.is_valid());
    }

    #[test]
    fn mapping_without_kind_is_invalid() {
        let mapping = MappingConfig {
            filename_types: Some("foo".to_string()),
            ..Default::default()
        };
        assert!(!mapping.is_valid());
    }
}
